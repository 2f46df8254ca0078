//! Interactive calculator session.

use std::io::{self, BufRead, Write};

use calc::{DisplayConfig, Op, Result};

use super::util::{format_number, parse_operand, resolve_config};

/// Help text for the REPL.
const HELP_TEXT: &str = r"
Enter one operation per line: <lhs> <op> <rhs>

  5 + 3
  15 / 3
  2 pow 10

Operations accept names or symbols: add (+), subtract (-),
multiply (* or x), divide (/), power (^ or **).

Commands:
  .help             Show this help message
  .ops              List operations
  .precision <n>    Set display precision for this session
  .exit             Exit the session
  .quit             Exit the session

Tips:
  - Errors do not end the session
  - Press Ctrl+D to exit
";

/// `calc repl [--precision <n>]`
pub fn cmd_repl(args: &[String]) -> Result<()> {
    let mut config = resolve_config(args)?;

    println!("calc {} interactive session", calc::VERSION);
    println!("Type .help for help, .quit to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        // Print prompt
        print!("{}", config.prompt);
        stdout.flush()?;

        // Read line
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!();
                println!("Goodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
        }

        let trimmed = line.trim();

        // Handle empty input
        if trimmed.is_empty() {
            continue;
        }

        // Handle meta-commands
        if trimmed.starts_with('.') {
            match handle_meta_command(trimmed, &mut config) {
                MetaResult::Continue => continue,
                MetaResult::Exit => break,
            }
        }

        // Evaluate; errors report and the session continues
        match eval_line(trimmed) {
            Ok(result) => println!("{}", format_number(result, config.precision)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

/// Parse and evaluate one `<lhs> <op> <rhs>` line
fn eval_line(line: &str) -> Result<f64> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err("expected: <lhs> <op> <rhs>".into());
    }

    let lhs = parse_operand(tokens[0])?;
    let op: Op = tokens[1].parse()?;
    let rhs = parse_operand(tokens[2])?;

    op.apply(lhs, rhs)
}

enum MetaResult {
    Continue,
    Exit,
}

fn handle_meta_command(cmd: &str, config: &mut DisplayConfig) -> MetaResult {
    let cmd_lower = cmd.to_lowercase();
    let parts: Vec<&str> = cmd_lower.split_whitespace().collect();

    match parts.first().copied() {
        Some(".help" | ".h") => {
            println!("{}", HELP_TEXT);
            MetaResult::Continue
        }
        Some(".exit" | ".quit" | ".q") => {
            println!("Goodbye!");
            MetaResult::Exit
        }
        Some(".ops") => {
            for op in Op::ALL {
                println!("  {:<10} {:<3} {}", op.name(), op.symbol(), op.summary());
            }
            MetaResult::Continue
        }
        Some(".precision") => {
            match parts.get(1).and_then(|n| n.parse::<usize>().ok()) {
                Some(n) => {
                    config.precision = n;
                    println!("Precision set to {}", n);
                }
                None => println!("Usage: .precision <n>"),
            }
            MetaResult::Continue
        }
        Some(other) => {
            println!("Unknown command: {}", other);
            println!("Type .help for available commands.");
            MetaResult::Continue
        }
        None => MetaResult::Continue,
    }
}
