//! calc CLI - interactive front end for the calculator library
//!
//! Commands:
//!   eval    - Evaluate one operation
//!   repl    - Interactive session
//!   ops     - List supported operations
//!   schema  - Print JSON schema for machine-readable output

mod cli;

use calc::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "eval" => cli::cmd_eval(&args[2..]),
        "repl" => cli::cmd_repl(&args[2..]),
        "ops" => cmd_ops(),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("calc {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
calc - pure arithmetic calculator

USAGE:
    calc <COMMAND> [OPTIONS]

COMMANDS:
    eval <lhs> <op> <rhs>    Evaluate one operation (name or symbol)
    repl                     Interactive session
    ops                      List supported operations
    schema [name]            Print JSON schema for output type
    version                  Print version

OPTIONS:
    --precision <n>          Decimal places for printed results (default: 6)
    --json                   JSON output format (eval)

EXAMPLES:
    calc eval 5 + 3
    calc eval 2 pow 10
    calc eval 15 / 3 --json
    calc repl
"#
    );
}

fn cmd_ops() -> Result<()> {
    println!("Supported operations:\n");
    for op in Op::ALL {
        println!("  {:<10} {:<3} {}", op.name(), op.symbol(), op.summary());
    }
    Ok(())
}

fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: evaluation, config");
            Ok(())
        }
        "evaluation" => print_schema::<Evaluation>(),
        "config" => print_schema::<DisplayConfig>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
