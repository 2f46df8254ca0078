//! One-shot evaluation command

use calc::{Evaluation, Op, Result};

use super::util::{format_number, parse_operand, resolve_config};

/// `calc eval <lhs> <op> <rhs> [--json] [--precision <n>]`
pub fn cmd_eval(args: &[String]) -> Result<()> {
    let positional = strip_flags(args);
    if positional.len() != 3 {
        return Err("Usage: calc eval <lhs> <op> <rhs> [--json] [--precision <n>]".into());
    }

    let config = resolve_config(args)?;

    let lhs = parse_operand(&positional[0])?;
    let op: Op = positional[1].parse()?;
    let rhs = parse_operand(&positional[2])?;

    let evaluation = Evaluation::new(op, lhs, rhs)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", format_number(evaluation.result, config.precision));
    }

    Ok(())
}

/// Drop recognized flags (and their values) so `-` and negative operands
/// survive as positional arguments
fn strip_flags(args: &[String]) -> Vec<String> {
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {}
            "--precision" | "-p" => i += 1,
            other => positional.push(other.to_string()),
        }
        i += 1;
    }
    positional
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_flags_keeps_minus_tokens() {
        let args: Vec<String> = ["5", "-", "-3", "--json", "--precision", "2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(strip_flags(&args), vec!["5", "-", "-3"]);
    }

    #[test]
    fn test_strip_flags_empty() {
        assert_eq!(strip_flags(&[]), Vec::<String>::new());
    }
}
