//! CLI utility helpers

use calc::{DisplayConfig, Error, Result};

/// Parse an operand the way the front end owes the core: plain `f64`
/// conversion, preserving the offending token in the error
pub fn parse_operand(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| Error::InvalidOperand(s.to_string()))
}

/// Parse a `--precision <n>` argument pair
pub fn parse_precision_arg(args: &[String]) -> Result<Option<usize>> {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--precision" || arg == "-p" {
            return match args.get(i + 1) {
                Some(n) => n
                    .parse::<usize>()
                    .map(Some)
                    .map_err(|_| Error::Other(format!("invalid precision: {}", n))),
                None => Err("Usage: --precision <n>".into()),
            };
        }
    }
    Ok(None)
}

/// True when `--json` appears in the arguments
pub fn has_json_flag(args: &[String]) -> bool {
    args.iter().any(|a| a == "--json")
}

/// Effective display settings for one invocation: defaults, then `calc.yaml`
/// in the working directory, then flags
pub fn resolve_config(args: &[String]) -> Result<DisplayConfig> {
    let dir = std::env::current_dir().map_err(Error::Io)?;
    let precision = parse_precision_arg(args)?;
    DisplayConfig::resolve(&dir, precision, has_json_flag(args))
}

/// Format a result for humans: fixed-point at `precision` with trailing
/// zeros (and a bare trailing dot) trimmed
///
/// `8.0` prints as `8`, one third at the default precision as `0.333333`.
/// Non-finite values use `f64`'s own notation (`inf`, `NaN`).
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", precision, value);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
