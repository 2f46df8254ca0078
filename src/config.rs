//! Display and REPL configuration
//!
//! An optional `calc.yaml` in the working directory adjusts how results are
//! printed and how the REPL presents itself. Command-line flags override the
//! file; the file overrides built-in defaults. The calculator core never
//! reads configuration; it shapes output only.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional config file
pub const CONFIG_FILE: &str = "calc.yaml";

/// Display and REPL settings (`calc.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Calc Config", description = "Display and REPL settings")]
pub struct DisplayConfig {
    /// Decimal places shown for non-integral results
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// REPL prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Emit JSON instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_precision() -> usize {
    6
}

fn default_prompt() -> String {
    "calc> ".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            prompt: default_prompt(),
            json: false,
        }
    }
}

impl DisplayConfig {
    /// Load `calc.yaml` from a directory; `Ok(None)` when the file is absent
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_file).map_err(Error::Io)?;
        let config: DisplayConfig = serde_norway::from_str(&content)?;

        Ok(Some(config))
    }

    /// Resolve the effective settings: built-in defaults, then `calc.yaml`
    /// from `dir` if present, then command-line overrides
    pub fn resolve(dir: &Path, precision: Option<usize>, json: bool) -> Result<Self> {
        let mut config = Self::load_from_dir(dir)?.unwrap_or_default();
        if let Some(p) = precision {
            config.precision = p;
        }
        if json {
            config.json = true;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.precision, 6);
        assert_eq!(config.prompt, "calc> ");
        assert!(!config.json);
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DisplayConfig::load_from_dir(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "precision: 2\n").unwrap();

        let config = DisplayConfig::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.precision, 2);
        // Unset fields fall back to serde defaults
        assert_eq!(config.prompt, "calc> ");
        assert!(!config.json);
    }

    #[test]
    fn test_resolve_flag_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "precision: 2\nprompt: \"? \"\n",
        )
        .unwrap();

        let config = DisplayConfig::resolve(dir.path(), Some(10), true).unwrap();
        assert_eq!(config.precision, 10);
        assert_eq!(config.prompt, "? ");
        assert!(config.json);
    }

    #[test]
    fn test_resolve_without_file_or_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = DisplayConfig::resolve(dir.path(), None, false).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "precision: [oops\n").unwrap();
        assert!(DisplayConfig::load_from_dir(dir.path()).is_err());
    }
}
