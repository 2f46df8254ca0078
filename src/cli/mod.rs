//! CLI command implementations
//!
//! Command handlers for the `calc` binary:
//! - `eval`: one-shot evaluation
//! - `repl`: interactive session
//! - `util`: shared argument and formatting helpers
//!
//! The `ops` and `schema` listings are small enough to live in `main.rs`.

pub mod eval;
pub mod repl;
pub mod util;

// Re-export command functions for convenient access
pub use eval::cmd_eval;
pub use repl::cmd_repl;
