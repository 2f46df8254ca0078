// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # calc — a pure arithmetic calculator
//!
//! Five stateless operations over `f64` with one guarded edge case, exposed
//! as a plain function-call surface plus a small dispatch layer for front
//! ends that work in operation names.
//!
//! ## Core Contract
//!
//! | Operation | Result | Error condition |
//! |-----------|--------|-----------------|
//! | [`add`] | `a + b` | none |
//! | [`subtract`] | `a - b` | none |
//! | [`multiply`] | `a * b` | none |
//! | [`divide`] | `a / b` | [`Error::DivisionByZero`] when `b == 0` |
//! | [`power`] | `a` raised to `b` | none (IEEE semantics for undefined results) |
//!
//! `divide` rejects a divisor of exactly zero (both IEEE zeros) rather than
//! returning an infinity or NaN the caller could silently propagate. The
//! other operations are total over `f64`; overflow and precision behave as
//! IEEE-754 defines them, not as something this crate manages.
//!
//! ## Quick Start
//!
//! ```rust
//! use calc::{add, divide, evaluate, Error, Op};
//!
//! assert_eq!(add(5.0, 3.0), 8.0);
//! assert_eq!(evaluate(Op::Power, 2.0, 10.0).unwrap(), 1024.0);
//!
//! // The one failure mode:
//! assert!(matches!(divide(5.0, 0.0), Err(Error::DivisionByZero)));
//!
//! // Front ends parse operation tokens into `Op`:
//! let op: Op = "+".parse().unwrap();
//! assert_eq!(op.apply(2.0, 2.0).unwrap(), 4.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ops.rs       pure operations      add / subtract / multiply / divide / power
//! eval.rs      dispatch boundary    Op tokens, evaluate(), Evaluation record
//! error.rs     one error enum       DivisionByZero plus interface errors
//! config.rs    display settings     optional calc.yaml, read by the CLI only
//! ```
//!
//! The core holds no state between calls and performs no I/O. Printing,
//! formatting, and configuration belong to the `calc` binary; the library is
//! lint-guarded against growing print statements.

// Core modules
pub mod config;
pub mod error;
pub mod eval;
pub mod ops;

// Re-exports
pub use config::{DisplayConfig, CONFIG_FILE};
pub use error::{Error, Result};
pub use eval::{evaluate, Evaluation, Op};
pub use ops::{add, divide, multiply, power, subtract};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
