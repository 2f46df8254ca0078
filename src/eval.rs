//! Operation dispatch: named operations over the calculator core
//!
//! The front end works in operation *tokens* (`"add"`, `"+"`, `"pow"`, …).
//! This module is the boundary that turns a token into a validated [`Op`] and
//! an `Op` into a call on the core, so the functions in [`crate::ops`] stay a
//! plain function-call surface with no knowledge of names or serialization.

use crate::error::{Error, Result};
use crate::ops;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calculator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Op {
    /// All operations, in display order
    pub const ALL: [Op; 5] = [
        Op::Add,
        Op::Subtract,
        Op::Multiply,
        Op::Divide,
        Op::Power,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
            Op::Power => "power",
        }
    }

    /// Conventional infix symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
            Op::Power => "^",
        }
    }

    /// One-line summary for the `ops` listing
    pub fn summary(self) -> &'static str {
        match self {
            Op::Add => "a + b",
            Op::Subtract => "a - b",
            Op::Multiply => "a * b",
            Op::Divide => "a / b (fails on a zero divisor)",
            Op::Power => "a raised to the power b",
        }
    }

    /// Apply this operation to two operands
    ///
    /// Only `Divide` can fail; see [`crate::divide`].
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64> {
        match self {
            Op::Add => Ok(ops::add(lhs, rhs)),
            Op::Subtract => Ok(ops::subtract(lhs, rhs)),
            Op::Multiply => Ok(ops::multiply(lhs, rhs)),
            Op::Divide => ops::divide(lhs, rhs),
            Op::Power => Ok(ops::power(lhs, rhs)),
        }
    }
}

impl FromStr for Op {
    type Err = Error;

    /// Accepts the operation name (case-insensitive), a short alias, or the
    /// infix symbol. `x` is taken for multiplication, `**` for power.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "add" | "+" => Ok(Op::Add),
            "subtract" | "sub" | "-" => Ok(Op::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Op::Multiply),
            "divide" | "div" | "/" => Ok(Op::Divide),
            "power" | "pow" | "^" | "**" => Ok(Op::Power),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Evaluate one operation against the calculator core
///
/// # Examples
/// ```
/// use calc::{evaluate, Op};
///
/// assert_eq!(evaluate(Op::Power, 2.0, 10.0).unwrap(), 1024.0);
/// assert!(evaluate(Op::Divide, 5.0, 0.0).is_err());
/// ```
pub fn evaluate(op: Op, lhs: f64, rhs: f64) -> Result<f64> {
    op.apply(lhs, rhs)
}

/// The serializable record of one successful evaluation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Evaluation", description = "One evaluated calculator operation")]
pub struct Evaluation {
    /// The operation applied
    pub op: Op,

    /// Left operand
    pub lhs: f64,

    /// Right operand
    pub rhs: f64,

    /// Result value
    pub result: f64,
}

impl Evaluation {
    /// Evaluate and package one call; fails exactly when the operation fails
    pub fn new(op: Op, lhs: f64, rhs: f64) -> Result<Self> {
        let result = op.apply(lhs, rhs)?;
        Ok(Self {
            op,
            lhs,
            rhs,
            result,
        })
    }
}
