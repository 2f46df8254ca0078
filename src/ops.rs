//! The calculator core: five arithmetic operations over `f64`
//!
//! Every function here is pure and stateless: no I/O, no state carried
//! between calls. `add`, `subtract`, `multiply`, and `power` are total
//! over the `f64` domain. `divide` is the only fallible operation: a divisor
//! of exactly zero is rejected up front instead of producing an IEEE infinity
//! or NaN that callers could silently propagate.

use crate::error::{Error, Result};

/// Add two numbers
///
/// # Examples
/// ```
/// assert_eq!(calc::add(5.0, 3.0), 8.0);
/// ```
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`
///
/// # Examples
/// ```
/// assert_eq!(calc::subtract(10.0, 4.0), 6.0);
/// ```
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
///
/// # Examples
/// ```
/// assert_eq!(calc::multiply(6.0, 7.0), 42.0);
/// ```
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// Fails with [`Error::DivisionByZero`] when `b` is exactly zero (either IEEE
/// zero). The check is arithmetic input validation, not an epsilon
/// comparison: `1e-300` is a legal divisor, `-0.0` is not.
///
/// # Examples
/// ```
/// assert_eq!(calc::divide(15.0, 3.0).unwrap(), 5.0);
/// assert!(calc::divide(5.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

/// Raise `a` to the power `b`
///
/// Total over `f64`, with `f64::powf` semantics for results undefined over
/// the reals: `0.0^-1.0` is `inf`, `(-1.0)^0.5` is NaN.
///
/// # Examples
/// ```
/// assert_eq!(calc::power(2.0, 10.0), 1024.0);
/// ```
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
        assert_eq!(add(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(1.0, 1.0), 0.0);
        assert_eq!(subtract(0.0, 5.0), -5.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3.0, 4.0), 12.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert_eq!(multiply(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
        assert_eq!(divide(9.0, 3.0).unwrap(), 3.0);
        assert_eq!(divide(-6.0, 2.0).unwrap(), -3.0);
        assert_eq!(divide(1.0, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(divide(5.0, 0.0), Err(Error::DivisionByZero)));
        assert!(matches!(divide(0.0, 0.0), Err(Error::DivisionByZero)));
        assert!(matches!(divide(5.0, -0.0), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_divide_zero_check_is_exact() {
        // Tiny but nonzero divisors are legal
        assert!(divide(1.0, 1e-300).is_ok());
        assert!(divide(1.0, f64::MIN_POSITIVE).is_ok());
        assert!(divide(1.0, -1e-300).is_ok());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(9.0, 0.5), 3.0);
        assert_eq!(power(5.0, 0.0), 1.0);
        assert_eq!(power(2.0, -1.0), 0.5);
    }

    #[test]
    fn test_power_ieee_edges() {
        // Undefined real results follow IEEE rather than erroring
        assert_eq!(power(0.0, -1.0), f64::INFINITY);
        assert!(power(-1.0, 0.5).is_nan());
    }
}
