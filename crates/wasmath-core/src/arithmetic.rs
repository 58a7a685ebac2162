//! Basic integer arithmetic.
//!
//! The plain functions follow the exported-module contract: overflow wraps
//! in two's complement and a zero divisor yields the sentinel `0`. The
//! `checked_*` functions report both conditions as [`ArithmeticError`].

use crate::core::error::{ArithmeticError, Result};
use crate::core::types::{constants, Int};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};
use std::fmt::Display;

/// Returns `a + b`, wrapping on overflow.
#[inline]
pub fn add(a: Int, b: Int) -> Int {
    a.wrapping_add(b)
}

/// Returns `a - b`, wrapping on overflow.
#[inline]
pub fn subtract(a: Int, b: Int) -> Int {
    a.wrapping_sub(b)
}

/// Returns `a * b`, wrapping on overflow.
#[inline]
pub fn multiply(a: Int, b: Int) -> Int {
    a.wrapping_mul(b)
}

/// Integer quotient of `a / b`, truncated toward zero.
///
/// A zero divisor returns `0`. This is indistinguishable from a genuine
/// zero quotient; use [`checked_divide`] when the difference matters.
/// `Int::MIN / -1` wraps to `Int::MIN`.
#[inline]
pub fn divide(a: Int, b: Int) -> Int {
    if b == 0 {
        return constants::DIVIDE_BY_ZERO_SENTINEL;
    }
    a.wrapping_div(b)
}

fn checked_binary<T, F>(operation: &str, a: T, b: T, op: F) -> Result<T>
where
    T: Copy + Display,
    F: FnOnce(&T, &T) -> Option<T>,
{
    op(&a, &b).ok_or_else(|| {
        log::warn!("{}({}, {}) overflows", operation, a, b);
        ArithmeticError::overflow(operation, format!("{}, {}", a, b))
    })
}

/// Returns `a + b`, or an overflow error.
pub fn checked_add(a: Int, b: Int) -> Result<Int> {
    checked_binary("add", a, b, CheckedAdd::checked_add)
}

/// Returns `a - b`, or an overflow error.
pub fn checked_subtract(a: Int, b: Int) -> Result<Int> {
    checked_binary("subtract", a, b, CheckedSub::checked_sub)
}

/// Returns `a * b`, or an overflow error.
pub fn checked_multiply(a: Int, b: Int) -> Result<Int> {
    checked_binary("multiply", a, b, CheckedMul::checked_mul)
}

/// Truncating quotient of `a / b`.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] when `b == 0` and
/// [`ArithmeticError::Overflow`] for `Int::MIN / -1`.
pub fn checked_divide(a: Int, b: Int) -> Result<Int> {
    if b == 0 {
        log::warn!("divide({}, 0) rejected", a);
        return Err(ArithmeticError::division_by_zero(a));
    }
    checked_binary("divide", a, b, CheckedDiv::checked_div)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(subtract(2, 3), -1);
        assert_eq!(multiply(-4, 6), -24);
        assert_eq!(divide(7, 2), 3);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(-7, 2), -3);
        assert_eq!(divide(7, -2), -3);
        assert_eq!(divide(-7, -2), 3);
    }

    #[test]
    fn test_divide_by_zero_sentinel() {
        assert_eq!(divide(0, 0), 0);
        assert_eq!(divide(42, 0), 0);
        assert_eq!(divide(Int::MIN, 0), 0);
    }

    #[test]
    fn test_wrapping_overflow() {
        assert_eq!(add(Int::MAX, 1), Int::MIN);
        assert_eq!(subtract(Int::MIN, 1), Int::MAX);
        assert_eq!(multiply(65_536, 65_536), 0);
        assert_eq!(divide(Int::MIN, -1), Int::MIN);
    }

    #[test]
    fn test_checked_operations() {
        assert_eq!(checked_add(2, 3), Ok(5));
        assert_eq!(checked_subtract(2, 3), Ok(-1));
        assert_eq!(checked_multiply(-4, 6), Ok(-24));
        assert_eq!(checked_divide(-7, 2), Ok(-3));
    }

    #[test]
    fn test_checked_overflow() {
        assert!(matches!(
            checked_add(Int::MAX, 1),
            Err(ArithmeticError::Overflow { .. })
        ));
        assert!(matches!(
            checked_subtract(Int::MIN, 1),
            Err(ArithmeticError::Overflow { .. })
        ));
        assert!(matches!(
            checked_multiply(65_536, 65_536),
            Err(ArithmeticError::Overflow { .. })
        ));
        assert!(matches!(
            checked_divide(Int::MIN, -1),
            Err(ArithmeticError::Overflow { .. })
        ));
    }

    #[test]
    fn test_checked_divide_by_zero() {
        assert_eq!(
            checked_divide(9, 0),
            Err(ArithmeticError::DivisionByZero { dividend: 9 })
        );
    }
}
