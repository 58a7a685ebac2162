//! Scalar types and numerical constants shared by every operation.

/// Integer operand and result type (the host's 32-bit word).
pub type Int = i32;

/// Floating-point operand and result type.
pub type Real = f64;

/// Numerical constants.
pub mod constants {
    use super::{Int, Real};

    /// Largest `n` whose factorial fits in an [`Int`] (12! = 479001600).
    pub const FACTORIAL_MAX_INPUT: Int = 12;

    /// Largest `n` whose Fibonacci number fits in an [`Int`]
    /// (F(46) = 1836311903).
    pub const FIBONACCI_MAX_INPUT: Int = 46;

    /// Default absolute tolerance between successive Newton guesses.
    pub const DEFAULT_TOLERANCE: Real = 1e-6;

    /// Default cap on Newton iterations.
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    /// Sentinel returned by `sqrt_approx` for negative input.
    pub const SQRT_NEGATIVE_SENTINEL: Real = -1.0;

    /// Sentinel returned by `divide` for a zero divisor.
    pub const DIVIDE_BY_ZERO_SENTINEL: Int = 0;
}

/// Converts a predicate result to the host's integer boolean (0 or 1).
#[inline]
pub fn to_flag(value: bool) -> Int {
    Int::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_fit_in_int() {
        let mut fact: Int = 1;
        for i in 2..=constants::FACTORIAL_MAX_INPUT {
            fact = fact.checked_mul(i).expect("12! fits in i32");
        }
        assert_eq!(fact, 479_001_600);
        assert!(fact.checked_mul(constants::FACTORIAL_MAX_INPUT + 1).is_none());
    }

    #[test]
    fn test_to_flag() {
        assert_eq!(to_flag(true), 1);
        assert_eq!(to_flag(false), 0);
    }
}
