//! Factorial and Fibonacci numbers.
//!
//! Both are computed iteratively. For every input the results match the
//! textbook recursive definitions kept in [`naive`], including their base
//! cases for negative arguments (`factorial(n) = 1` and `fibonacci(n) = n`
//! for `n <= 1`) and two's-complement wrapping once the result no longer
//! fits in an [`Int`].

use crate::core::error::{ArithmeticError, Result};
use crate::core::types::{constants, Int};

/// `n!`, with `factorial(n) = 1` for every `n <= 1`.
///
/// Overflows wrap for `n > 12`.
pub fn factorial(n: Int) -> Int {
    if n <= 1 {
        return 1;
    }
    // 34! carries 2^32 as a factor, so every larger product wraps to 0.
    if n >= 34 {
        return 0;
    }
    (2..=n).fold(1, |acc: Int, i| acc.wrapping_mul(i))
}

/// The `n`-th Fibonacci number, with `fibonacci(n) = n` for every `n <= 1`.
///
/// Overflows wrap for `n > 46`.
pub fn fibonacci(n: Int) -> Int {
    if n <= 1 {
        return n;
    }
    let (mut prev, mut curr): (Int, Int) = (0, 1);
    for _ in 2..=n {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    curr
}

/// `n!` for `0 <= n <= 12`.
///
/// # Errors
///
/// [`ArithmeticError::NegativeInput`] for `n < 0` and
/// [`ArithmeticError::Overflow`] when `n!` exceeds `Int::MAX`.
pub fn checked_factorial(n: Int) -> Result<Int> {
    if n < 0 {
        log::warn!("factorial({}) rejected: negative input", n);
        return Err(ArithmeticError::negative_input("factorial", n));
    }
    (2..=n)
        .try_fold(1, |acc: Int, i| acc.checked_mul(i))
        .ok_or_else(|| {
            log::warn!(
                "factorial({}) overflows; largest supported input is {}",
                n,
                constants::FACTORIAL_MAX_INPUT
            );
            ArithmeticError::overflow("factorial", n)
        })
}

/// The `n`-th Fibonacci number for `0 <= n <= 46`.
///
/// # Errors
///
/// [`ArithmeticError::NegativeInput`] for `n < 0` and
/// [`ArithmeticError::Overflow`] when `F(n)` exceeds `Int::MAX`.
pub fn checked_fibonacci(n: Int) -> Result<Int> {
    if n < 0 {
        log::warn!("fibonacci({}) rejected: negative input", n);
        return Err(ArithmeticError::negative_input("fibonacci", n));
    }
    if n <= 1 {
        return Ok(n);
    }
    let (mut prev, mut curr): (Int, Int) = (0, 1);
    for _ in 2..=n {
        let next = prev.checked_add(curr).ok_or_else(|| {
            log::warn!(
                "fibonacci({}) overflows; largest supported input is {}",
                n,
                constants::FIBONACCI_MAX_INPUT
            );
            ArithmeticError::overflow("fibonacci", n)
        })?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Direct recursive definitions.
///
/// `fibonacci` here takes exponential time. It is the reference the
/// iterative versions are tested and benchmarked against.
pub mod naive {
    use crate::core::types::Int;

    /// Recursive `n!`, wrapping on overflow.
    pub fn factorial(n: Int) -> Int {
        if n <= 1 {
            return 1;
        }
        n.wrapping_mul(factorial(n - 1))
    }

    /// Doubly recursive Fibonacci, wrapping on overflow.
    pub fn fibonacci(n: Int) -> Int {
        if n <= 1 {
            return n;
        }
        fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
    }
}
