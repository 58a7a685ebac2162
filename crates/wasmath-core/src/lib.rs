//! Pure arithmetic and number-theory functions.
//!
//! This crate implements the numeric functions that `wasmath-wasm` exports
//! across a binary-module boundary. Every function is stateless and
//! deterministic.
//!
//! # Two surfaces
//!
//! - **Sentinel functions** (`divide`, `factorial`, `sqrt_approx`, ...) keep
//!   the exported-module contract: integer overflow wraps, a zero divisor
//!   yields `0`, and a negative square-root argument yields `-1.0`.
//! - **Checked functions** (`checked_divide`, `checked_factorial`,
//!   `try_sqrt_approx`, ...) return a `Result` and report the inputs the
//!   sentinel functions mask.
//!
//! # Modules
//!
//! - [`arithmetic`]: Integer add, subtract, multiply and truncating divide
//! - [`sequences`]: Factorial and Fibonacci numbers
//! - [`primes`]: 6k±1 primality test and prime counting
//! - [`approximation`]: Newton's-method square root
//! - [`arrays`]: Integer slice helpers
//! - [`config`]: Newton iteration settings
//! - [`error`]: Error types for the checked functions
//! - [`types`]: Scalar aliases and numerical constants

pub mod core;

pub mod approximation;
pub mod arithmetic;
pub mod arrays;
pub mod config;
pub mod primes;
pub mod sequences;

pub use crate::core::{error, types};

// Re-export commonly used items at the crate root
pub use error::{ApproximationError, ApproximationResult, ArithmeticError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use wasmath_core::prelude::*;
///
/// assert_eq!(divide(7, 0), 0);
/// assert!(checked_divide(7, 0).is_err());
/// assert_eq!(factorial(5), 120);
/// assert!(is_prime(13));
/// ```
pub mod prelude {
    pub use crate::approximation::{
        newton_sqrt, sqrt_approx, sqrt_approx_with, try_sqrt_approx, SqrtApproximation,
        Termination,
    };
    pub use crate::arithmetic::{
        add, checked_add, checked_divide, checked_multiply, checked_subtract, divide, multiply,
        subtract,
    };
    pub use crate::arrays::{allocate_and_fill, bubble_sort, checked_find_max, find_max, sum_array};
    pub use crate::config::{newton_config, NewtonConfig, NewtonConfigBuilder};
    pub use crate::error::{ApproximationError, ApproximationResult, ArithmeticError, Result};
    pub use crate::primes::{count_primes, is_prime, is_prime_flag};
    pub use crate::sequences::{checked_factorial, checked_fibonacci, factorial, fibonacci};
    pub use crate::types::{constants, Int, Real};
}
