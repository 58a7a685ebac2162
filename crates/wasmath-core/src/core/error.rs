//! Error types for the checked numeric operations.
//!
//! The sentinel functions never fail; their checked counterparts report
//! the inputs the sentinel functions silently mask through these types.

use thiserror::Error;

/// Errors raised by the checked integer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Integer division with a zero divisor.
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The dividend of the rejected division
        dividend: i32,
    },

    /// The exact result does not fit in an `i32`.
    ///
    /// This error is raised where the sentinel functions wrap around.
    #[error("Integer overflow in {operation}({operands})")]
    Overflow {
        /// Name of the operation that overflowed
        operation: String,
        /// The operands, formatted for display
        operands: String,
    },

    /// The operation is undefined for negative arguments.
    #[error("{operation} is undefined for negative input {value}")]
    NegativeInput {
        /// Name of the operation
        operation: String,
        /// The rejected argument
        value: i32,
    },
}

impl ArithmeticError {
    /// Create a DivisionByZero error for the given dividend.
    pub fn division_by_zero(dividend: i32) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// Create an Overflow error.
    pub fn overflow<S1, S2>(operation: S1, operands: S2) -> Self
    where
        S1: Into<String>,
        S2: std::fmt::Display,
    {
        Self::Overflow {
            operation: operation.into(),
            operands: operands.to_string(),
        }
    }

    /// Create a NegativeInput error.
    pub fn negative_input<S: Into<String>>(operation: S, value: i32) -> Self {
        Self::NegativeInput {
            operation: operation.into(),
            value,
        }
    }
}

/// Errors raised by the square-root approximation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApproximationError {
    /// The square root of a negative number was requested.
    ///
    /// The sentinel surface answers this with `-1.0`.
    #[error("Cannot take the square root of negative input {value}")]
    NegativeInput {
        /// The rejected input
        value: f64,
    },

    /// The input is NaN or infinite.
    #[error("Input is not a finite number: {value}")]
    NonFiniteInput {
        /// The rejected input
        value: f64,
    },

    /// The iteration cap was reached before two successive guesses
    /// came within tolerance of each other.
    #[error("Maximum iterations ({max_iterations}) reached without convergence")]
    MaxIterationsReached {
        /// The iteration cap that was hit
        max_iterations: usize,
        /// The last guess produced
        last_guess: f64,
        /// Tolerance that was not met
        tolerance: f64,
    },

    /// Invalid Newton configuration.
    #[error("Invalid configuration for {parameter} = {value}: {reason}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
        /// Description of the configuration error
        reason: String,
    },
}

impl ApproximationError {
    /// Create a MaxIterationsReached error with the state at the cap.
    pub fn max_iterations_reached(max_iterations: usize, last_guess: f64, tolerance: f64) -> Self {
        Self::MaxIterationsReached {
            max_iterations,
            last_guess,
            tolerance,
        }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(parameter: S1, value: S2, reason: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for the checked integer operations.
pub type Result<T> = std::result::Result<T, ArithmeticError>;

/// Result type alias for the square-root approximation.
pub type ApproximationResult<T> = std::result::Result<T, ApproximationError>;
