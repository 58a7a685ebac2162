//! Status codes returned by the checked exports.
//!
//! Hosts cannot receive a Rust `Result`, so each error variant of
//! `wasmath-core` is mapped to a stable integer code.

use wasmath_core::error::{ApproximationError, ArithmeticError};

/// Status code of a `try_*` export. `Ok` is the only success value.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The result was written to the output pointer.
    Ok = 0,
    /// Integer division with a zero divisor
    DivisionByZero = 1,
    /// The exact result does not fit in 32 bits
    Overflow = 2,
    /// The operation is undefined for negative input
    NegativeInput = 3,
    /// NaN or infinite input
    NonFiniteInput = 4,
    /// The approximation hit its iteration cap
    DidNotConverge = 5,
    /// Invalid approximation settings
    InvalidConfiguration = 6,
    /// A required pointer argument was null
    NullPointer = 7,
}

impl ErrorCode {
    /// The integer handed to the host.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&ArithmeticError> for ErrorCode {
    fn from(err: &ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            ArithmeticError::Overflow { .. } => ErrorCode::Overflow,
            ArithmeticError::NegativeInput { .. } => ErrorCode::NegativeInput,
        }
    }
}

impl From<&ApproximationError> for ErrorCode {
    fn from(err: &ApproximationError) -> Self {
        match err {
            ApproximationError::NegativeInput { .. } => ErrorCode::NegativeInput,
            ApproximationError::NonFiniteInput { .. } => ErrorCode::NonFiniteInput,
            ApproximationError::MaxIterationsReached { .. } => ErrorCode::DidNotConverge,
            ApproximationError::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
        }
    }
}

/// Writes a successful result through `out` and returns the status code.
///
/// # Safety
///
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_result<T, E>(result: Result<T, E>, out: *mut T) -> i32
where
    for<'a> ErrorCode: From<&'a E>,
    E: std::fmt::Display,
{
    if out.is_null() {
        log::warn!("null output pointer passed to a checked export");
        return ErrorCode::NullPointer.code();
    }
    match result {
        Ok(value) => {
            // SAFETY: `out` is non-null and the caller guarantees it is writable.
            unsafe { out.write(value) };
            ErrorCode::Ok.code()
        }
        Err(err) => {
            log::debug!("checked export failed: {}", err);
            ErrorCode::from(&err).code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        assert_eq!(
            ErrorCode::from(&ArithmeticError::division_by_zero(3)),
            ErrorCode::DivisionByZero
        );
        assert_eq!(
            ErrorCode::from(&ArithmeticError::overflow("add", "1, 2")),
            ErrorCode::Overflow
        );
        assert_eq!(
            ErrorCode::from(&ApproximationError::max_iterations_reached(10, 1.0, 1e-6)),
            ErrorCode::DidNotConverge
        );
        assert_eq!(
            ErrorCode::from(&ApproximationError::NonFiniteInput { value: f64::NAN }),
            ErrorCode::NonFiniteInput
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorCode::Ok.code(), 0);
        assert_eq!(ErrorCode::DivisionByZero.code(), 1);
        assert_eq!(ErrorCode::Overflow.code(), 2);
        assert_eq!(ErrorCode::NegativeInput.code(), 3);
        assert_eq!(ErrorCode::NonFiniteInput.code(), 4);
        assert_eq!(ErrorCode::DidNotConverge.code(), 5);
        assert_eq!(ErrorCode::InvalidConfiguration.code(), 6);
        assert_eq!(ErrorCode::NullPointer.code(), 7);
    }

    #[test]
    fn test_write_result_null_pointer() {
        let code = unsafe { write_result::<i32, ArithmeticError>(Ok(1), std::ptr::null_mut()) };
        assert_eq!(code, ErrorCode::NullPointer.code());
    }
}
