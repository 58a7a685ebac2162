//! Checked exports.
//!
//! Each function returns an [`ErrorCode`](crate::ErrorCode) as `i32` and, on success only,
//! writes its result through the `out` pointer.

use crate::error::write_result;
use wasmath_core::{approximation, arithmetic, sequences};

/// Truncating `a / b` into `*out`.
///
/// Fails with `DivisionByZero` or `Overflow`.
///
/// # Safety
///
/// `out` must be null or valid for writing an `i32`.
#[no_mangle]
pub unsafe extern "C" fn try_divide(a: i32, b: i32, out: *mut i32) -> i32 {
    unsafe { write_result(arithmetic::checked_divide(a, b), out) }
}

/// `n!` into `*out` for `0 <= n <= 12`.
///
/// # Safety
///
/// `out` must be null or valid for writing an `i32`.
#[no_mangle]
pub unsafe extern "C" fn try_factorial(n: i32, out: *mut i32) -> i32 {
    unsafe { write_result(sequences::checked_factorial(n), out) }
}

/// `F(n)` into `*out` for `0 <= n <= 46`.
///
/// # Safety
///
/// `out` must be null or valid for writing an `i32`.
#[no_mangle]
pub unsafe extern "C" fn try_fibonacci(n: i32, out: *mut i32) -> i32 {
    unsafe { write_result(sequences::checked_fibonacci(n), out) }
}

/// Newton square root into `*out`.
///
/// Fails with `NegativeInput` or `NonFiniteInput`, and with
/// `DidNotConverge` when the iteration cap is hit.
///
/// # Safety
///
/// `out` must be null or valid for writing an `f64`.
#[no_mangle]
pub unsafe extern "C" fn try_sqrt_approx(x: f64, out: *mut f64) -> i32 {
    unsafe { write_result(approximation::try_sqrt_approx(x), out) }
}
