//! C-ABI exports of wasmath.
//!
//! Built as a `cdylib`, this crate is the module a host environment loads
//! (for example a WebAssembly runtime driven from JavaScript). Every export
//! takes and returns plain scalars or raw pointers and forwards to
//! `wasmath-core`.
//!
//! Architecture:
//! - `scalar`: the sentinel functions (`add`, `divide`, `isPrime`, `sqrt_approx`, ...)
//! - `checked`: `try_*` variants reporting failures as status codes
//! - `arrays`: functions over host-provided integer buffers
//! - `error`: status codes for the checked variants

// Export names are fixed by the host interface.
#![allow(non_snake_case)]

mod arrays;
mod checked;
mod error;
mod scalar;

pub use arrays::{bubbleSort, findMax, sumArray};
pub use checked::{try_divide, try_factorial, try_fibonacci, try_sqrt_approx};
pub use error::ErrorCode;
pub use scalar::{
    add, countPrimes, divide, factorial, fibonacci, isPrime, multiply, sqrt_approx, subtract,
};
