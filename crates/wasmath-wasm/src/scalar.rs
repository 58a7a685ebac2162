//! Sentinel exports.

use wasmath_core::{approximation, arithmetic, primes, sequences};

/// `a + b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    arithmetic::add(a, b)
}

/// `a - b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn subtract(a: i32, b: i32) -> i32 {
    arithmetic::subtract(a, b)
}

/// `a * b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn multiply(a: i32, b: i32) -> i32 {
    arithmetic::multiply(a, b)
}

/// Truncating `a / b`; `0` when `b == 0`.
#[no_mangle]
pub extern "C" fn divide(a: i32, b: i32) -> i32 {
    arithmetic::divide(a, b)
}

/// `n!`; `1` for `n <= 1`.
#[no_mangle]
pub extern "C" fn factorial(n: i32) -> i32 {
    sequences::factorial(n)
}

/// `F(n)`; `n` for `n <= 1`.
#[no_mangle]
pub extern "C" fn fibonacci(n: i32) -> i32 {
    sequences::fibonacci(n)
}

/// `1` if `n` is prime, else `0`.
#[no_mangle]
pub extern "C" fn isPrime(n: i32) -> i32 {
    primes::is_prime_flag(n)
}

/// Number of primes in `2..=max`.
#[no_mangle]
pub extern "C" fn countPrimes(max: i32) -> i32 {
    primes::count_primes(max)
}

/// Newton square root; `-1.0` for negative input.
#[no_mangle]
pub extern "C" fn sqrt_approx(x: f64) -> f64 {
    approximation::sqrt_approx(x)
}
