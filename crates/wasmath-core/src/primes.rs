//! Primality testing by 6k±1 trial division.

use crate::core::types::{to_flag, Int};

/// Returns `true` when `n` is prime.
///
/// Every prime above 3 has the form `6k - 1` or `6k + 1`, so after ruling
/// out multiples of 2 and 3 only those candidates up to `√n` are tried.
pub fn is_prime(n: Int) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `i <= n / i` rather than `i * i <= n`: the square overflows for
    // candidates just above √Int::MAX.
    let mut i: Int = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// [`is_prime`] as the host's integer boolean: `1` for prime, `0` otherwise.
#[inline]
pub fn is_prime_flag(n: Int) -> Int {
    to_flag(is_prime(n))
}

/// Number of primes in `2..=max`, or `0` when `max < 2`.
pub fn count_primes(max: Int) -> Int {
    if max < 2 {
        return 0;
    }
    let count = (2..=max).filter(|&n| is_prime(n)).count();
    log::debug!("{} primes up to {}", count, max);
    // The count never exceeds `max`, so it fits in an `Int`.
    count as Int
}
