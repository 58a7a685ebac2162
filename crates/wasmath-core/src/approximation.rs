//! Square roots by Newton's method.
//!
//! Starting from `x / 2`, each step replaces the guess `g` with
//! `(g + x / g) / 2`. Iteration stops when two successive guesses differ by
//! less than the configured tolerance, or when the iteration cap is hit.
//! The tolerance is absolute, so results for inputs far below 1 are only
//! accurate to about the tolerance itself.

use crate::config::{newton_config, NewtonConfig};
use crate::core::error::{ApproximationError, ApproximationResult};
use crate::core::types::{constants, Real};
use num_traits::Float;
use std::fmt::LowerExp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an approximation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// The answer was known without iterating (`x == 0`).
    Exact,
    /// Two successive guesses came within tolerance.
    Converged,
    /// The iteration cap was reached first.
    MaxIterations,
}

/// Outcome of one square-root approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SqrtApproximation<T = Real> {
    /// The approximate square root.
    pub value: T,
    /// Number of Newton steps taken.
    pub iterations: usize,
    /// Why iteration stopped.
    pub termination: Termination,
}

impl<T> SqrtApproximation<T> {
    /// Returns `true` unless the iteration cap cut the run short.
    pub fn converged(&self) -> bool {
        self.termination != Termination::MaxIterations
    }
}

/// Runs Newton's method on a finite, non-negative `x`.
///
/// Other inputs are a caller bug and trip a debug assertion.
///
/// The returned value is the guess preceding the one that satisfied the
/// tolerance, or the latest guess when the cap is reached.
pub fn newton_sqrt<T>(x: T, tolerance: T, max_iterations: usize) -> SqrtApproximation<T>
where
    T: Float + LowerExp,
{
    debug_assert!(x.is_finite() && x >= T::zero());

    if x == T::zero() {
        return SqrtApproximation {
            value: T::zero(),
            iterations: 0,
            termination: Termination::Exact,
        };
    }

    let two = T::one() + T::one();
    let mut guess = x / two;
    // Only the smallest subnormal halves to zero; start from x instead of
    // dividing by zero on the first step.
    if guess == T::zero() {
        guess = x;
    }

    for iteration in 1..=max_iterations {
        let next = (guess + x / guess) / two;
        log::trace!("newton step {}: {:e} -> {:e}", iteration, guess, next);
        if (next - guess).abs() < tolerance {
            log::debug!(
                "sqrt({:e}) converged to {:e} after {} iterations",
                x,
                guess,
                iteration
            );
            return SqrtApproximation {
                value: guess,
                iterations: iteration,
                termination: Termination::Converged,
            };
        }
        guess = next;
    }

    log::warn!(
        "sqrt({:e}) did not converge within {} iterations; last guess {:e}",
        x,
        max_iterations,
        guess
    );
    SqrtApproximation {
        value: guess,
        iterations: max_iterations,
        termination: Termination::MaxIterations,
    }
}

/// Approximate square root with the sentinel contract of the exported
/// module.
///
/// - `x < 0` (including `-inf`) returns `-1.0`.
/// - `x == 0` returns `0.0`.
/// - NaN and `+inf` are returned unchanged.
/// - Otherwise the default [`NewtonConfig`] is used. When the cap is hit,
///   the last guess is returned.
pub fn sqrt_approx(x: Real) -> Real {
    if x < 0.0 {
        return constants::SQRT_NEGATIVE_SENTINEL;
    }
    if !x.is_finite() {
        return x;
    }
    let config = newton_config();
    newton_sqrt(x, config.tolerance, config.max_iterations).value
}

/// Approximate square root under an explicit configuration.
///
/// Hitting the iteration cap is not an error here; it is reported through
/// [`SqrtApproximation::termination`].
///
/// # Errors
///
/// - [`ApproximationError::InvalidConfiguration`] if `config` is invalid.
/// - [`ApproximationError::NonFiniteInput`] for NaN and `+inf`.
/// - [`ApproximationError::NegativeInput`] for `x < 0`.
pub fn sqrt_approx_with(
    x: Real,
    config: &NewtonConfig,
) -> ApproximationResult<SqrtApproximation> {
    config.validate()?;
    if x.is_nan() {
        return Err(ApproximationError::NonFiniteInput { value: x });
    }
    if x < 0.0 {
        log::warn!("sqrt({}) rejected: negative input", x);
        return Err(ApproximationError::NegativeInput { value: x });
    }
    if x.is_infinite() {
        return Err(ApproximationError::NonFiniteInput { value: x });
    }
    Ok(newton_sqrt(x, config.tolerance, config.max_iterations))
}

/// Approximate square root with the default configuration, treating a run
/// that hits the iteration cap as a failure.
///
/// # Errors
///
/// Everything [`sqrt_approx_with`] rejects, plus
/// [`ApproximationError::MaxIterationsReached`].
pub fn try_sqrt_approx(x: Real) -> ApproximationResult<Real> {
    let config = newton_config();
    let outcome = sqrt_approx_with(x, config)?;
    if !outcome.converged() {
        return Err(ApproximationError::max_iterations_reached(
            config.max_iterations,
            outcome.value,
            config.tolerance,
        ));
    }
    Ok(outcome.value)
}
