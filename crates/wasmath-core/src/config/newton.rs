//! Newton iteration settings.
//!
//! The exported `sqrt_approx` always runs with the process-wide default
//! returned by [`newton_config`]. Callers of the core crate can build their
//! own [`NewtonConfig`] and pass it to
//! [`sqrt_approx_with`](crate::approximation::sqrt_approx_with).

use crate::core::error::{ApproximationError, ApproximationResult};
use crate::core::types::{constants, Real};
use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stopping rule for Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewtonConfig {
    /// Iteration stops once two successive guesses differ by less than this.
    pub tolerance: Real,
    /// Upper bound on the number of refinement steps.
    pub max_iterations: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            tolerance: constants::DEFAULT_TOLERANCE,
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl NewtonConfig {
    /// Creates a configuration with the default tolerance and cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is a positive finite number and the cap is
    /// non-zero.
    pub fn validate(&self) -> ApproximationResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ApproximationError::invalid_configuration(
                "tolerance",
                self.tolerance.to_string(),
                "must be a positive finite number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(ApproximationError::invalid_configuration(
                "max_iterations",
                "0",
                "must allow at least one iteration",
            ));
        }
        Ok(())
    }
}

/// Builder for a validated [`NewtonConfig`].
#[derive(Debug, Clone, Default)]
pub struct NewtonConfigBuilder {
    config: NewtonConfig,
}

impl NewtonConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: Real) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Build the configuration, rejecting invalid settings.
    pub fn build(self) -> ApproximationResult<NewtonConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Global Newton configuration used by the sentinel functions.
pub static NEWTON_CONFIG: Lazy<NewtonConfig> = Lazy::new(NewtonConfig::default);

/// Get the default Newton configuration.
pub fn newton_config() -> &'static NewtonConfig {
    &NEWTON_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = NewtonConfig::default();
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = NewtonConfigBuilder::new()
            .tolerance(1e-12)
            .max_iterations(64)
            .build()
            .unwrap();

        assert_eq!(config.tolerance, 1e-12);
        assert_eq!(config.max_iterations, 64);
    }

    #[test]
    fn test_builder_rejects_invalid_settings() {
        for tolerance in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let err = NewtonConfigBuilder::new().tolerance(tolerance).build();
            assert!(
                matches!(err, Err(ApproximationError::InvalidConfiguration { ref parameter, .. }) if parameter == "tolerance"),
                "tolerance {} should be rejected",
                tolerance
            );
        }

        let err = NewtonConfigBuilder::new().max_iterations(0).build();
        assert!(matches!(
            err,
            Err(ApproximationError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_global_config() {
        let config1 = newton_config();
        let config2 = newton_config();

        assert!(std::ptr::eq(config1, config2));
        assert_eq!(*config1, NewtonConfig::default());
    }
}
