//! Configuration for the iterative approximations.

pub mod newton;

pub use newton::{newton_config, NewtonConfig, NewtonConfigBuilder};
