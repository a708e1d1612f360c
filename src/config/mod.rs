//! Solver parameters, product geometry and the JSON run configuration.
//!
//! Everything is validated up front: [`RuntimeConfig::validate`] and
//! [`SolverParams::validate`] reject unusable settings before any target is
//! filtered or any shadow map is built.

pub mod error;
pub mod runtime;
pub mod solver;

pub use error::ConfigError;
pub use runtime::{load_config, ProductGeometry, RuntimeConfig};
pub use solver::SolverParams;
