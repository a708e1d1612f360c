#![doc = include_str!("../README.md")]

// Core solver
pub mod anneal;
pub mod direction;
pub mod heightfield;
pub mod legality;
pub mod objective;
pub mod shadow;

// Inputs, outputs and configuration
pub mod config;
pub mod filters;
pub mod image;
pub mod mesh;
pub mod report;

// --- High-level re-exports -------------------------------------------------

pub use crate::anneal::{Acceptance, AnnealStats, Annealer, Proposal, StepOutcome};
pub use crate::config::{ConfigError, ProductGeometry, RuntimeConfig, SolverParams};
pub use crate::direction::Direction;
pub use crate::heightfield::HeightField;
pub use crate::legality::LegalityChecker;
pub use crate::mesh::{ExportOptions, Mesh};
pub use crate::objective::{ObjectiveFunction, SamplingDistribution, TargetSet};
pub use crate::shadow::{ShadowEngine, ShadowMap};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use shadow_relief::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let target = ImageF32::filled(32, 32, 0.5);
/// let targets = TargetSet::uniform(target)?;
/// let mut annealer = Annealer::new(
///     targets,
///     SolverParams {
///         radius: 4,
///         iterations: 1_000,
///         seed: Some(7),
///         ..Default::default()
///     },
/// )?;
/// let stats = annealer.run();
/// println!("objective {:.4} -> {:.4}", stats.initial_objective, stats.final_objective);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::{Annealer, Direction, HeightField, Mesh, SolverParams, TargetSet};
}
