use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Knobs for the annealing search.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverParams {
    /// Shadow reach in cells; also sizes the legality windows.
    pub radius: usize,
    /// Weight of the edge-gradient term.
    pub w_gradient: f32,
    /// Weight of the height-field smoothness term.
    pub w_smooth: f32,
    /// Iteration budget. The run always performs exactly this many proposals.
    pub iterations: usize,
    /// Starting temperature; each accepted move lowers it by
    /// `initial_temperature / iterations`.
    pub initial_temperature: f64,
    /// Proposed deltas are drawn from `-delta_limit..=delta_limit`, never 0.
    pub delta_limit: i32,
    /// Seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Emit a progress line every this many iterations (0 disables).
    pub log_interval: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            radius: 10,
            w_gradient: 1.5,
            w_smooth: 0.001,
            iterations: 1_000_000,
            initial_temperature: 1.0,
            delta_limit: 5,
            seed: None,
            log_interval: 10_000,
        }
    }
}

impl SolverParams {
    /// Check the parameters against a `grid_size × grid_size` field.
    pub fn validate(&self, grid_size: usize) -> Result<(), ConfigError> {
        if grid_size == 0 {
            return Err(ConfigError::RadiusOutOfRange {
                radius: self.radius,
                grid_size,
            });
        }
        if self.radius == 0 || self.radius >= grid_size {
            return Err(ConfigError::RadiusOutOfRange {
                radius: self.radius,
                grid_size,
            });
        }
        for (name, value) in [("w_gradient", self.w_gradient), ("w_smooth", self.w_smooth)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        if self.delta_limit < 1 {
            return Err(ConfigError::InvalidDeltaLimit {
                limit: self.delta_limit,
            });
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::InvalidTemperature {
                value: self.initial_temperature,
            });
        }
        Ok(())
    }
}
