use super::{ConfigError, SolverParams};
use crate::direction::DIRECTION_COUNT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Physical dimensions of the printed relief.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductGeometry {
    /// Side length of the square product.
    pub product_size: f64,
    /// Side length of one grid cell; also the vertical size of one height unit.
    pub heightfield: f64,
    /// Light elevation in degrees. Only scales heights at export.
    pub light_angle_deg: f64,
}

impl Default for ProductGeometry {
    fn default() -> Self {
        Self {
            product_size: 200.0,
            heightfield: 0.5,
            light_angle_deg: 45.0,
        }
    }
}

impl ProductGeometry {
    /// `floor(product_size / heightfield)`, or 0 for unusable inputs.
    pub fn grid_size(&self) -> usize {
        let cells = (self.product_size / self.heightfield).floor();
        if cells.is_finite() && cells >= 1.0 {
            cells as usize
        } else {
            0
        }
    }

    /// Vertical scale `S = 1 / tan(light angle)` applied at export.
    pub fn vertical_scale(&self) -> f64 {
        1.0 / self.light_angle_deg.to_radians().tan()
    }

    /// Validate and return the grid size.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        if !self.heightfield.is_finite() || self.heightfield <= 0.0 {
            return Err(ConfigError::InvalidStep {
                step: self.heightfield,
            });
        }
        if !(self.light_angle_deg > 0.0 && self.light_angle_deg < 90.0) {
            return Err(ConfigError::InvalidLightAngle {
                degrees: self.light_angle_deg,
            });
        }
        match self.grid_size() {
            0 => Err(ConfigError::EmptyGrid {
                product_size: self.product_size,
                step: self.heightfield,
            }),
            n => Ok(n),
        }
    }
}

/// JSON configuration consumed by the `shadow_relief` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// One photo per direction, in East, West, South, North order.
    pub photos: Vec<PathBuf>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub geometry: ProductGeometry,
    #[serde(default)]
    pub solver: SolverParams,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Directory for per-direction PNGs of the final shadow map.
    #[serde(default)]
    pub shadow_preview_dir: Option<PathBuf>,
}

fn default_output() -> PathBuf {
    PathBuf::from("mesh_global.obj")
}

impl RuntimeConfig {
    /// Validate the whole configuration and return the grid size.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let grid_size = self.geometry.validate()?;
        if self.photos.len() != DIRECTION_COUNT {
            return Err(ConfigError::WrongTargetCount {
                found: self.photos.len(),
            });
        }
        self.solver.validate(grid_size)?;
        Ok(grid_size)
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
