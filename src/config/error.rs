use crate::direction::DIRECTION_COUNT;

/// Reasons a configuration is rejected before optimization starts.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidStep {
        step: f64,
    },
    EmptyGrid {
        product_size: f64,
        step: f64,
    },
    RadiusOutOfRange {
        radius: usize,
        grid_size: usize,
    },
    WrongTargetCount {
        found: usize,
    },
    TargetSizeMismatch {
        index: usize,
        width: usize,
        height: usize,
        grid_size: usize,
    },
    InvalidWeight {
        name: &'static str,
        value: f32,
    },
    InvalidLightAngle {
        degrees: f64,
    },
    InvalidDeltaLimit {
        limit: i32,
    },
    InvalidTemperature {
        value: f64,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidStep { step } => {
                write!(f, "heightfield step must be finite and positive (got {step})")
            }
            ConfigError::EmptyGrid { product_size, step } => write!(
                f,
                "product size {product_size} with step {step} yields an empty grid"
            ),
            ConfigError::RadiusOutOfRange { radius, grid_size } => write!(
                f,
                "shadow radius {radius} must be at least 1 and below the grid size {grid_size}"
            ),
            ConfigError::WrongTargetCount { found } => write!(
                f,
                "expected exactly {DIRECTION_COUNT} target images (one per direction), got {found}"
            ),
            ConfigError::TargetSizeMismatch {
                index,
                width,
                height,
                grid_size,
            } => write!(
                f,
                "target {index} is {width}x{height}, expected {grid_size}x{grid_size}"
            ),
            ConfigError::InvalidWeight { name, value } => {
                write!(f, "weight {name} must be finite and non-negative (got {value})")
            }
            ConfigError::InvalidLightAngle { degrees } => write!(
                f,
                "light angle must lie strictly between 0 and 90 degrees (got {degrees})"
            ),
            ConfigError::InvalidDeltaLimit { limit } => {
                write!(f, "delta limit must be at least 1 (got {limit})")
            }
            ConfigError::InvalidTemperature { value } => write!(
                f,
                "initial temperature must be finite and positive (got {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
