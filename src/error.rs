// src/error.rs

use thiserror::Error;

/// Validation failures for a run configuration. All of these are detected
/// before the first relaxation step; the run either starts with a valid
/// geometry or not at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter `{0}` must be positive")]
    NonPositive(&'static str),

    #[error("plate potential must be finite and positive, got {0}")]
    BadPotential(f64),

    #[error("plate geometry leaves the grid interior: {0}")]
    PlateOutsideGrid(String),

    #[error("plates touch or overlap: {0}")]
    PlateOverlap(String),
}
