// src/params.rs

use crate::boundary::PlateGeometry;
use crate::error::ConfigError;

/// Parameters for one capacitor relaxation run.
///
/// All lengths are in grid cells. The plates hold `+pot` and `-pot` Volts
/// and the outer perimeter of the grid is grounded at 0 V.
#[derive(Debug, Clone)]
pub struct PlateParams {
    /// Length of one side of the square grid.
    pub size: usize,
    /// Vertical thickness of each capacitor plate.
    pub thickness: usize,
    /// Horizontal width of each capacitor plate.
    pub width: usize,
    /// Gap between the inner plate faces.
    pub gap: usize,
    /// Potential magnitude; the plates sit at +pot and -pot Volts.
    pub pot: f64,
    /// Number of relaxation iterations (fixed count, no early exit).
    pub iters: usize,
}

impl Default for PlateParams {
    /// Defaults match the classic demonstration setup.
    fn default() -> Self {
        Self {
            size: 120,
            thickness: 7,
            width: 80,
            gap: 10,
            pot: 20.0,
            iters: 1000,
        }
    }
}

impl PlateParams {
    /// Check that the parameters describe a realisable geometry: both
    /// plates strictly inside the grounded perimeter, not touching each
    /// other, with a sane potential.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::NonPositive("size"));
        }
        if self.thickness == 0 {
            return Err(ConfigError::NonPositive("thickness"));
        }
        if self.width == 0 {
            return Err(ConfigError::NonPositive("width"));
        }
        if self.gap == 0 {
            return Err(ConfigError::NonPositive("gap"));
        }
        if !self.pot.is_finite() || self.pot <= 0.0 {
            return Err(ConfigError::BadPotential(self.pot));
        }
        PlateGeometry::from_params(self).map(|_| ())
    }
}
