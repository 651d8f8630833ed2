// src/scalar_field.rs

use crate::grid::Grid2D;

/// Electric potential field defined on a square 2D grid.
/// Each cell stores one `f64` potential value (Volts).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField2D {
    pub grid: Grid2D,
    pub data: Vec<f64>,
}

impl ScalarField2D {
    /// Create a new field on the given grid, initialised to zero everywhere.
    pub fn new(grid: Grid2D) -> Self {
        let n = grid.n_cells();
        Self {
            grid,
            data: vec![0.0; n],
        }
    }

    /// Get the flat index in `data` for grid indices (row, col).
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        self.grid.idx(row, col)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let i = self.idx(row, col);
        self.data[i] = value;
    }

    /// Largest absolute value in the field (0.0 for an all-zero field).
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Mean absolute per-cell difference against another field on the
    /// same grid, `sum(|self - other|) / n_cells`.
    pub fn mean_abs_diff(&self, other: &ScalarField2D) -> f64 {
        debug_assert_eq!(self.grid, other.grid);
        let sum: f64 = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        sum / self.grid.n_cells() as f64
    }
}
