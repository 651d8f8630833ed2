// src/grid.rs

/// Simple square 2D finite-difference grid.
///
/// Indices are `(row, col)` with row 0 at the top and row `size - 1`
/// at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid2D {
    pub size: usize,
}

impl Grid2D {
    /// Create a new square grid with `size × size` cells.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Total number of cells.
    pub fn n_cells(&self) -> usize {
        self.size * self.size
    }

    /// Centre index (integer floor division, as the plate placement requires).
    pub fn center(&self) -> usize {
        self.size / 2
    }

    /// Convert (row, col) indices to a flat index into a 1D array.
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }
}
