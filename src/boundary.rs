// src/boundary.rs
//
// Dirichlet boundary conditions for the parallel-plate setup: the two
// plate regions are pinned at ±pot and the outer perimeter of the grid is
// grounded at 0 V. These are fixed sources, reasserted after every
// averaging pass.

use std::ops::Range;

use crate::error::ConfigError;
use crate::params::PlateParams;
use crate::scalar_field::ScalarField2D;

/// Resolved plate placement: half-open row/column ranges, derived from the
/// grid centre with integer floor division.
///
/// The top plate spans `thickness` rows ending just above the gap offset
/// from the centre row (the centre row itself is never part of a plate);
/// the bottom plate starts at the gap offset below the centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateGeometry {
    pub top_rows: Range<usize>,
    pub bottom_rows: Range<usize>,
    pub cols: Range<usize>,
}

impl PlateGeometry {
    /// Derive the plate ranges from the run parameters, rejecting any
    /// placement that would reach the grounded perimeter or bring the
    /// plates into contact.
    pub fn from_params(p: &PlateParams) -> Result<Self, ConfigError> {
        // Signed arithmetic so an oversized plate underflows into a
        // detectable negative index instead of wrapping a usize.
        let size = p.size as i64;
        let center = size / 2;
        let half_width = p.width as i64 / 2;
        let half_gap = p.gap as i64 / 2;
        let thickness = p.thickness as i64;

        let col_start = center - half_width;
        let col_end = center + half_width;
        if col_start < 1 || col_end > size - 1 {
            return Err(ConfigError::PlateOutsideGrid(format!(
                "plate columns {col_start}..{col_end} must lie within 1..{}",
                size - 1
            )));
        }

        // Top plate: `thickness` rows ending just above the gap, exclusive.
        let top_end = center - half_gap - 1;
        let top_start = top_end - thickness;
        if top_start < 1 {
            return Err(ConfigError::PlateOutsideGrid(format!(
                "top plate rows {top_start}..{top_end} must start at row 1 or below"
            )));
        }

        // Bottom plate: `thickness` rows starting at the gap offset.
        let bottom_start = center + half_gap;
        let bottom_end = bottom_start + thickness;
        if bottom_end > size - 1 {
            return Err(ConfigError::PlateOutsideGrid(format!(
                "bottom plate rows {bottom_start}..{bottom_end} must end at row {} or above",
                size - 1
            )));
        }

        if top_end > bottom_start {
            return Err(ConfigError::PlateOverlap(format!(
                "top plate ends at row {top_end} but bottom plate starts at row {bottom_start}"
            )));
        }

        Ok(Self {
            top_rows: top_start as usize..top_end as usize,
            bottom_rows: bottom_start as usize..bottom_end as usize,
            cols: col_start as usize..col_end as usize,
        })
    }
}

/// Impose the boundary conditions on `field`: top plate cells to `+pot`,
/// bottom plate cells to `-pot`, and all four perimeter edges to 0.0.
///
/// Pure function of (field, geometry, pot) and idempotent: applying it
/// twice in succession leaves the field unchanged after the first call.
pub fn apply_boundary(field: &mut ScalarField2D, geom: &PlateGeometry, pot: f64) {
    for row in geom.top_rows.clone() {
        for col in geom.cols.clone() {
            field.set(row, col, pot);
        }
    }
    for row in geom.bottom_rows.clone() {
        for col in geom.cols.clone() {
            field.set(row, col, -pot);
        }
    }

    // Ground the outer perimeter.
    let n = field.grid.size;
    for col in 0..n {
        field.set(0, col, 0.0);
        field.set(n - 1, col, 0.0);
    }
    for row in 0..n {
        field.set(row, 0, 0.0);
        field.set(row, n - 1, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid2D;

    fn classic_params() -> PlateParams {
        PlateParams::default() // size=120, thickness=7, width=80, gap=10
    }

    #[test]
    fn classic_geometry_matches_hand_derivation() {
        // center=60, half_gap=5: top plate ends at row 54 and spans 7 rows;
        // bottom plate starts at row 65; columns span 20..100.
        let geom = PlateGeometry::from_params(&classic_params()).unwrap();
        assert_eq!(geom.top_rows, 47..54);
        assert_eq!(geom.bottom_rows, 65..72);
        assert_eq!(geom.cols, 20..100);
    }

    #[test]
    fn odd_width_truncates_symmetrically() {
        // width=9 behaves like width=8 (floor division of the half-width).
        let mut p = classic_params();
        p.width = 9;
        let geom = PlateGeometry::from_params(&p).unwrap();
        assert_eq!(geom.cols, 56..64);
        p.width = 8;
        assert_eq!(PlateGeometry::from_params(&p).unwrap().cols, 56..64);
    }

    #[test]
    fn apply_boundary_sets_plates_and_perimeter() {
        let p = PlateParams {
            size: 20,
            thickness: 2,
            width: 8,
            gap: 4,
            pot: 10.0,
            iters: 0,
        };
        let geom = PlateGeometry::from_params(&p).unwrap();
        assert_eq!(geom.top_rows, 5..7);
        assert_eq!(geom.bottom_rows, 12..14);
        assert_eq!(geom.cols, 6..14);

        let mut field = ScalarField2D::new(Grid2D::new(p.size));
        apply_boundary(&mut field, &geom, p.pot);

        for row in 0..p.size {
            for col in 0..p.size {
                let v = field.get(row, col);
                let on_perimeter =
                    row == 0 || row == p.size - 1 || col == 0 || col == p.size - 1;
                if on_perimeter {
                    assert_eq!(v, 0.0, "perimeter cell ({row},{col}) not grounded");
                } else if geom.top_rows.contains(&row) && geom.cols.contains(&col) {
                    assert_eq!(v, 10.0, "top plate cell ({row},{col})");
                } else if geom.bottom_rows.contains(&row) && geom.cols.contains(&col) {
                    assert_eq!(v, -10.0, "bottom plate cell ({row},{col})");
                } else {
                    assert_eq!(v, 0.0, "free cell ({row},{col}) should start at 0");
                }
            }
        }
    }

    #[test]
    fn apply_boundary_is_idempotent() {
        let p = classic_params();
        let geom = PlateGeometry::from_params(&p).unwrap();
        let mut field = ScalarField2D::new(Grid2D::new(p.size));

        // Non-trivial interior so idempotence is not vacuous.
        for row in 0..p.size {
            for col in 0..p.size {
                field.set(row, col, ((row * 31 + col * 7) % 13) as f64 - 6.0);
            }
        }

        apply_boundary(&mut field, &geom, p.pot);
        let once = field.clone();
        apply_boundary(&mut field, &geom, p.pot);
        assert_eq!(field, once);
    }
}
