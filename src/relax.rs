// src/relax.rs
//
// Jacobi-style relaxation of the discrete Laplace equation. Each step
// replaces every cell with the mean of its four orthogonal neighbours from
// the previous grid, then reasserts the Dirichlet boundary conditions
// (plates at ±pot, grounded perimeter).
//
// Neighbour lookup quirk, kept on purpose:
//  - The shifts are *circular*: a cell on row 0 reads row size-1 and vice
//    versa (same for columns), exactly as a wrap-capable roll primitive
//    would. The perimeter is forced back to 0.0 immediately afterwards,
//    so the wrapped reads never survive into the output, but the averaging
//    pass itself does touch the opposite edge. Switching to zero padding
//    here would change intermediate values and is deliberately avoided.

use crate::boundary::{apply_boundary, PlateGeometry};
use crate::error::ConfigError;
use crate::params::PlateParams;
use crate::scalar_field::ScalarField2D;

/// Convergence diagnostic for one relaxation step.
#[derive(Debug, Clone, Copy)]
pub struct IterationStats {
    /// 1-based iteration index.
    pub iteration: usize,
    /// Mean absolute per-cell change across this step (diagnostic only,
    /// never used for control flow).
    pub mean_abs_diff: f64,
}

/// Per-iteration progress consumer. The solver itself has no console
/// dependency; the driver decides what to do with each sample.
pub trait ProgressSink {
    fn on_iteration(&mut self, stats: &IterationStats);
}

/// Sink that discards all samples.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_iteration(&mut self, _stats: &IterationStats) {}
}

/// Sink that records the diagnostic history (used for the convergence
/// plot and in tests).
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub history: Vec<f64>,
}

impl ProgressSink for RecordingSink {
    fn on_iteration(&mut self, stats: &IterationStats) {
        self.history.push(stats.mean_abs_diff);
    }
}

/// One averaging pass: every cell of `new` becomes the mean of the four
/// orthogonal neighbours of `old`, with circular (wrap-around) index
/// shifts at the grid edges (see the module header).
pub fn jacobi_average(old: &ScalarField2D, new: &mut ScalarField2D) {
    debug_assert_eq!(old.grid, new.grid);
    let n = old.grid.size;
    for row in 0..n {
        let up = if row == 0 { n - 1 } else { row - 1 };
        let down = if row + 1 == n { 0 } else { row + 1 };
        for col in 0..n {
            let left = if col == 0 { n - 1 } else { col - 1 };
            let right = if col + 1 == n { 0 } else { col + 1 };
            let avg = 0.25
                * (old.get(up, col)
                    + old.get(down, col)
                    + old.get(row, left)
                    + old.get(row, right));
            new.set(row, col, avg);
        }
    }
}

/// Owns the grid state and advances it toward the discrete Laplace
/// solution. Construction validates the geometry and imposes the initial
/// boundary conditions; afterwards `step()`/`run()` are infallible.
pub struct RelaxSolver {
    params: PlateParams,
    geometry: PlateGeometry,
    field: ScalarField2D,
    scratch: ScalarField2D,
    iteration: usize,
}

impl RelaxSolver {
    pub fn new(params: PlateParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let geometry = PlateGeometry::from_params(&params)?;
        let grid = crate::grid::Grid2D::new(params.size);
        let mut field = ScalarField2D::new(grid);
        apply_boundary(&mut field, &geometry, params.pot);
        let scratch = ScalarField2D::new(grid);
        Ok(Self {
            params,
            geometry,
            field,
            scratch,
            iteration: 0,
        })
    }

    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    pub fn geometry(&self) -> &PlateGeometry {
        &self.geometry
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current potential field (boundary conditions already applied).
    pub fn field(&self) -> &ScalarField2D {
        &self.field
    }

    /// Consume the solver and hand the final grid to the caller
    /// (e.g. the rendering stage).
    pub fn into_field(self) -> ScalarField2D {
        self.field
    }

    /// Advance one iteration: synchronous neighbour average, boundary
    /// re-application, then the mean absolute difference between the
    /// corrected new grid and the grid before the averaging pass.
    pub fn step(&mut self) -> IterationStats {
        jacobi_average(&self.field, &mut self.scratch);
        apply_boundary(&mut self.scratch, &self.geometry, self.params.pot);
        let mean_abs_diff = self.scratch.mean_abs_diff(&self.field);
        std::mem::swap(&mut self.field, &mut self.scratch);
        self.iteration += 1;
        IterationStats {
            iteration: self.iteration,
            mean_abs_diff,
        }
    }

    /// Run `n` iterations, reporting each step to `sink`. Fixed count,
    /// no convergence-based early exit.
    pub fn run(&mut self, n: usize, sink: &mut dyn ProgressSink) {
        for _ in 0..n {
            let stats = self.step();
            sink.on_iteration(&stats);
        }
    }
}
