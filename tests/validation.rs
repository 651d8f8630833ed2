// tests/validation.rs
//
// Integration-style validation tests (physics sanity checks).
// Run with: cargo test
// Or only these tests: cargo test --test validation

use capacitor_relax::boundary::{apply_boundary, PlateGeometry};
use capacitor_relax::error::ConfigError;
use capacitor_relax::grid::Grid2D;
use capacitor_relax::params::PlateParams;
use capacitor_relax::relax::{RecordingSink, RelaxSolver};
use capacitor_relax::scalar_field::ScalarField2D;

fn small_params() -> PlateParams {
    PlateParams {
        size: 20,
        thickness: 2,
        width: 8,
        gap: 4,
        pot: 10.0,
        iters: 0,
    }
}

#[test]
fn zero_iterations_returns_the_boundary_initialised_grid() {
    // SIZE=20, GAP=4, WIDTH=8, THICKNESS=2, POT=10, ITER=0: the output
    // must equal the boundary-initialised grid exactly.
    let params = small_params();
    let solver = RelaxSolver::new(params.clone()).unwrap();

    let geom = PlateGeometry::from_params(&params).unwrap();
    let mut expected = ScalarField2D::new(Grid2D::new(params.size));
    apply_boundary(&mut expected, &geom, params.pot);

    assert_eq!(solver.field(), &expected);

    // And cell by cell: plates at ±10 V, everything else (including the
    // whole perimeter) at exactly 0.
    let field = solver.into_field();
    for row in 0..params.size {
        for col in 0..params.size {
            let v = field.get(row, col);
            let in_cols = (6..14).contains(&col);
            if (5..7).contains(&row) && in_cols {
                assert_eq!(v, 10.0);
            } else if (12..14).contains(&row) && in_cols {
                assert_eq!(v, -10.0);
            } else {
                assert_eq!(v, 0.0);
            }
        }
    }
}

#[test]
fn boundary_values_are_pinned_at_every_iteration() {
    let params = small_params();
    let geom = PlateGeometry::from_params(&params).unwrap();
    let mut solver = RelaxSolver::new(params.clone()).unwrap();

    for _ in 0..50 {
        solver.step();
        let field = solver.field();
        let n = params.size;

        for col in 0..n {
            assert_eq!(field.get(0, col), 0.0);
            assert_eq!(field.get(n - 1, col), 0.0);
        }
        for row in 0..n {
            assert_eq!(field.get(row, 0), 0.0);
            assert_eq!(field.get(row, n - 1), 0.0);
        }
        for row in geom.top_rows.clone() {
            for col in geom.cols.clone() {
                assert_eq!(field.get(row, col), params.pot);
            }
        }
        for row in geom.bottom_rows.clone() {
            for col in geom.cols.clone() {
                assert_eq!(field.get(row, col), -params.pot);
            }
        }
    }
}

#[test]
fn convergence_diagnostic_trends_downward_in_block_averages() {
    // Per-step monotonicity is not guaranteed; averages over blocks of
    // 50 iterations must not increase.
    let params = PlateParams {
        size: 40,
        thickness: 3,
        width: 16,
        gap: 6,
        pot: 10.0,
        iters: 0,
    };
    let mut solver = RelaxSolver::new(params).unwrap();
    let mut sink = RecordingSink::default();
    solver.run(300, &mut sink);

    let blocks: Vec<f64> = sink
        .history
        .chunks(50)
        .map(|b| b.iter().sum::<f64>() / b.len() as f64)
        .collect();
    assert_eq!(blocks.len(), 6);
    for pair in blocks.windows(2) {
        assert!(
            pair[1] <= pair[0] * (1.0 + 1e-12),
            "block average increased: {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn identical_parameters_give_bit_identical_grids() {
    let params = PlateParams {
        size: 32,
        thickness: 2,
        width: 12,
        gap: 4,
        pot: 20.0,
        iters: 0,
    };
    let mut a = RelaxSolver::new(params.clone()).unwrap();
    let mut b = RelaxSolver::new(params).unwrap();

    let mut sink_a = RecordingSink::default();
    let mut sink_b = RecordingSink::default();
    a.run(200, &mut sink_a);
    b.run(200, &mut sink_b);

    assert_eq!(sink_a.history, sink_b.history);
    assert_eq!(a.into_field(), b.into_field());
}

#[test]
fn interior_relaxes_toward_the_plate_potentials() {
    // After plenty of iterations the cell midway between the plates picks
    // up an intermediate potential and the field is antisymmetric between
    // the plate sides.
    let params = small_params();
    let mut solver = RelaxSolver::new(params.clone()).unwrap();
    solver.run(500, &mut RecordingSink::default());
    let field = solver.into_field();

    let c = params.size / 2;
    // Just inside the top plate's lower face the potential is positive.
    assert!(field.get(7, c) > 1.0);
    // Mirror cell just above the bottom plate is negative.
    assert!(field.get(11, c) < -1.0);
    // The row midway between the plates sits near 0 V.
    assert!(field.get(9, c).abs() < 1.0);
}

#[test]
fn oversized_geometry_is_rejected_before_iterating() {
    let mut params = small_params();
    params.thickness = 100;
    match RelaxSolver::new(params).err() {
        Some(ConfigError::PlateOutsideGrid(_)) => {}
        other => panic!("expected PlateOutsideGrid, got {other:?}"),
    }
}
