// src/visualisation.rs

use crate::scalar_field::ScalarField2D;
use plotters::prelude::*;

/// Map a potential to a blue–white–red diverging colour, symmetric about
/// 0 V so the two plates render with equal and opposite intensity.
///
/// -vmax maps to blue, 0 to white, +vmax to red.
fn potential_to_color(v: f64, vmax: f64) -> RGBColor {
    // Protect against a degenerate range (e.g. an all-zero field)
    let mut scale = vmax;
    if !scale.is_finite() || scale < 1e-12 {
        scale = 1.0;
    }

    let x = ((v + scale) / (2.0 * scale)).clamp(0.0, 1.0);

    // blue–white–red: x=0 -> blue, x=0.5 -> white, x=1 -> red
    let r = (255.0 * x) as u8;
    let b = (255.0 * (1.0 - x)) as u8;
    let g = (255.0 * (1.0 - (2.0 * (x - 0.5).abs()))).clamp(0.0, 255.0) as u8;

    RGBColor(r, g, b)
}

/// Save the potential field as a PNG heat map with a colour bar.
/// - x/y axes are cell indices (row 0 of the grid renders at the top)
/// - colour encodes the potential (blue ≈ -max, white ≈ 0, red ≈ +max)
pub fn save_potential_plot(
    field: &ScalarField2D,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let n = field.grid.size as i32;
    let vmax = field.max_abs().max(1e-12);

    // Size of the output image in pixels; the right strip holds the bar.
    let root = BitMapBackend::new(filename, (980, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let (main, bar) = root.split_horizontally(800);

    let mut chart = ChartBuilder::on(&main)
        .margin(40)
        .caption(
            "Capacitor Potential via Relaxation Method",
            ("sans-serif", 24),
        )
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..n, 0..n)?;

    chart
        .configure_mesh()
        .x_desc("x (cell index)")
        .y_desc("y (cell index)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    // Draw one coloured rectangle per cell. Grid row 0 is the top of the
    // domain, while chart y grows upward, so rows are flipped here.
    chart.draw_series((0..n).flat_map(|row| {
        (0..n).map(move |col| {
            let v = field.get(row as usize, col as usize);
            let color = potential_to_color(v, vmax);
            let y = n - 1 - row;
            Rectangle::new([(col, y), (col + 1, y + 1)], color.filled())
        })
    }))?;

    // Colour bar: a vertical gradient with its own labelled axis.
    let mut bar_chart = ChartBuilder::on(&bar)
        .margin(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, -vmax..vmax)?;

    bar_chart
        .configure_mesh()
        .disable_x_axis()
        .disable_mesh()
        .y_desc("Electric Potential (Volts)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    let bands = 256;
    bar_chart.draw_series((0..bands).map(|k| {
        let lo = -vmax + 2.0 * vmax * k as f64 / bands as f64;
        let hi = -vmax + 2.0 * vmax * (k + 1) as f64 / bands as f64;
        let color = potential_to_color(0.5 * (lo + hi), vmax);
        Rectangle::new([(0.0, lo), (1.0, hi)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Plot the per-iteration mean absolute difference on a log y-axis.
pub fn save_convergence_plot(
    history: &[f64],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if history.is_empty() {
        return Ok(()); // nothing to plot
    }

    // Log axis: ignore non-positive samples (a fully converged step can
    // report exactly 0.0).
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &d in history {
        if d.is_finite() && d > 0.0 {
            if d < y_min {
                y_min = d;
            }
            if d > y_max {
                y_max = d;
            }
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return Ok(());
    }
    // A little margin so the curve does not touch the frame.
    y_min *= 0.5;
    y_max *= 2.0;

    let n = history.len() as f64;

    let root = BitMapBackend::new(filename, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Convergence of the relaxation method", ("sans-serif", 30))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(1.0..n.max(2.0), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("iteration")
        .y_desc("mean |Δpotential| per cell (Volts)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()?;

    chart.draw_series(LineSeries::new(
        history
            .iter()
            .enumerate()
            .filter(|(_, &d)| d > 0.0)
            .map(|(i, &d)| ((i + 1) as f64, d)),
        &BLACK,
    ))?;

    root.present()?;
    Ok(())
}
