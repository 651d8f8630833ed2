// src/main.rs
//
// CLI driver for the capacitor relaxation solver.
//
// Outputs are written to `runs/` (or the directory specified via `out=`)
// and are not committed to version control.
//
// Example:
//
//   cargo run --release -- size=120 gap=10 width=80 thickness=7 pot=20 iter=1000
//       -> classic parallel-plate setup, printing one convergence line
//          per iteration and saving the final potential heat map.
//
// Typical outputs (per run directory):
//   runs/<run_id>/
//     ├── config.json
//     ├── convergence.csv
//     ├── convergence.png
//     └── potential.png

use std::env;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use capacitor_relax::config::RunConfig;
use capacitor_relax::params::PlateParams;
use capacitor_relax::relax::{IterationStats, ProgressSink, RelaxSolver};
use capacitor_relax::visualisation::{save_convergence_plot, save_potential_plot};

fn print_usage() {
    eprintln!(
        r#"Usage:
  cargo run -- [size=N] [thickness=N] [width=N] [gap=N] [pot=VAL] [iter=N]
             [out=DIR] [run=RUN_ID]

Notes:
  - All lengths are in grid cells; pot is the plate potential in Volts
    (plates sit at +pot and -pot, the grid perimeter is grounded).
  - Defaults: size=120 thickness=7 width=80 gap=10 pot=20 iter=1000.
  - One convergence line is printed per iteration; the same values are
    logged to convergence.csv in the run directory.
"#
    );
}

fn default_run_id(params: &PlateParams) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    let ts = format!("{}{:03}", now.as_secs(), now.subsec_millis());
    format!("{}_relax_s{}_i{}", ts, params.size, params.iters)
}

fn unique_run_dir(out_root: &str, run_id: &str) -> PathBuf {
    let base = PathBuf::from(out_root);
    let mut dir = base.join(run_id);
    if !dir.exists() {
        return dir;
    }
    for k in 1..1000 {
        let cand = base.join(format!("{}_{}", run_id, k));
        if !cand.exists() {
            dir = cand;
            break;
        }
    }
    dir
}

/// Prints each convergence sample, appends it to the CSV log and keeps
/// the history for the convergence plot.
struct DriverSink<W: Write> {
    writer: W,
    history: Vec<f64>,
}

impl<W: Write> ProgressSink for DriverSink<W> {
    fn on_iteration(&mut self, stats: &IterationStats) {
        println!(
            "Iteration {}: {:.6} average difference per element",
            stats.iteration, stats.mean_abs_diff
        );
        let _ = writeln!(
            self.writer,
            "{},{:.16e}",
            stats.iteration, stats.mean_abs_diff
        );
        self.history.push(stats.mean_abs_diff);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = env::args().collect();

    let mut params = PlateParams::default();
    let mut out_root = "runs".to_string();
    let mut run_id_override: Option<String> = None;

    for arg in argv.iter().skip(1) {
        if arg == "-h" || arg == "--help" || arg == "help" {
            print_usage();
            return Ok(());
        }

        if let Some(v) = arg.strip_prefix("size=") {
            match v.parse::<usize>() {
                Ok(n) => params.size = n,
                Err(_) => eprintln!("Warning: could not parse size value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("thickness=") {
            match v.parse::<usize>() {
                Ok(n) => params.thickness = n,
                Err(_) => eprintln!("Warning: could not parse thickness value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("width=") {
            match v.parse::<usize>() {
                Ok(n) => params.width = n,
                Err(_) => eprintln!("Warning: could not parse width value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("gap=") {
            match v.parse::<usize>() {
                Ok(n) => params.gap = n,
                Err(_) => eprintln!("Warning: could not parse gap value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("pot=") {
            match v.parse::<f64>() {
                Ok(p) => params.pot = p,
                Err(_) => eprintln!("Warning: could not parse pot value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("iter=") {
            match v.parse::<usize>() {
                Ok(n) => params.iters = n,
                Err(_) => eprintln!("Warning: could not parse iter value '{v}', ignoring"),
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("out=") {
            out_root = v.to_string();
            continue;
        }
        if let Some(v) = arg.strip_prefix("run=") {
            run_id_override = Some(v.to_string());
            continue;
        }

        eprintln!("Warning: ignoring unknown argument '{arg}'");
    }

    // Geometry is validated before anything is written or iterated.
    let mut solver = match RelaxSolver::new(params.clone()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    let run_id = run_id_override.unwrap_or_else(|| default_run_id(&params));
    let run_dir = unique_run_dir(&out_root, &run_id);
    create_dir_all(&run_dir)?;

    let config = RunConfig::from_params(&params, "capacitor-relax", &run_id);
    config.write_to_dir(&run_dir)?;

    println!(
        "Relaxing a {}x{} grid for {} iterations (plates at ±{} V)",
        params.size, params.size, params.iters, params.pot
    );

    let csv = File::create(run_dir.join("convergence.csv"))?;
    let mut writer = BufWriter::new(csv);
    writeln!(writer, "iteration,mean_abs_diff")?;

    let mut sink = DriverSink {
        writer,
        history: Vec::with_capacity(params.iters),
    };
    solver.run(params.iters, &mut sink);
    sink.writer.flush()?;

    let field = solver.into_field();
    save_potential_plot(&field, run_dir.join("potential.png").to_str().unwrap())?;
    save_convergence_plot(
        &sink.history,
        run_dir.join("convergence.png").to_str().unwrap(),
    )?;

    println!("Done. Outputs in {}", run_dir.to_string_lossy());
    Ok(())
}
