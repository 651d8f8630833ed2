// src/config.rs

use serde::Serialize;
use serde_json;
use std::fs::File;
use std::path::Path;

use crate::params::PlateParams;

#[derive(Serialize)]
pub struct RunConfig {
    pub geometry: GeometryConfig,
    pub potential: PotentialConfig,
    pub numerics: NumericsConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct GeometryConfig {
    pub size: usize,
    pub thickness: usize,
    pub width: usize,
    pub gap: usize,
}

#[derive(Serialize)]
pub struct PotentialConfig {
    /// Plates sit at +pot and -pot Volts; perimeter grounded at 0 V.
    pub pot: f64,
}

#[derive(Serialize)]
pub struct NumericsConfig {
    pub scheme: String,
    pub iters: usize,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_id: String,

    // Optional provenance (can be filled later)
    pub timestamp_utc: Option<String>,
}

impl RunConfig {
    pub fn from_params(params: &PlateParams, binary: &str, run_id: &str) -> Self {
        Self {
            geometry: GeometryConfig {
                size: params.size,
                thickness: params.thickness,
                width: params.width,
                gap: params.gap,
            },
            potential: PotentialConfig { pot: params.pot },
            numerics: NumericsConfig {
                scheme: "jacobi".to_string(),
                iters: params.iters,
            },
            run: RunInfo {
                binary: binary.to_string(),
                run_id: run_id.to_string(),
                timestamp_utc: None,
            },
        }
    }

    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
