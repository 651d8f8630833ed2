// src/lib.rs

pub mod boundary;
pub mod config;
pub mod error;
pub mod grid;
pub mod params;
pub mod relax;
pub mod scalar_field;
pub mod visualisation;
