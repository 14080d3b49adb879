//! Read/write law JSON files.
//!
//! A law JSON file is the portable representation of an evaluated law:
//! - law name and the `A_Ks` it was scaled by
//! - the evaluated grid (wavelength, `A_lambda`, 1-sigma error)
//!
//! The schema is defined by `domain::LawFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{LawFile, LawSeries};
use crate::error::{AppError, EXIT_INPUT};
use crate::law::LAW_NAME;

pub const TOOL_NAME: &str = "extlaw";

/// Wrap an evaluated series in the portable file form.
pub fn law_file(a_ks: f64, series: &LawSeries) -> LawFile {
    LawFile {
        tool: TOOL_NAME.to_string(),
        law: LAW_NAME.to_string(),
        a_ks,
        samples: series.samples(),
    }
}

/// Write a law JSON file.
pub fn write_law_json(path: &Path, law: &LawFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to create law JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, law)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write law JSON: {e}")))?;

    Ok(())
}

/// Read a law JSON file.
pub fn read_law_json(path: &Path) -> Result<LawFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to open law JSON '{}': {e}", path.display()))
    })?;
    let law: LawFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Invalid law JSON: {e}")))?;
    Ok(law)
}
