//! Export evaluated law rows to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::LawSample;
use crate::error::{AppError, EXIT_INPUT};

pub const CSV_HEADER: &str = "wavelength_um,inverse_wavelength,a_lambda,error,upper,lower";

/// Write evaluated rows to a CSV file.
pub fn write_results_csv(path: &Path, samples: &[LawSample]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(EXIT_INPUT, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    file.write_all(format_csv(samples).as_bytes())
        .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to write export CSV: {e}")))?;

    Ok(())
}

/// Render rows as CSV text (header included).
pub fn format_csv(samples: &[LawSample]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for s in samples {
        out.push_str(&format!(
            "{:.4},{:.6},{:.6},{:.6},{:.6},{:.6}\n",
            s.wavelength_um,
            s.inverse_wavelength(),
            s.a_lambda,
            s.error,
            s.upper(),
            s.lower(),
        ));
    }
    out
}
