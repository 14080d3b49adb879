//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the law evaluation code stays clean and testable
//! - output changes are localized (snapshot tests below)

use crate::domain::{LawFile, LawSample, OutputFormat};
use crate::error::{AppError, EXIT_INPUT};
use crate::io::format_csv;
use crate::law::{LAW_NAME, REFERENCE_WAVELENGTH_UM};

/// Render evaluated rows in the requested format.
pub fn format_output(law: &LawFile, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", format_summary(law), format_table(&law.samples))),
        OutputFormat::Csv => Ok(format_csv(&law.samples)),
        OutputFormat::Json => serde_json::to_string_pretty(law)
            .map_err(|e| AppError::new(EXIT_INPUT, format!("Failed to serialize results: {e}"))),
    }
}

/// Header with the law, normalization and the wavelength span.
pub fn format_summary(law: &LawFile) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== extlaw - {LAW_NAME} extinction law ===\n"));
    out.push_str(&format!(
        "A_Ks: {:.3} mag (at {REFERENCE_WAVELENGTH_UM} um)\n",
        law.a_ks
    ));

    let (w_min, w_max) = law
        .samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s.wavelength_um), hi.max(s.wavelength_um))
        });
    if law.samples.is_empty() {
        out.push_str("Points: n=0\n");
    } else {
        out.push_str(&format!(
            "Points: n={} | wavelength=[{w_min:.3}, {w_max:.3}] um\n",
            law.samples.len()
        ));
    }
    out
}

/// Fixed-width table: wavelength, A_lambda, 1-sigma error.
pub fn format_table(samples: &[LawSample]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10}  {:>10}  {:>10}\n",
        "lambda_um", "A_lambda", "err_1sig"
    ));
    for s in samples {
        out.push_str(&format!(
            "{:>10.4}  {:>10.4}  {:>10.4}\n",
            s.wavelength_um, s.a_lambda, s.error
        ));
    }
    out
}
