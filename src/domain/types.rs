//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - returned from the law evaluator
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Wavelength query, in microns.
///
/// A `Scalar` query yields `Evaluation::Scalar`, a `Many` query yields
/// `Evaluation::Series` of the same length.
#[derive(Debug, Clone, PartialEq)]
pub enum Wavelengths {
    Scalar(f64),
    Many(Vec<f64>),
}

impl Wavelengths {
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Wavelengths::Scalar(w) => std::slice::from_ref(w),
            Wavelengths::Many(ws) => ws,
        }
    }
}

impl From<f64> for Wavelengths {
    fn from(w: f64) -> Self {
        Wavelengths::Scalar(w)
    }
}

impl From<Vec<f64>> for Wavelengths {
    fn from(ws: Vec<f64>) -> Self {
        Wavelengths::Many(ws)
    }
}

impl From<&[f64]> for Wavelengths {
    fn from(ws: &[f64]) -> Self {
        Wavelengths::Many(ws.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Wavelengths {
    fn from(ws: [f64; N]) -> Self {
        Wavelengths::Many(ws.to_vec())
    }
}

/// Law evaluated at a sequence of wavelengths.
///
/// All three vectors are parallel: index `i` of `values` and `errors`
/// belongs to `wavelengths[i]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LawSeries {
    pub wavelengths: Vec<f64>,
    /// Total extinction `A_lambda` (magnitudes).
    pub values: Vec<f64>,
    /// Symmetric 1-sigma error (magnitudes).
    pub errors: Vec<f64>,
}

impl LawSeries {
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    pub fn samples(&self) -> Vec<LawSample> {
        self.wavelengths
            .iter()
            .zip(self.values.iter())
            .zip(self.errors.iter())
            .map(|((&wavelength_um, &a_lambda), &error)| LawSample {
                wavelength_um,
                a_lambda,
                error,
            })
            .collect()
    }

    /// Split into `(values, errors)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.values, self.errors)
    }
}

/// Shape-preserving result of `ExtinctionLaw::evaluate`.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Scalar {
        wavelength: f64,
        value: f64,
        error: f64,
    },
    Series(LawSeries),
}

impl Evaluation {
    /// `(value, error)` for a scalar query, `None` for a sequence query.
    pub fn as_scalar(&self) -> Option<(f64, f64)> {
        match self {
            Evaluation::Scalar { value, error, .. } => Some((*value, *error)),
            Evaluation::Series(_) => None,
        }
    }

    /// Normalize to a series (a scalar becomes a one-element series).
    pub fn into_series(self) -> LawSeries {
        match self {
            Evaluation::Scalar {
                wavelength,
                value,
                error,
            } => LawSeries {
                wavelengths: vec![wavelength],
                values: vec![value],
                errors: vec![error],
            },
            Evaluation::Series(series) => series,
        }
    }
}

/// One row of an evaluated law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LawSample {
    pub wavelength_um: f64,
    pub a_lambda: f64,
    pub error: f64,
}

impl LawSample {
    pub fn inverse_wavelength(&self) -> f64 {
        1.0 / self.wavelength_um
    }

    pub fn upper(&self) -> f64 {
        self.a_lambda + self.error
    }

    pub fn lower(&self) -> f64 {
        self.a_lambda - self.error
    }
}

/// Portable JSON representation of an evaluated law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawFile {
    pub tool: String,
    pub law: String,
    /// Normalization the samples were computed with (A_Ks, magnitudes).
    pub a_ks: f64,
    pub samples: Vec<LawSample>,
}

/// Terminal output format for evaluated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Resolved configuration for `extlaw eval` / `extlaw table`.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub a_ks: f64,
    pub wavelengths: Vec<f64>,
    pub format: OutputFormat,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

/// Resolved configuration for `extlaw plot`.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub a_ks: f64,
    pub wavelengths: Vec<f64>,
    pub ascii: bool,
    pub output: PathBuf,
    pub from: Option<PathBuf>,
    pub width: usize,
    pub height: usize,
}
