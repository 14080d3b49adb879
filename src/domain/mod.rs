//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the wavelength query and its shape-preserving result (`Wavelengths`, `Evaluation`)
//! - evaluated law rows and their portable file form (`LawSample`, `LawFile`)
//! - resolved CLI configuration (`EvalConfig`, `PlotConfig`)

pub mod types;

pub use types::*;
