//! `extlaw` library crate.
//!
//! Evaluates the Hosek+17 near-infrared extinction law: total extinction
//! `A_lambda` and its 1-sigma error at wavelengths in `[0.8, 2.2]` microns,
//! given the overall extinction `A_Ks` at 2.14 microns.
//!
//! The binary (`extlaw`) is a thin wrapper around this library so that:
//!
//! - the law is usable from other crates without spawning processes
//! - core logic is testable in isolation from the CLI

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod law;
pub mod math;
pub mod plot;
pub mod report;

pub use domain::{Evaluation, LawSeries, Wavelengths};
pub use error::ExtinctionError;
pub use law::{ExtinctionLaw, extinction};
