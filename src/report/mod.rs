//! Reporting utilities: formatted terminal output for evaluated laws.

pub mod format;

pub use format::*;
