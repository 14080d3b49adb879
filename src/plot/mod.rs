//! Rendering of the extinction law.
//!
//! - terminal ASCII plot (`ascii`)
//! - SVG chart file (`chart`)

pub mod ascii;
pub mod chart;

pub use ascii::*;
pub use chart::*;
