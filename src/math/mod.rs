//! Numerical utilities: interpolating cubic splines.

pub mod spline;

pub use spline::*;
