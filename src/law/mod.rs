//! Extinction law evaluation.
//!
//! - the Hosek+17 law and its 1-sigma envelope (`hosek17`)
//! - evenly spaced wavelength grids for tabulation and plotting (`grid`)

pub mod grid;
pub mod hosek17;

pub use grid::*;
pub use hosek17::*;
