//! Input/output helpers.
//!
//! - result exports to CSV (`export`)
//! - law JSON read/write (`law_file`)

pub mod export;
pub mod law_file;

pub use export::*;
pub use law_file::*;
