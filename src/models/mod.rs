//! Data models

pub mod analysis;
pub mod scan;

pub use analysis::*;
pub use scan::*;
