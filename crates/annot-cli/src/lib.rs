//! CLI library components for the column annotator.

pub mod assign;
pub mod logging;
pub mod summary;
