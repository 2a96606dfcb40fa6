//! CLI library components for Docxi.

pub mod logging;
pub mod shell;
