//! CLI library components for the healthcare record cleaner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
