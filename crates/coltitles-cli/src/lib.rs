//! CLI library components for the column title generator.

pub mod cli;
pub mod commands;
pub mod logging;
