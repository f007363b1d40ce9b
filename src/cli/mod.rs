//! CLI command handlers and console reporting

pub mod commands;
pub mod output;

pub use output::Output;
