//! Footprint admin CLI library
//!
//! Terminal front-end for the Footprint admin controllers: configuration,
//! output formatting and one function per command.

pub mod commands;
pub mod config;
pub mod interactive;
pub mod output;

pub use commands::CommandContext;
pub use config::Config;
pub use output::OutputFormat;
