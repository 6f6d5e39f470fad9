//! Input/output: errors, configuration, logging, persistence and the command line

/// Command-line interface
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Terminal logger setup
pub mod logging;
/// JSON save files
pub mod persistence;
/// Batch progress display
pub mod progress;
