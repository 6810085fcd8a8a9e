//! Command-line surface, configuration, errors and image export

/// Command-line parsing and the patch runner
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of hats
pub mod image;
/// Generation progress display
pub mod progress;
