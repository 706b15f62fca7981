//! Error types for configuration access.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for opening a configuration source.
///
/// Extraction operations themselves never fail; only construction does.
/// A scan that hits an I/O error mid-file terminates early and returns the
/// partial result instead of surfacing an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file '{}' does not exist", path.display())]
    NotFound {
        /// Path that was checked.
        path: PathBuf,
    },
}
