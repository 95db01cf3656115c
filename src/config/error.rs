//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A boolean environment variable held something other than true/false.
    #[error("invalid boolean for {name}: '{value}'")]
    InvalidBool { name: &'static str, value: String },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The scoring configuration file could not be read.
    #[error("failed to read scoring config {path}: {source}")]
    ScoringConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scoring configuration is not valid JSON for [`ScoringConfig`](super::ScoringConfig).
    #[error("failed to parse scoring config: {source}")]
    ScoringConfigParse {
        #[source]
        source: serde_json::Error,
    },

    /// The scoring configuration violates a startup invariant.
    #[error("invalid scoring config: {reason}")]
    InvalidScoring { reason: String },
}
