/*!
 * Error types for the srt2ass application.
 *
 * `ConversionError` covers the failures of converting one subtitle file,
 * `AppError` covers everything the batch controller can run into before or
 * around those conversions. Both use the thiserror crate.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the conversion of a single SRT file
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The source file is missing or unreadable
    #[error("Failed to read subtitle file {path:?}: {source}")]
    FileRead {
        /// Path of the source file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A timing line or timestamp could not be parsed
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// The output file could not be written
    #[error("Failed to write ASS file {path:?}: {source}")]
    FileWrite {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a single-file conversion
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
