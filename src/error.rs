//! Unified error type for checkergen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating fixture images.
#[derive(Debug, Error)]
pub enum GenError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The output directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or flushed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An image could not be encoded.
    #[error("Failed to write image {}: {source}", path.display())]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Underlying encoder failure.
        #[source]
        source: image::ImageError,
    },
}
