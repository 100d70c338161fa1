//! Error types for the markdeck library.

use std::io;
use thiserror::Error;

/// Result type alias for markdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during deck conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input document contains no blocks.
    #[error("Document is empty: nothing to convert")]
    EmptyDocument,

    /// An image could not be fetched or resolved.
    ///
    /// The renderer recovers from this locally (alt-text fallback); it only
    /// surfaces from the image source itself.
    #[error("Image fetch error: {0}")]
    ImageFetch(String),

    /// Error reported by a presentation sink.
    #[error("Sink error: {0}")]
    Sink(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
