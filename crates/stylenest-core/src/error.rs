//! Error types for the style sheet model.

use std::path::PathBuf;

/// Result type alias for style sheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading style definitions.
///
/// Building a sheet never fails; these only come from turning external input
/// into a [`StyleDefinition`](crate::types::StyleDefinition).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The definition text is not valid JSON or has unsupported values.
    #[error("Failed to parse style definition: {0}")]
    Json(#[from] serde_json::Error),

    /// The definition is valid JSON but not a valid style definition.
    #[error("Invalid style definition at '{key}': {message}")]
    InvalidDefinition { key: String, message: String },

    /// File I/O error.
    #[error("Failed to read style definition '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a definition error.
    pub fn invalid_definition(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
