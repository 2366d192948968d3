//! Error types for content loading, configuration and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for everything the site library can fail at.
///
/// The reveal core itself is infallible; errors only come from reading
/// files, validating static data and rendering templates.
#[derive(Error, Debug)]
pub enum SiteError {
    /// A content or config file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON did not match the expected shape.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content parsed but violates an invariant (duplicate keys, bad links).
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Motion or observer parameters out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Askama template failed to render.
    #[error("template error: {0}")]
    Render(#[from] askama::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
