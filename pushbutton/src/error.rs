/// Errors surfaced by the widget and its backends.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ButtonError {
    /// No font is registered under this name.
    #[error("unknown font: {0}")]
    UnknownFont(String),

    /// Font bytes could not be parsed.
    #[error("invalid font {name}: {reason}")]
    InvalidFont { name: String, reason: String },

    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    /// The drawing surface could not be created or written.
    #[error("surface: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, ButtonError>;
