use thiserror::Error;

/// Top-level error type used across the entire overlay engine.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid color '{value}' for '{key}'")]
    ColorParse { key: String, value: String },

    #[error("surface error: {0}")]
    Surface(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = OverlayError> = std::result::Result<T, E>;
