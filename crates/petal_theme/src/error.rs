//! Error types for petal_theme

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading a theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Failed to read a theme file
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid TOML for a theme config
    #[error("invalid theme config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Animation scale must be finite and non-negative
    #[error("invalid animation scale {0}: must be finite and >= 0")]
    InvalidScale(f32),

    /// Color override names no known token
    #[error("unknown color token {0:?}")]
    UnknownToken(String),

    /// Color override is not a `#RRGGBB` / `#RRGGBBAA` value
    #[error("invalid color for {token}: {value:?}")]
    InvalidColor { token: String, value: String },
}

/// Result type for petal_theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
