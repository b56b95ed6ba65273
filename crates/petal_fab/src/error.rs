//! Error types for petal_fab

use thiserror::Error;

/// Programmer-misuse errors raised by FAB components
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FabError {
    /// Action index outside the group's action list
    #[error("action index {index} out of range for {len} actions")]
    ActionOutOfRange { index: usize, len: usize },

    /// Custom FAB size must be finite and positive
    #[error("invalid FAB size {0}: must be finite and > 0")]
    InvalidSize(f32),

    /// Text layout reported a negative or non-finite label size
    #[error("invalid label measurement {width}x{height}")]
    InvalidMeasurement { width: f32, height: f32 },
}

/// Result type for petal_fab operations
pub type Result<T> = std::result::Result<T, FabError>;
