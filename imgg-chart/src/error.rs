//! Error types for imgg-chart.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while reading chart inputs.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A color string could not be parsed.
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    /// A scene document could not be parsed.
    #[error("Invalid scene: {0}")]
    Scene(#[from] serde_json::Error),
}
