//! Error types for the branch_forecast crate

use thiserror::Error;

/// Custom error types for the branch_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A region's history is shorter than the minimum forecasting window.
    /// Recoverable: callers skip or flag the region and continue.
    #[error("Insufficient history: {0}")]
    InsufficientHistory(String),

    /// An input collection was empty where at least one element is required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Error from parameter or policy validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the underlying numeric routines
    #[error("Math error: {0}")]
    Math(#[from] plan_math::MathError),

    /// Error serializing a report for the export boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
