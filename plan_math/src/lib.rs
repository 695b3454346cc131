//! # Plan Math
//!
//! Numeric routines shared by the branch coverage and forecasting engine:
//! least-squares trend fitting, monthly seasonal profiles, growth rates,
//! and the division-guard policies used throughout capacity calculations.

use thiserror::Error;

pub mod growth;
pub mod ratio;
pub mod regression;
pub mod seasonal;

/// Errors that can occur in planning-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for planning math operations
pub type Result<T> = std::result::Result<T, MathError>;
