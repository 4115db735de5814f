//! Error types for the Loan Amortization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule simulation.

use thiserror::Error;

/// The main error type for the Loan Amortization Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every
/// validation failure is detected before the simulation loop starts; a
/// failed call never returns a partial schedule.
///
/// # Example
///
/// ```
/// use loan_engine::error::EngineError;
///
/// let error = EngineError::InvalidFrequency {
///     field: "frequency".to_string(),
///     value: "Daily".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid frequency for 'frequency': Daily (expected Weekly, Fortnightly or Monthly)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A frequency field is not one of the three recognized cadences.
    #[error("Invalid frequency for '{field}': {value} (expected Weekly, Fortnightly or Monthly)")]
    InvalidFrequency {
        /// The parameter field that carried the unrecognized value.
        field: String,
        /// The unrecognized frequency value.
        value: String,
    },

    /// The loan term is zero; a simulation needs at least one year.
    #[error("Loan term must be positive, got {term_years} years")]
    NonPositiveTerm {
        /// The rejected term in years.
        term_years: u32,
    },

    /// A monetary parameter is negative.
    #[error("Amount field '{field}' must be non-negative, got {value}")]
    NegativeAmount {
        /// The parameter field that was negative.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
