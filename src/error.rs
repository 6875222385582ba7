//! Error types for the Compensation and Progressive Taxation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! validating inputs. Calculation functions themselves are total and never
//! return errors: malformed or missing configuration is rejected at load
//! time, and out-of-range inputs are rejected at the API boundary.

use thiserror::Error;

/// The main error type for the Compensation and Progressive Taxation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A bracket in a bracket table violated its invariants.
    #[error("Invalid bracket at index {index}: {message}")]
    InvalidBracket {
        /// Zero-based position of the offending bracket after sorting.
        index: usize,
        /// A description of the violated invariant.
        message: String,
    },

    /// A rate-bracket table is not contiguous and cannot be used for
    /// progressive accumulation.
    #[error("Rate table is not contiguous at bracket {index}: {message}")]
    NonContiguousBrackets {
        /// Zero-based position of the bracket that breaks contiguity.
        index: usize,
        /// A description of the gap or overlap.
        message: String,
    },

    /// A revenue entry was invalid or contained inconsistent data.
    #[error("Invalid entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the invalid entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
