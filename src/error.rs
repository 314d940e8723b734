//! Error types for the Talent Assessment Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the assessment core itself never errors: missing or
//! unrecognized review data degrades to documented defaults. Errors occur
//! only at the boundaries (config loading, roster ingestion, API lookups).

use thiserror::Error;

/// The main error type for the Talent Assessment Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use talent_engine::error::EngineError;
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

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be read or parsed as delimited records.
    #[error("Failed to read roster file '{path}': {message}")]
    RosterReadError {
        /// The path to the file that failed to read.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// No employee record exists for the requested personnel ID.
    #[error("Employee record not found: {id}")]
    RecordNotFound {
        /// The personnel ID that was not found.
        id: String,
    },

    /// A supplied record was structurally invalid (not a field mapping).
    #[error("Invalid employee record: {message}")]
    InvalidRecord {
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
