/*!
 * Error types for the srtshift application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when parsing a single timestamp string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The string does not have the `HH:MM:SS,mmm` shape
    #[error("Malformed timestamp '{0}': expected HH:MM:SS,mmm")]
    Malformed(String),

    /// A component parsed but is outside its valid range
    #[error("Timestamp '{timestamp}' has {component} out of range: {value}")]
    ComponentOutOfRange {
        /// The full timestamp string being parsed
        timestamp: String,
        /// Which field was out of range
        component: &'static str,
        /// The offending value
        value: u32,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from timestamp parsing
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),

    /// The input document contains no timestamp ranges at all
    #[error("No timestamp ranges found in the input file")]
    NoTimestampsFound,

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
