//! Error types for the car search crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Search itself never fails; the only fallible surface is parsing the
//! categorical field values from text.

use thiserror::Error;

/// Errors that can occur when parsing categorical field values.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Unrecognized fuel type name
    #[error("Unknown fuel type: {0}")]
    UnknownFuel(String),

    /// Unrecognized transmission name
    #[error("Unknown transmission: {0}")]
    UnknownTransmission(String),
}

/// Convenience type alias for Results with ModelError
pub type ModelResult<T> = Result<T, ModelError>;
