//! Error types for the CSV to INI conversion.
//!
//! - [`CsvError`] - CSV reading errors
//! - [`SchemaError`] - Required columns missing from the header
//! - [`ConfigError`] - Invalid environment configuration
//! - [`ConvertError`] - Top-level errors, mapped to process exit codes
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading the CSV input.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the underlying source.
    #[error("Failed to read CSV: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure.
    #[error("Invalid CSV format at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Input is not valid UTF-8.
    #[error("Invalid UTF-8 in CSV at line {line}")]
    Encoding { line: u64 },
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvError::Io(e),
            csv::ErrorKind::Utf8 { pos, .. } => CsvError::Encoding {
                line: pos.map(|p| p.line()).unwrap_or(line),
            },
            _ => CsvError::Parse { line, message },
        }
    }
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Required columns absent from the CSV header.
///
/// `missing` is kept sorted so the message is stable.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Missing required CSV columns: {}", .missing.join(", "))]
pub struct SchemaError {
    pub missing: Vec<String>,
}

impl SchemaError {
    pub fn new(mut missing: Vec<String>) -> Self {
        missing.sort();
        Self { missing }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}' (expected {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path is not an existing regular file.
    #[error("file not found - {}", .0.display())]
    Path(PathBuf),

    /// Header lacks required columns.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// CSV could not be decoded.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing the inventory failed.
    #[error("Failed to write inventory: {0}")]
    Write(std::io::Error),
}

impl ConvertError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Path(_) => 1,
            _ => 2,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
