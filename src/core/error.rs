//! Typed error handling for the spendbook engine
//!
//! This module provides a typed error hierarchy so that embedding code can
//! handle failures specifically rather than dealing with generic
//! `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`PatternError`]: a user-supplied search pattern failed to compile
//! - [`ValidationReport`]: per-field validation failures, carried as data
//! - [`StoreError`]: record store failures (missing ids, rejected drafts)
//!
//! The engine never panics across its public boundary: a bad pattern, a bad
//! draft, or a missing record all come back as values of these types.
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::prelude::*;
//!
//! match store.insert(&draft) {
//!     Ok(record) => println!("Stored: {}", record.id),
//!     Err(StoreError::InvalidDraft { report }) => {
//!         for (field, message) in report.errors() {
//!             eprintln!("{}: {}", field, message);
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use std::fmt;

use crate::core::validation::ValidationReport;
use crate::storage::StoreError;

/// The main error type for the spendbook engine
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug)]
pub enum SpendbookError {
    /// A search pattern failed to compile
    Pattern(PatternError),

    /// A record draft failed field validation
    Validation(ValidationReport),

    /// A record store operation failed
    Store(StoreError),
}

impl fmt::Display for SpendbookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpendbookError::Pattern(e) => write!(f, "{}", e),
            SpendbookError::Validation(report) => {
                write!(f, "Validation errors: {}", report)
            }
            SpendbookError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SpendbookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpendbookError::Pattern(e) => Some(e),
            SpendbookError::Validation(_) => None,
            SpendbookError::Store(e) => Some(e),
        }
    }
}

impl SpendbookError {
    /// Get the error code for programmatic handling by the embedding UI
    pub fn error_code(&self) -> &'static str {
        match self {
            SpendbookError::Pattern(_) => "INVALID_PATTERN",
            SpendbookError::Validation(_) => "VALIDATION_FAILED",
            SpendbookError::Store(e) => e.error_code(),
        }
    }

    /// Get additional details for the error
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            SpendbookError::Pattern(e) => Some(serde_json::json!({
                "pattern": e.pattern
            })),
            SpendbookError::Validation(report) => Some(serde_json::json!({
                "fields": report.errors()
            })),
            SpendbookError::Store(StoreError::InvalidDraft { report }) => {
                Some(serde_json::json!({ "fields": report.errors() }))
            }
            SpendbookError::Store(_) => None,
        }
    }
}

// =============================================================================
// Pattern Errors
// =============================================================================

/// A user-supplied search pattern that failed to compile
///
/// Compilation failures are always caught at the compiler boundary and
/// returned as values; the raw pattern is kept so the UI can echo it back.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternError {
    /// The raw pattern as the user typed it
    pub pattern: String,

    /// The underlying compile failure, in human-readable form
    pub message: String,
}

impl PatternError {
    /// Wrap a regex compile failure together with the offending pattern
    pub fn new(pattern: impl Into<String>, source: &regex::Error) -> Self {
        Self {
            pattern: pattern.into(),
            message: source.to_string(),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid search pattern '{}': {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternError {}

// =============================================================================
// Conversions
// =============================================================================

impl From<PatternError> for SpendbookError {
    fn from(err: PatternError) -> Self {
        SpendbookError::Pattern(err)
    }
}

impl From<ValidationReport> for SpendbookError {
    fn from(report: ValidationReport) -> Self {
        SpendbookError::Validation(report)
    }
}

impl From<StoreError> for SpendbookError {
    fn from(err: StoreError) -> Self {
        SpendbookError::Store(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for spendbook operations
pub type SpendbookResult<T> = Result<T, SpendbookError>;

// =============================================================================
// Tests
// =============================================================================
