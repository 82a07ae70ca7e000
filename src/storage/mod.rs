//! Record storage
//!
//! Persistence format and transport are the embedding application's concern;
//! the engine ships a single in-memory backend that validates on admission
//! and keeps insertion order.

pub mod in_memory;

pub use in_memory::InMemoryRecordStore;

use thiserror::Error;
use uuid::Uuid;

use crate::core::validation::ValidationReport;

/// Errors from record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id
    #[error("Record '{id}' not found")]
    NotFound { id: Uuid },

    /// The draft failed field validation and was not admitted
    #[error("Record rejected: {report}")]
    InvalidDraft { report: ValidationReport },

    /// A previous writer panicked while holding the store lock
    #[error("Record store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "RECORD_NOT_FOUND",
            StoreError::InvalidDraft { .. } => "VALIDATION_FAILED",
            StoreError::LockPoisoned => "STORE_LOCK_POISONED",
        }
    }
}
