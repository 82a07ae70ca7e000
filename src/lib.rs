//! # Spendbook
//!
//! A record query and validation engine for personal expense tracking.
//!
//! ## Features
//!
//! - **Safe Pattern Compilation**: User-supplied search patterns compile into
//!   reusable matchers; a bad pattern is reported as data, never a panic
//! - **Multi-Field Matching**: One compiled pattern matches description,
//!   category, and the textual amount of a record consistently
//! - **Escaped Highlighting**: Matched spans are wrapped in `<mark>` markers
//!   with everything else HTML-escaped, so raw input never reaches the output
//! - **Rule-Based Validation**: A fixed table of per-field rules, each
//!   independently callable and testable
//! - **Duplicate-Word Detection**: Catches a word immediately repeated after
//!   whitespace anywhere in a description
//! - **In-Memory Store**: Thread-safe, insertion-order-preserving record
//!   store with automatic timestamps and validation on admission
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spendbook::prelude::*;
//!
//! let store = InMemoryRecordStore::new();
//!
//! let record = store.insert(&RecordDraft {
//!     description: "Morning coffee".into(),
//!     amount: "3.5".into(),
//!     date: "2026-08-01".into(),
//!     category: "Food".into(),
//! })?;
//!
//! let outcome = store.search("coffee", false)?;
//! assert_eq!(outcome.results.len(), 1);
//!
//! // The compiled pattern is reusable for display-side highlighting
//! let marked = highlight(&record.description, outcome.compiled.as_ref());
//! assert_eq!(marked, "Morning <mark>coffee</mark>");
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{PatternError, SpendbookError, SpendbookResult},
        record::{Record, RecordDraft},
        search::{CompiledPattern, SearchOutcome, compile, highlight, record_matches, search},
        sort::{SortDirection, SortKey, sort_records},
        validation::{FieldRule, ValidationReport, rule_for, validate_draft, validate_field},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryRecordStore, StoreError};

    // === Config ===
    pub use crate::config::{SearchDefaults, SortDefaults, TrackerConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
