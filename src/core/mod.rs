//! Core module containing the search and validation engine

pub mod error;
pub mod record;
pub mod search;
pub mod sort;
pub mod validation;

pub use error::{PatternError, SpendbookError, SpendbookResult};
pub use record::{Record, RecordDraft};
pub use search::{CompiledPattern, SearchOutcome};
pub use sort::{SortDirection, SortKey};
pub use validation::{FieldRule, ValidationReport};
