//! Search engine: pattern compilation, record matching, highlighting
//!
//! The orchestrator composes the three leaf pieces over a record collection:
//! compile the raw pattern, filter the collection, and hand the compiled
//! pattern back so display code can highlight the same matches. The caller
//! owns the record list; search only ever reads it.

pub mod highlight;
pub mod matcher;
pub mod pattern;

pub use highlight::highlight;
pub use matcher::record_matches;
pub use pattern::{CompiledPattern, compile};

use tracing::{debug, warn};

use crate::core::error::PatternError;
use crate::core::record::Record;

/// The result of one search invocation
#[derive(Debug)]
pub struct SearchOutcome {
    /// Matching records, in the same order as the input collection
    pub results: Vec<Record>,

    /// The compiled pattern, for reuse by display-side highlighting.
    /// `None` when the pattern was blank or failed to compile.
    pub compiled: Option<CompiledPattern>,

    /// The compile failure, if the non-blank pattern was invalid
    pub error: Option<PatternError>,
}

impl SearchOutcome {
    /// Whether the search failed to compile its pattern
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Filter `records` against a raw user pattern
///
/// - A blank pattern returns the full collection unchanged, with no error.
/// - An invalid non-blank pattern returns an empty result list and the
///   compile failure; a failed pattern never leaks a partial match set.
/// - Otherwise the matching subsequence is returned, order preserved.
///   Search never re-sorts; ordering is the caller's concern.
pub fn search(records: &[Record], pattern: &str, case_sensitive: bool) -> SearchOutcome {
    let compiled = match compile(pattern, case_sensitive) {
        Ok(compiled) => compiled,
        Err(error) => {
            warn!(pattern, %error, "search pattern failed to compile");
            return SearchOutcome {
                results: Vec::new(),
                compiled: None,
                error: Some(error),
            };
        }
    };

    let results: Vec<Record> = records
        .iter()
        .filter(|record| record_matches(record, compiled.as_ref()))
        .cloned()
        .collect();

    debug!(
        pattern,
        case_sensitive,
        matched = results.len(),
        total = records.len(),
        "search completed"
    );

    SearchOutcome {
        results,
        compiled,
        error: None,
    }
}
