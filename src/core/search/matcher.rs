//! Applying a compiled pattern across the searchable fields of a record

use crate::core::record::Record;
use crate::core::search::pattern::CompiledPattern;

/// Test whether a record matches the compiled pattern
///
/// With no pattern every record matches (no filter is active). Otherwise the
/// pattern is tried against the description, the category, and the canonical
/// textual amount, in that order. Legacy records carry empty description or
/// category text and simply fail those probes; they are never an error.
pub fn record_matches(record: &Record, compiled: Option<&CompiledPattern>) -> bool {
    let Some(compiled) = compiled else {
        return true;
    };

    compiled.is_match(&record.description)
        || compiled.is_match(&record.category)
        || compiled.is_match(&record.amount_text())
}
