//! Form-level validation over a candidate record
//!
//! Runs the relevant rules against each field of a draft and aggregates
//! per-field messages. Validation is a pure function of the submitted text;
//! the caller decides whether to block persistence on a failed report.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::record::RecordDraft;
use crate::core::validation::rules::rule_for;

/// The aggregated outcome of validating one form submission
///
/// Field order is insertion order, so messages display in the same order the
/// fields appear on the form. An absent key means the field is valid.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ValidationReport {
    errors: IndexMap<String, String>,
}

impl ValidationReport {
    /// Create an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no field produced an error message
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Per-field error messages, in field order
    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    /// The error message for one field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Record an error message for a field
    ///
    /// A second message for the same field replaces the first, keeping the
    /// field's original position: the last rule applied wins.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", msgs.join(", "))
    }
}

/// Validate a single field by rule name
///
/// Returns the rule's failure message when the value does not satisfy it.
/// An unknown rule name means no constraint applies, so the value passes.
pub fn validate_field(rule_name: &str, value: &str) -> Option<&'static str> {
    let rule = rule_for(rule_name)?;
    if rule.is_satisfied_by(value) {
        None
    } else {
        Some(rule.message)
    }
}

/// Validate a whole draft and aggregate per-field messages
///
/// The description field runs two rules: the shape rule first, then the
/// duplicate-word rule; when both fail, the duplicate-word message replaces
/// the first one. The draft itself is never mutated.
pub fn validate_draft(draft: &RecordDraft) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(message) = validate_field("description", &draft.description) {
        report.add_error("description", message);
    }
    if let Some(message) = validate_field("duplicate_words", &draft.description) {
        report.add_error("description", message);
    }
    if let Some(message) = validate_field("amount", &draft.amount) {
        report.add_error("amount", message);
    }
    if let Some(message) = validate_field("date", &draft.date) {
        report.add_error("date", message);
    }
    if let Some(message) = validate_field("category", &draft.category) {
        report.add_error("category", message);
    }

    report
}
