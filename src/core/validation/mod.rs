//! Field validation for candidate records
//!
//! A fixed table of named rules covers the four form fields plus the
//! duplicate-word check. Rules are pure, stateless, and dispatched by name,
//! never by position; the form validator runs the relevant rules over a
//! draft and aggregates per-field messages for direct display.

pub mod form;
pub mod rules;

pub use form::{ValidationReport, validate_draft, validate_field};
pub use rules::{FieldRule, rule_for};
