//! The validation rule table
//!
//! Each rule pairs a name with a matching predicate over raw field text and
//! a fixed failure message. Rules never mutate their input and hold no
//! state; the same rule may run against any number of values concurrently.

use std::sync::OnceLock;

use regex::Regex;

/// A single named validation rule
///
/// Rules are looked up by name via [`rule_for`]; the set is closed, so a
/// plain function pointer is enough and no dynamic dispatch is involved.
pub struct FieldRule {
    /// Rule name, also the form field it usually applies to
    pub name: &'static str,

    /// Human-readable message shown when the rule fails
    pub message: &'static str,

    check: fn(&str) -> bool,
}

impl FieldRule {
    /// Test raw field text against this rule
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

static RULES: &[FieldRule] = &[
    FieldRule {
        name: "description",
        message: "Cannot start/end with spaces or be only spaces",
        check: description_ok,
    },
    FieldRule {
        name: "duplicate_words",
        message: "Contains duplicate consecutive words",
        check: no_duplicate_words,
    },
    FieldRule {
        name: "amount",
        message: "Must be a valid number with max 2 decimals",
        check: amount_ok,
    },
    FieldRule {
        name: "date",
        message: "Must be YYYY-MM-DD format",
        check: date_ok,
    },
    FieldRule {
        name: "category",
        message: "Letters, spaces, hyphens only",
        check: category_ok,
    },
];

/// Look up a rule by name
pub fn rule_for(name: &str) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.name == name)
}

// =============================================================================
// Predicates
// =============================================================================

/// Non-empty, no leading/trailing whitespace, at least 3 characters
fn description_ok(value: &str) -> bool {
    static TRIMMED_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = TRIMMED_REGEX.get_or_init(|| Regex::new(r"^\S(?:.*\S)?$").unwrap());
    regex.is_match(value) && value.chars().count() >= 3
}

/// No word immediately repeated across nothing but whitespace
fn no_duplicate_words(value: &str) -> bool {
    !has_consecutive_duplicate_word(value)
}

/// Non-negative integer or decimal with at most 2 fractional digits
///
/// The textual form is checked first so that parseable-but-malformed input
/// like `"1.999"` or `"007"` is rejected before any numeric comparison.
fn amount_ok(value: &str) -> bool {
    static AMOUNT_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        AMOUNT_REGEX.get_or_init(|| Regex::new(r"^(0|[1-9]\d*)(\.\d{1,2})?$").unwrap());
    regex.is_match(value) && value.parse::<f64>().is_ok_and(|n| n >= 0.0)
}

/// 4-digit year, month 01-12, day 01-31
///
/// Deliberately lenient: the day range is not checked against the month
/// length, so `2025-02-30` passes.
fn date_ok(value: &str) -> bool {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = DATE_REGEX
        .get_or_init(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap());
    regex.is_match(value)
}

/// Letter-only words, optionally space- or hyphen-joined, at least 2 chars
fn category_ok(value: &str) -> bool {
    static CATEGORY_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        CATEGORY_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z]+(?:[ -][A-Za-z]+)*$").unwrap());
    regex.is_match(value) && value.chars().count() >= 2
}

// =============================================================================
// Standalone predicates
// =============================================================================

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Detect a word immediately followed by whitespace and the same word again
///
/// Matches case-sensitively, anywhere in the string. Two words count as
/// consecutive only when nothing but whitespace separates them: punctuation
/// between the occurrences breaks the pair, so `"really, really"` passes
/// while `"really really"` does not.
pub fn has_consecutive_duplicate_word(text: &str) -> bool {
    let mut prev_word: Option<&str> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        if is_word_char(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = iter.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                iter.next();
            }
            let word = &text[start..end];
            if prev_word == Some(word) {
                return true;
            }
            prev_word = Some(word);
        } else if !c.is_whitespace() {
            prev_word = None;
        }
    }

    false
}

/// Whether the text contains an amount written with a two-digit cents part
///
/// An extra search-side predicate for picking out records whose textual
/// amounts carry explicit cents, e.g. `"12.50"` but not `"12.5"` or `"12"`.
pub fn has_cents(text: &str) -> bool {
    static CENTS_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = CENTS_REGEX.get_or_init(|| Regex::new(r"\.\d{2}\b").unwrap());
    regex.is_match(text)
}
