//! Expense record types
//!
//! A [`Record`] is the unit being searched and validated. Drafts arrive from
//! the outside world as raw text ([`RecordDraft`]) and only become records
//! once they pass the validation rule set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored expense record
///
/// `description` and `category` default to empty strings on deserialization
/// so that legacy records missing either field are tolerated by the search
/// path instead of failing to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Unique identifier, immutable once assigned
    pub id: Uuid,

    /// Free-text description of the expense
    #[serde(default)]
    pub description: String,

    /// Non-negative amount with at most two fractional digits
    pub amount: f64,

    /// Expense category (letters, spaces, hyphens)
    #[serde(default)]
    pub category: String,

    /// Calendar date as validated `YYYY-MM-DD` text
    pub date: String,

    /// When this record was created (assigned by the store)
    pub created_at: DateTime<Utc>,

    /// When this record was last updated (maintained by the store)
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Create a new record with a fresh id and timestamps
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category: category.into(),
            date: date.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// The canonical textual rendering of the amount
    ///
    /// Uses the shortest round-trip form: `8.5` renders as `"8.5"`, not
    /// `"8.50"`, and whole amounts render without a fractional part
    /// (`2.0` renders as `"2"`). The search path matches against exactly
    /// this text, so display code must use the same rendering.
    pub fn amount_text(&self) -> String {
        self.amount.to_string()
    }
}

/// A candidate record as submitted, all fields still raw text
///
/// Amount and date arrive as text, not parsed numbers or dates, so the
/// validation rules can reject malformed-but-parseable input like `"1.999"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordDraft {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub amount: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub category: String,
}

impl RecordDraft {
    /// Create a draft from raw field text
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
        }
    }
}

impl From<&Record> for RecordDraft {
    /// Turn a stored record back into editable draft text
    fn from(record: &Record) -> Self {
        Self {
            description: record.description.clone(),
            amount: record.amount_text(),
            date: record.date.clone(),
            category: record.category.clone(),
        }
    }
}
