//! Record ordering
//!
//! Sorting is independent of search: the search path never re-orders its
//! input, and display code applies one of these orderings upstream or
//! downstream of a filter as it sees fit.

use serde::{Deserialize, Serialize};

use crate::core::record::Record;

/// The field a record list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Description,
    Category,
}

/// Ordering direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Stable in-place sort of records by one key
///
/// Validated dates are `YYYY-MM-DD` text, so lexicographic order is
/// chronological order. Ties keep their existing relative order.
pub fn sort_records(records: &mut [Record], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Description => a.description.cmp(&b.description),
            SortKey::Category => a.category.cmp(&b.category),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Bus fare", 2.0, "Transport", "2026-08-02"),
            Record::new("Coffee", 3.5, "Food", "2026-08-01"),
            Record::new("Groceries", 42.17, "Food", "2026-08-03"),
        ]
    }

    #[test]
    fn test_sort_by_date_descending_is_default_ordering() {
        let mut records = sample();
        sort_records(&mut records, SortKey::default(), SortDirection::default());
        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2026-08-03", "2026-08-02", "2026-08-01"]);
    }

    #[test]
    fn test_sort_by_amount_ascending() {
        let mut records = sample();
        sort_records(&mut records, SortKey::Amount, SortDirection::Ascending);
        let amounts: Vec<f64> = records.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, [2.0, 3.5, 42.17]);
    }

    #[test]
    fn test_sort_by_description_ascending() {
        let mut records = sample();
        sort_records(&mut records, SortKey::Description, SortDirection::Ascending);
        assert_eq!(records[0].description, "Bus fare");
        assert_eq!(records[2].description, "Groceries");
    }

    #[test]
    fn test_sort_by_category_is_stable() {
        let mut records = sample();
        sort_records(&mut records, SortKey::Category, SortDirection::Ascending);
        // Both Food records keep their original relative order
        assert_eq!(records[0].description, "Coffee");
        assert_eq!(records[1].description, "Groceries");
        assert_eq!(records[2].description, "Bus fare");
    }

    #[test]
    fn test_sort_key_deserializes_lowercase() {
        let key: SortKey = serde_yaml::from_str("amount").expect("should parse");
        assert_eq!(key, SortKey::Amount);
        let dir: SortDirection = serde_yaml::from_str("ascending").expect("should parse");
        assert_eq!(dir, SortDirection::Ascending);
    }
}
