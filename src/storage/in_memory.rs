//! In-memory record store
//!
//! Thread-safe via `RwLock`; insertion order is preserved so that list and
//! search results come back in the order records were admitted.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::record::{Record, RecordDraft};
use crate::core::search::{self, SearchOutcome};
use crate::core::validation::{ValidationReport, validate_draft};
use crate::storage::StoreError;

/// In-memory record store
///
/// Every draft goes through the full validation rule set before it is
/// admitted; ids and timestamps are assigned here, never by the caller.
/// Cloning the store clones the handle, not the records.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<IndexMap<Uuid, Record>>>,
}

impl InMemoryRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and extract its numeric amount
    fn validated_amount(draft: &RecordDraft) -> Result<f64, StoreError> {
        let report = validate_draft(draft);
        if !report.is_valid() {
            return Err(StoreError::InvalidDraft { report });
        }
        match draft.amount.parse::<f64>() {
            Ok(amount) => Ok(amount),
            Err(_) => {
                let mut report = ValidationReport::new();
                report.add_error("amount", "Must be a valid number with max 2 decimals");
                Err(StoreError::InvalidDraft { report })
            }
        }
    }

    /// Validate and admit a new record
    pub fn insert(&self, draft: &RecordDraft) -> Result<Record, StoreError> {
        let amount = match Self::validated_amount(draft) {
            Ok(amount) => amount,
            Err(e) => {
                warn!(%e, "draft rejected");
                return Err(e);
            }
        };

        let record = Record::new(
            draft.description.clone(),
            amount,
            draft.category.clone(),
            draft.date.clone(),
        );

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(record.id, record.clone());
        debug!(id = %record.id, "record inserted");

        Ok(record)
    }

    /// Fetch one record by id
    pub fn get(&self, id: &Uuid) -> Result<Option<Record>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    /// All records, in insertion order
    pub fn list(&self) -> Result<Vec<Record>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.values().cloned().collect())
    }

    /// Validate a draft and apply it to an existing record
    ///
    /// The id and creation timestamp are immutable; the update timestamp is
    /// refreshed. The record keeps its position in the listing order.
    pub fn update(&self, id: &Uuid, draft: &RecordDraft) -> Result<Record, StoreError> {
        let amount = Self::validated_amount(draft)?;

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let record = records
            .get_mut(id)
            .ok_or(StoreError::NotFound { id: *id })?;

        record.description = draft.description.clone();
        record.amount = amount;
        record.category = draft.category.clone();
        record.date = draft.date.clone();
        record.touch();
        debug!(id = %record.id, "record updated");

        Ok(record.clone())
    }

    /// Remove a record, returning it
    pub fn remove(&self, id: &Uuid) -> Result<Record, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let record = records
            .shift_remove(id)
            .ok_or(StoreError::NotFound { id: *id })?;
        debug!(id = %record.id, "record removed");
        Ok(record)
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Search the stored records with a raw user pattern
    ///
    /// Results come back in insertion order; see [`crate::core::search::search`]
    /// for the pattern semantics.
    pub fn search(&self, pattern: &str, case_sensitive: bool) -> Result<SearchOutcome, StoreError> {
        let records = self.list()?;
        Ok(search::search(&records, pattern, case_sensitive))
    }

    /// Seed an empty store with default records
    ///
    /// Does nothing when the store already holds records. Each draft runs
    /// through the same validation as a user submission; invalid seeds are
    /// skipped. Returns the number of records admitted.
    pub fn seed(&self, drafts: &[RecordDraft]) -> Result<usize, StoreError> {
        if !self.is_empty()? {
            return Ok(0);
        }

        let mut admitted = 0;
        for draft in drafts {
            match self.insert(draft) {
                Ok(_) => admitted += 1,
                Err(StoreError::InvalidDraft { report }) => {
                    warn!(description = %draft.description, %report, "seed draft skipped");
                }
                Err(e) => return Err(e),
            }
        }

        info!(admitted, "store seeded");
        Ok(admitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee_draft() -> RecordDraft {
        RecordDraft::new("Morning coffee", "3.5", "2026-08-01", "Food")
    }

    fn bus_draft() -> RecordDraft {
        RecordDraft::new("Bus fare", "2", "2026-08-02", "Transport")
    }

    // === insert ===

    #[test]
    fn test_insert_valid_draft() {
        let store = InMemoryRecordStore::new();
        let record = store.insert(&coffee_draft()).unwrap();

        assert_eq!(record.description, "Morning coffee");
        assert_eq!(record.amount, 3.5);
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_insert_rejects_invalid_draft() {
        let store = InMemoryRecordStore::new();
        let draft = RecordDraft::new("ok description", "1.999", "2026-08-01", "Food");

        let err = store.insert(&draft).unwrap_err();
        match err {
            StoreError::InvalidDraft { report } => {
                assert!(report.error_for("amount").is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let store = InMemoryRecordStore::new();
        let a = store.insert(&coffee_draft()).unwrap();
        let b = store.insert(&bus_draft()).unwrap();
        assert_ne!(a.id, b.id);
    }

    // === get / list ===

    #[test]
    fn test_get_by_id() {
        let store = InMemoryRecordStore::new();
        let record = store.insert(&coffee_draft()).unwrap();

        let fetched = store.get(&record.id).unwrap();
        assert_eq!(fetched, Some(record));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.get(&Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = InMemoryRecordStore::new();
        store.insert(&coffee_draft()).unwrap();
        store.insert(&bus_draft()).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].description, "Morning coffee");
        assert_eq!(listed[1].description, "Bus fare");
    }

    // === update ===

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let store = InMemoryRecordStore::new();
        let record = store.insert(&coffee_draft()).unwrap();

        let mut draft = coffee_draft();
        draft.amount = "4.25".into();
        let updated = store.update(&record.id, &draft).unwrap();

        assert_eq!(updated.id, record.id);
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(updated.amount, 4.25);
        assert!(updated.updated_at >= record.updated_at);
    }

    #[test]
    fn test_update_missing_record() {
        let store = InMemoryRecordStore::new();
        let err = store.update(&Uuid::new_v4(), &coffee_draft()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_update_rejects_invalid_draft() {
        let store = InMemoryRecordStore::new();
        let record = store.insert(&coffee_draft()).unwrap();

        let mut draft = coffee_draft();
        draft.date = "tomorrow".into();
        assert!(matches!(
            store.update(&record.id, &draft),
            Err(StoreError::InvalidDraft { .. })
        ));

        // The stored record is untouched
        assert_eq!(store.get(&record.id).unwrap(), Some(record));
    }

    #[test]
    fn test_update_keeps_listing_position() {
        let store = InMemoryRecordStore::new();
        let first = store.insert(&coffee_draft()).unwrap();
        store.insert(&bus_draft()).unwrap();

        let mut draft = coffee_draft();
        draft.description = "Espresso".into();
        store.update(&first.id, &draft).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed[0].description, "Espresso");
    }

    // === remove ===

    #[test]
    fn test_remove_record() {
        let store = InMemoryRecordStore::new();
        let record = store.insert(&coffee_draft()).unwrap();

        let removed = store.remove(&record.id).unwrap();
        assert_eq!(removed.id, record.id);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_remove_missing_record() {
        let store = InMemoryRecordStore::new();
        assert!(matches!(
            store.remove(&Uuid::new_v4()),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let store = InMemoryRecordStore::new();
        let a = store.insert(&coffee_draft()).unwrap();
        store.insert(&bus_draft()).unwrap();
        store
            .insert(&RecordDraft::new("Groceries", "42.17", "2026-08-03", "Food"))
            .unwrap();

        store.remove(&a.id).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed[0].description, "Bus fare");
        assert_eq!(listed[1].description, "Groceries");
    }

    // === search ===

    #[test]
    fn test_search_through_store() {
        let store = InMemoryRecordStore::new();
        store.insert(&coffee_draft()).unwrap();
        store.insert(&bus_draft()).unwrap();

        let outcome = store.search("coffee", false).unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].description, "Morning coffee");
    }

    #[test]
    fn test_search_invalid_pattern_through_store() {
        let store = InMemoryRecordStore::new();
        store.insert(&coffee_draft()).unwrap();

        let outcome = store.search("(abc", false).unwrap();
        assert!(outcome.results.is_empty());
        assert!(outcome.is_error());
    }

    // === seed ===

    #[test]
    fn test_seed_empty_store() {
        let store = InMemoryRecordStore::new();
        let admitted = store.seed(&[coffee_draft(), bus_draft()]).unwrap();
        assert_eq!(admitted, 2);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_seed_skips_invalid_drafts() {
        let store = InMemoryRecordStore::new();
        let bad = RecordDraft::new("x", "oops", "nope", "?");
        let admitted = store.seed(&[coffee_draft(), bad]).unwrap();
        assert_eq!(admitted, 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_seed_noop_on_populated_store() {
        let store = InMemoryRecordStore::new();
        store.insert(&coffee_draft()).unwrap();

        let admitted = store.seed(&[bus_draft()]).unwrap();
        assert_eq!(admitted, 0);
        assert_eq!(store.len().unwrap(), 1);
    }
}
