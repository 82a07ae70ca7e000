//! Walkthrough of the search and validation engine

use spendbook::prelude::*;

const CONFIG_YAML: &str = r#"
search:
  case_sensitive: false
sort:
  key: date
  direction: descending
seed_records:
  - description: "Morning coffee"
    amount: "3.5"
    date: "2026-08-01"
    category: "Food"
  - description: "Bus fare"
    amount: "2"
    date: "2026-08-02"
    category: "Transport"
  - description: "Weekly groceries"
    amount: "42.17"
    date: "2026-08-03"
    category: "Food"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Spendbook Quickstart\n");

    // Load configuration and seed the store
    let config = TrackerConfig::from_yaml_str(CONFIG_YAML)?;
    let store = InMemoryRecordStore::new();
    let seeded = store.seed(&config.seed_records)?;
    println!("Seeded {seeded} records\n");

    // Search with a valid pattern
    let outcome = store.search("food", config.search.case_sensitive)?;
    println!("Search 'food' matched {} records:", outcome.results.len());
    for record in &outcome.results {
        let marked = highlight(&record.category, outcome.compiled.as_ref());
        println!("  {} | {} | {}", record.description, record.amount_text(), marked);
    }

    // An invalid pattern comes back as data, never a panic
    let outcome = store.search("(unclosed", false)?;
    match outcome.error {
        Some(error) => println!("\nBad pattern reported: {error}"),
        None => println!("\nUnexpectedly compiled"),
    }

    // Validation blocks a malformed draft
    let draft = RecordDraft::new("coffee coffee run", "1.999", "someday", "Food");
    match store.insert(&draft) {
        Err(StoreError::InvalidDraft { report }) => {
            println!("\nDraft rejected:");
            for (field, message) in report.errors() {
                println!("  {field}: {message}");
            }
        }
        other => println!("\nUnexpected outcome: {other:?}"),
    }

    // Sort a listing newest-first for display
    let mut records = store.list()?;
    sort_records(&mut records, config.sort.key, config.sort.direction);
    println!("\nRecords, newest first:");
    for record in &records {
        println!("  {} | {} | {}", record.date, record.description, record.amount_text());
    }

    Ok(())
}
