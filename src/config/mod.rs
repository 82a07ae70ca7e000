//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::record::RecordDraft;
use crate::core::sort::{SortDirection, SortKey};

/// Default search behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchDefaults {
    /// Whether searches start out case-sensitive
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Default record ordering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortDefaults {
    #[serde(default)]
    pub key: SortKey,

    #[serde(default)]
    pub direction: SortDirection,
}

/// Complete configuration for a tracker instance
///
/// Every section is optional; an empty file yields the same defaults as no
/// file at all (case-insensitive search, newest-first ordering, no seeds).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Search defaults
    #[serde(default)]
    pub search: SearchDefaults,

    /// Ordering defaults
    #[serde(default)]
    pub sort: SortDefaults,

    /// Records to seed an empty store with, as raw drafts
    ///
    /// Seed drafts go through the same validation as user submissions;
    /// there is no backdoor into the store.
    #[serde(default)]
    pub seed_records: Vec<RecordDraft>,
}

impl TrackerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
