//! Static source providers
//!
//! Each provider answers lookups from a fixed table keyed by normalized
//! address. They stand in for the county assessor, listing service, HOA
//! registry and neighborhood data feeds.

mod county;
mod hoa;
mod listing;
mod neighborhood;

pub use county::county;
pub use hoa::hoa;
pub use listing::listing;
pub use neighborhood::neighborhood;

use std::collections::HashMap;

use serde_json::Value;

use crate::core::models::SourceRecord;
use crate::core::ports::SourceProvider;

/// A provider backed by an in-memory table
#[derive(Debug, Clone)]
pub struct StaticSourceProvider {
    name: String,
    records: HashMap<String, SourceRecord>,
}

impl StaticSourceProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: HashMap::new(),
        }
    }

    /// Add a record for a normalized address key
    ///
    /// Non-object values are ignored.
    #[must_use]
    pub fn with_record(mut self, normalized_key: &str, record: Value) -> Self {
        if let Value::Object(map) = record {
            self.records.insert(normalized_key.to_string(), map.into_iter().collect());
        }
        self
    }

    /// Number of addresses this provider knows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the provider knows no addresses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SourceProvider for StaticSourceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, normalized_key: &str) -> anyhow::Result<Option<SourceRecord>> {
        Ok(self.records.get(normalized_key).cloned())
    }
}

/// Every built-in provider
#[must_use]
pub fn default_providers() -> Vec<Box<dyn SourceProvider>> {
    vec![Box::new(county()), Box::new(listing()), Box::new(hoa()), Box::new(neighborhood())]
}
