//! Property and stored source data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SourceRecord;

/// A property known to the system, identified by its normalized address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Store-assigned identifier
    pub id: u64,

    /// The address as first submitted
    pub address: String,

    /// Lookup key produced by the address normalizer
    pub normalized_address: String,

    /// When the property was first ingested
    pub created_at: DateTime<Utc>,

    /// When the property was last ingested or refreshed
    pub updated_at: DateTime<Utc>,
}

/// A provider's raw record as fetched for a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDatum {
    /// Property the record belongs to
    pub property_id: u64,

    /// Provider name ("county", "listing", ...)
    pub source_name: String,

    /// The record exactly as the provider returned it
    pub data: SourceRecord,

    /// When the record was fetched
    pub fetched_at: DateTime<Utc>,
}
