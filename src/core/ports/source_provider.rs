//! Source provider port
//!
//! Defines the interface for looking up one provider's data by address key.

use super::super::models::SourceRecord;

/// A provider of property data (county assessor, listing service, ...)
///
/// Providers are queried independently. A provider with no data for a key
/// returns `Ok(None)`; an `Err` is a failed fetch, which callers treat the
/// same as absent data.
pub trait SourceProvider: Send + Sync {
    /// Source name used for priority and provenance
    fn name(&self) -> &str;

    /// Fetch the record for a normalized address key
    fn fetch(&self, normalized_key: &str) -> anyhow::Result<Option<SourceRecord>>;
}
