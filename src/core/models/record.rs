//! Source records and merge input
//!
//! Field values are schema-free: a provider may hand back strings, numbers,
//! booleans, lists or nested objects for any field.

use std::collections::BTreeMap;

/// A dynamically typed field value
pub type FieldValue = serde_json::Value;

/// One provider's field dictionary for a single property
pub type SourceRecord = BTreeMap<String, FieldValue>;

/// Source name to that source's record
///
/// Ordered by source name so that iteration never depends on the order in
/// which providers were queried.
pub type MergeInput = BTreeMap<String, SourceRecord>;
