//! Merged brief model
//!
//! The output of reconciliation. A merged brief is always recomputed from
//! scratch and replaces any earlier one for the same property.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FieldValue;

/// Advisory note that sources materially disagree on a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// The disputed field
    pub field: String,

    /// Every source's value for the field, keyed by source name
    pub values: BTreeMap<String, FieldValue>,

    /// Human-readable explanation
    pub reason: String,
}

/// Result of reconciling every source's record for one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedBrief {
    /// Winning value per field
    pub fields: BTreeMap<String, FieldValue>,

    /// Source that supplied each winning value
    pub provenance: BTreeMap<String, String>,

    /// Disagreements detected during the merge
    pub conflicts: Vec<Conflict>,

    /// Sources that contributed at least one field
    pub sources_used: BTreeSet<String>,

    /// When the merge was computed
    pub merged_at: DateTime<Utc>,
}

impl MergedBrief {
    /// A brief with no fields, as produced from an empty merge input
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
            provenance: BTreeMap::new(),
            conflicts: Vec::new(),
            sources_used: BTreeSet::new(),
            merged_at: Utc::now(),
        }
    }

    /// Look up a field's winning value
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Whether no source supplied any field
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A property's current brief: the merge plus its completeness score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    /// Property this brief describes
    pub property_id: u64,

    /// The reconciled data
    pub merged: MergedBrief,

    /// Completeness score, 0 to 100
    pub completeness_score: u8,
}
