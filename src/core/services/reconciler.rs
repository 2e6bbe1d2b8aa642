//! Reconciler - merges disagreeing source records into one brief
//!
//! For every field seen in any source, the value from the highest-priority
//! source holding that field wins. Sources missing from the priority table
//! rank at 0; equal priorities fall back to source name order so the result
//! never depends on input order.
//!
//! # Examples
//!
//! ```
//! use propbrief::core::models::MergeInput;
//! use propbrief::core::services::Reconciler;
//! use serde_json::json;
//!
//! let mut sources = MergeInput::new();
//! sources.insert("county".into(), [("x".to_string(), json!(1))].into());
//! sources.insert("listing".into(), [("x".to_string(), json!(2))].into());
//!
//! let merged = Reconciler::default().reconcile(&sources);
//! assert_eq!(merged.fields["x"], json!(2));
//! assert_eq!(merged.provenance["x"], "listing");
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ConflictRule;
use super::coerce;
use crate::core::models::{FieldValue, MergeInput, MergedBrief};

/// Priority assigned to sources absent from the priority table
pub const UNKNOWN_SOURCE_PRIORITY: i64 = 0;

/// Reconciliation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Source name to priority; higher wins
    #[serde(default = "default_priority")]
    pub priority: BTreeMap<String, i64>,

    /// Per-field disagreement rules
    #[serde(default = "default_conflicts")]
    pub conflicts: Vec<ConflictRule>,
}

fn default_priority() -> BTreeMap<String, i64> {
    [("listing", 3), ("county", 2), ("hoa", 1)]
        .into_iter()
        .map(|(name, p)| (name.to_string(), p))
        .collect()
}

fn default_conflicts() -> Vec<ConflictRule> {
    vec![ConflictRule::square_feet()]
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            conflicts: default_conflicts(),
        }
    }
}

impl ReconcileConfig {
    /// Priority of a source, [`UNKNOWN_SOURCE_PRIORITY`] if unlisted
    #[must_use]
    pub fn priority_of(&self, source: &str) -> i64 {
        self.priority.get(source).copied().unwrap_or(UNKNOWN_SOURCE_PRIORITY)
    }

    /// Total order over sources: higher priority first, then name
    #[must_use]
    pub fn rank(&self, a: &str, b: &str) -> Ordering {
        self.priority_of(a).cmp(&self.priority_of(b)).then_with(|| b.cmp(a))
    }
}

/// Stateless merge engine configured with a priority table and rules
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Create a reconciler from explicit settings
    #[must_use]
    pub const fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// The settings this reconciler was built with
    #[must_use]
    pub const fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Merge every source's record into a single brief
    ///
    /// `null` values count as absent. An empty input yields an empty brief.
    #[must_use]
    pub fn reconcile(&self, sources: &MergeInput) -> MergedBrief {
        let by_field = collect_field_values(sources);

        let mut fields = BTreeMap::new();
        let mut provenance = BTreeMap::new();
        let mut conflicts = Vec::new();
        let mut sources_used = BTreeSet::new();

        for (field, values) in &by_field {
            sources_used.extend(values.keys().map(|s| (*s).to_string()));

            let Some(winner) = self.winner(values.keys().copied()) else {
                continue;
            };

            if values.len() > 1 {
                conflicts.extend(
                    self.config
                        .conflicts
                        .iter()
                        .filter(|rule| rule.field == *field)
                        .filter_map(|rule| rule.evaluate(values)),
                );
            }

            fields.insert((*field).to_string(), values[winner].clone());
            provenance.insert((*field).to_string(), winner.to_string());
        }

        log::debug!(
            "merged {} field(s) from {} source(s), {} conflict(s)",
            fields.len(),
            sources_used.len(),
            conflicts.len()
        );

        MergedBrief {
            fields,
            provenance,
            conflicts,
            sources_used,
            merged_at: Utc::now(),
        }
    }

    /// Pick the winning source among those holding a field
    fn winner<'a>(&self, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
        candidates.max_by(|a, b| self.config.rank(a, b))
    }
}

/// Group present values by field, then by source
fn collect_field_values(sources: &MergeInput) -> BTreeMap<&str, BTreeMap<&str, &FieldValue>> {
    let mut by_field: BTreeMap<&str, BTreeMap<&str, &FieldValue>> = BTreeMap::new();
    for (source, record) in sources {
        for (field, value) in record {
            if coerce::is_present(value) {
                by_field.entry(field.as_str()).or_default().insert(source.as_str(), value);
            }
        }
    }
    by_field
}

/// Reconcile with the default priority table and rules
#[must_use]
pub fn reconcile(sources: &MergeInput) -> MergedBrief {
    Reconciler::default().reconcile(sources)
}
