//! Business logic services
//!
//! Pure functions over in-memory data. Nothing here performs I/O directly,
//! holds shared state or returns an error.
//!
//! - [`reconciler`] - Merge source records by priority, detect conflicts
//! - [`conflict`] - Threshold-based per-field disagreement rules
//! - [`scorer`] - Completeness score of a merged field map
//! - [`coerce`] - Best-effort value coercion helpers
//! - [`summary`] - Narrative enrichment with a rule-based fallback

pub mod coerce;
pub mod conflict;
pub mod reconciler;
pub mod scorer;
pub mod summary;

pub use conflict::ConflictRule;
pub use reconciler::{ReconcileConfig, Reconciler, reconcile};
pub use scorer::{CompletenessScorer, ScoreConfig, score};
pub use summary::{build_prompt, rule_based_summary, summarize};
