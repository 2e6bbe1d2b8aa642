//! Completeness scorer
//!
//! Scores a merged field map by how many well-known fields it fills in.
//! Core fields weigh 15 points each and optional fields 5 each. A complete
//! optional set is worth its full 25-point budget, so a brief with every
//! scored field lands on exactly 100.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coerce;
use crate::core::models::FieldValue;

/// Upper bound of any completeness score
pub const SCORE_CEILING: u8 = 100;

/// Scoring settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Fields every useful brief should have
    #[serde(default = "default_core_fields")]
    pub core_fields: Vec<String>,

    /// Nice-to-have fields
    #[serde(default = "default_optional_fields")]
    pub optional_fields: Vec<String>,

    /// Points per present core field
    #[serde(default = "default_core_weight")]
    pub core_weight: u32,

    /// Points per present optional field
    #[serde(default = "default_optional_weight")]
    pub optional_weight: u32,

    /// Points awarded once every optional field is present
    #[serde(default = "default_optional_budget")]
    pub optional_budget: u32,

    /// Score cap, never above [`SCORE_CEILING`]
    #[serde(default = "default_max_score")]
    pub max_score: u32,
}

fn default_core_fields() -> Vec<String> {
    ["address", "square_feet", "bedrooms", "bathrooms", "year_built"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_optional_fields() -> Vec<String> {
    ["lot_size", "property_type", "hoa_fee", "tax_assessed_value"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_core_weight() -> u32 {
    15
}

const fn default_optional_weight() -> u32 {
    5
}

const fn default_optional_budget() -> u32 {
    25
}

const fn default_max_score() -> u32 {
    100
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            core_fields: default_core_fields(),
            optional_fields: default_optional_fields(),
            core_weight: default_core_weight(),
            optional_weight: default_optional_weight(),
            optional_budget: default_optional_budget(),
            max_score: default_max_score(),
        }
    }
}

/// Stateless completeness scorer
#[derive(Debug, Clone, Default)]
pub struct CompletenessScorer {
    config: ScoreConfig,
}

impl CompletenessScorer {
    /// Create a scorer from explicit settings
    #[must_use]
    pub const fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// The settings this scorer was built with
    #[must_use]
    pub const fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Score a field map, 0 to 100
    ///
    /// A field counts when its key is present and its value is not `null`.
    /// Zero and empty strings still count.
    #[must_use]
    pub fn score(&self, fields: &BTreeMap<String, FieldValue>) -> u8 {
        let core = count_present(&self.config.core_fields, fields);
        let optional = count_present(&self.config.optional_fields, fields);

        let mut optional_points = optional.saturating_mul(self.config.optional_weight);
        let optional_total = u32::try_from(self.config.optional_fields.len()).unwrap_or(u32::MAX);
        if optional > 0 && optional == optional_total {
            optional_points = optional_points.max(self.config.optional_budget);
        }

        let raw = core.saturating_mul(self.config.core_weight).saturating_add(optional_points);
        let cap = self.config.max_score.min(u32::from(SCORE_CEILING));

        u8::try_from(raw.min(cap)).unwrap_or(SCORE_CEILING)
    }

    /// Core and optional fields the map is missing, core first
    #[must_use]
    pub fn missing<'a>(&'a self, fields: &BTreeMap<String, FieldValue>) -> Vec<&'a str> {
        self.config
            .core_fields
            .iter()
            .chain(&self.config.optional_fields)
            .filter(|name| !fields.get(name.as_str()).is_some_and(coerce::is_present))
            .map(String::as_str)
            .collect()
    }
}

fn count_present(names: &[String], fields: &BTreeMap<String, FieldValue>) -> u32 {
    let n = names
        .iter()
        .filter(|name| fields.get(name.as_str()).is_some_and(coerce::is_present))
        .count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Score with the default field sets and weights
#[must_use]
pub fn score(fields: &BTreeMap<String, FieldValue>) -> u8 {
    CompletenessScorer::default().score(fields)
}
