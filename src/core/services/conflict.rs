//! Conflict rules
//!
//! A conflict rule watches one field. When two or more sources report
//! numeric values for it and their relative spread `(max - min) / max`
//! exceeds the rule's threshold, the rule emits a [`Conflict`].
//!
//! Rules only annotate a merge. They never change which value wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coerce;
use crate::core::models::{Conflict, FieldValue};

/// Threshold-based disagreement rule for a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRule {
    /// Field the rule applies to
    pub field: String,

    /// Maximum tolerated relative spread (0.05 = 5%)
    pub threshold: f64,

    /// Reason attached to emitted conflicts
    pub reason: String,
}

impl ConflictRule {
    /// Create a rule
    #[must_use]
    pub fn new(field: impl Into<String>, threshold: f64, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            threshold,
            reason: reason.into(),
        }
    }

    /// The square footage rule: flag spreads above 5%
    #[must_use]
    pub fn square_feet() -> Self {
        Self::new("square_feet", 0.05, "Square footage varies by more than 5%")
    }

    /// Evaluate the rule against every source's value for the field
    ///
    /// Non-numeric values are left out of the comparison but kept in the
    /// emitted conflict's value map.
    #[must_use]
    pub fn evaluate(&self, values: &BTreeMap<&str, &FieldValue>) -> Option<Conflict> {
        let numbers: Vec<f64> = values.values().filter_map(|v| coerce::as_number(v)).collect();
        let spread = relative_spread(&numbers)?;
        if spread <= self.threshold {
            return None;
        }

        log::debug!(
            "conflict on '{}': spread {:.4} exceeds {:.4}",
            self.field,
            spread,
            self.threshold
        );

        Some(Conflict {
            field: self.field.clone(),
            values: values.iter().map(|(s, v)| ((*s).to_string(), (*v).clone())).collect(),
            reason: self.reason.clone(),
        })
    }
}

/// Relative spread `(max - min) / max` of at least two numbers
///
/// `None` when fewer than two numbers are given or the maximum is not
/// positive.
#[must_use]
pub fn relative_spread(numbers: &[f64]) -> Option<f64> {
    if numbers.len() < 2 {
        return None;
    }
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    (max > 0.0).then(|| (max - min) / max)
}
