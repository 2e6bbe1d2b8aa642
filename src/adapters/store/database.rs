//! Serializable snapshot of everything a brief store holds

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::models::{
    Brief, Contribution, ContributionStatus, MergeInput, NewContribution, Property, SourceDatum,
};

/// All stored state, keyed by ID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    /// Last assigned property ID
    #[serde(default)]
    pub last_property_id: u64,
    /// Last assigned contribution ID
    #[serde(default)]
    pub last_contribution_id: u64,
    /// Properties by ID
    #[serde(default)]
    pub properties: BTreeMap<u64, Property>,
    /// Source records by property ID
    #[serde(default)]
    pub sources: BTreeMap<u64, Vec<SourceDatum>>,
    /// Current brief by property ID
    #[serde(default)]
    pub briefs: BTreeMap<u64, Brief>,
    /// Contributions by ID
    #[serde(default)]
    pub contributions: BTreeMap<u64, Contribution>,
}

impl Database {
    /// Insert or touch a property keyed by normalized address
    pub fn upsert_property(&mut self, address: &str, normalized_address: &str) -> Property {
        let now = Utc::now();
        if let Some(existing) =
            self.properties.values_mut().find(|p| p.normalized_address == normalized_address)
        {
            existing.updated_at = now;
            return existing.clone();
        }

        self.last_property_id += 1;
        let property = Property {
            id: self.last_property_id,
            address: address.to_string(),
            normalized_address: normalized_address.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.properties.insert(property.id, property.clone());
        property
    }

    /// Replace a property's source records
    pub fn replace_source_data(&mut self, property_id: u64, sources: &MergeInput) {
        let fetched_at = Utc::now();
        let data = sources
            .iter()
            .map(|(name, record)| SourceDatum {
                property_id,
                source_name: name.clone(),
                data: record.clone(),
                fetched_at,
            })
            .collect();
        self.sources.insert(property_id, data);
    }

    /// A property's source records
    #[must_use]
    pub fn source_data(&self, property_id: u64) -> Vec<SourceDatum> {
        self.sources.get(&property_id).cloned().unwrap_or_default()
    }

    /// Replace a property's brief
    pub fn save_brief(&mut self, brief: &Brief) {
        self.briefs.insert(brief.property_id, brief.clone());
    }

    /// Record a contribution and assign it an ID
    pub fn add_contribution(&mut self, property_id: u64, submission: NewContribution) -> Contribution {
        self.last_contribution_id += 1;
        let contribution = Contribution::new(self.last_contribution_id, property_id, submission);
        self.contributions.insert(contribution.id, contribution.clone());
        contribution
    }

    /// A property's contributions in submission order
    #[must_use]
    pub fn contributions_for(&self, property_id: u64) -> Vec<Contribution> {
        self.contributions.values().filter(|c| c.property_id == property_id).cloned().collect()
    }

    /// Update a contribution's status
    pub fn set_contribution_status(
        &mut self,
        id: u64,
        status: ContributionStatus,
    ) -> Option<Contribution> {
        let contribution = self.contributions.get_mut(&id)?;
        contribution.status = status;
        Some(contribution.clone())
    }
}
