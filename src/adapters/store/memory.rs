//! In-memory brief store

use std::sync::{Mutex, MutexGuard};

use super::Database;
use crate::core::models::{
    Brief, Contribution, ContributionStatus, MergeInput, NewContribution, Property, SourceDatum,
};
use crate::core::ports::BriefStore;

/// Brief store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    db: Mutex<Database>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, Database>> {
        self.db.lock().map_err(|_| anyhow::anyhow!("memory store lock poisoned"))
    }
}

impl BriefStore for MemoryStore {
    fn upsert_property(
        &self,
        address: &str,
        normalized_address: &str,
    ) -> anyhow::Result<Property> {
        Ok(self.lock()?.upsert_property(address, normalized_address))
    }

    fn property(&self, id: u64) -> anyhow::Result<Option<Property>> {
        Ok(self.lock()?.properties.get(&id).cloned())
    }

    fn properties(&self) -> anyhow::Result<Vec<Property>> {
        Ok(self.lock()?.properties.values().cloned().collect())
    }

    fn replace_source_data(&self, property_id: u64, sources: &MergeInput) -> anyhow::Result<()> {
        self.lock()?.replace_source_data(property_id, sources);
        Ok(())
    }

    fn source_data(&self, property_id: u64) -> anyhow::Result<Vec<SourceDatum>> {
        Ok(self.lock()?.source_data(property_id))
    }

    fn save_brief(&self, brief: &Brief) -> anyhow::Result<()> {
        self.lock()?.save_brief(brief);
        Ok(())
    }

    fn brief(&self, property_id: u64) -> anyhow::Result<Option<Brief>> {
        Ok(self.lock()?.briefs.get(&property_id).cloned())
    }

    fn add_contribution(
        &self,
        property_id: u64,
        submission: NewContribution,
    ) -> anyhow::Result<Contribution> {
        Ok(self.lock()?.add_contribution(property_id, submission))
    }

    fn contribution(&self, id: u64) -> anyhow::Result<Option<Contribution>> {
        Ok(self.lock()?.contributions.get(&id).cloned())
    }

    fn contributions(&self, property_id: u64) -> anyhow::Result<Vec<Contribution>> {
        Ok(self.lock()?.contributions_for(property_id))
    }

    fn set_contribution_status(
        &self,
        id: u64,
        status: ContributionStatus,
    ) -> anyhow::Result<Option<Contribution>> {
        Ok(self.lock()?.set_contribution_status(id, status))
    }
}
