//! JSON file brief store
//!
//! The whole database lives in one pretty-printed JSON file. Every
//! operation loads it, and every write saves it back, so separate CLI
//! invocations see each other's changes. Concurrent writers are last write
//! wins.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::Database;
use crate::core::models::{
    Brief, Contribution, ContributionStatus, MergeInput, NewContribution, Property, SourceDatum,
};
use crate::core::ports::BriefStore;

/// File name of the database inside the data directory
pub const STORE_FILE: &str = "store.json";

/// Brief store persisted as JSON on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store at `<data_dir>/store.json`
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::at(data_dir.join(STORE_FILE))
    }

    /// Store at an explicit file path
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<Database> {
        if !self.path.exists() {
            return Ok(Database::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, db: &Database) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(db)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Load, apply a change and save
    fn update<T>(&self, change: impl FnOnce(&mut Database) -> T) -> anyhow::Result<T> {
        let _guard = self.write_lock.lock().map_err(|_| anyhow::anyhow!("store lock poisoned"))?;
        let mut db = self.load()?;
        let out = change(&mut db);
        self.save(&db)?;
        Ok(out)
    }
}

impl BriefStore for JsonFileStore {
    fn upsert_property(
        &self,
        address: &str,
        normalized_address: &str,
    ) -> anyhow::Result<Property> {
        self.update(|db| db.upsert_property(address, normalized_address))
    }

    fn property(&self, id: u64) -> anyhow::Result<Option<Property>> {
        Ok(self.load()?.properties.remove(&id))
    }

    fn properties(&self) -> anyhow::Result<Vec<Property>> {
        Ok(self.load()?.properties.into_values().collect())
    }

    fn replace_source_data(&self, property_id: u64, sources: &MergeInput) -> anyhow::Result<()> {
        self.update(|db| db.replace_source_data(property_id, sources))
    }

    fn source_data(&self, property_id: u64) -> anyhow::Result<Vec<SourceDatum>> {
        Ok(self.load()?.source_data(property_id))
    }

    fn save_brief(&self, brief: &Brief) -> anyhow::Result<()> {
        self.update(|db| db.save_brief(brief))
    }

    fn brief(&self, property_id: u64) -> anyhow::Result<Option<Brief>> {
        Ok(self.load()?.briefs.remove(&property_id))
    }

    fn add_contribution(
        &self,
        property_id: u64,
        submission: NewContribution,
    ) -> anyhow::Result<Contribution> {
        self.update(|db| db.add_contribution(property_id, submission))
    }

    fn contribution(&self, id: u64) -> anyhow::Result<Option<Contribution>> {
        Ok(self.load()?.contributions.remove(&id))
    }

    fn contributions(&self, property_id: u64) -> anyhow::Result<Vec<Contribution>> {
        Ok(self.load()?.contributions_for(property_id))
    }

    fn set_contribution_status(
        &self,
        id: u64,
        status: ContributionStatus,
    ) -> anyhow::Result<Option<Contribution>> {
        self.update(|db| db.set_contribution_status(id, status))
    }
}
