//! Brief store port
//!
//! Defines the interface for persisting properties, their fetched source
//! data, their current brief and user contributions.

use super::super::models::{
    Brief, Contribution, ContributionStatus, MergeInput, NewContribution, Property, SourceDatum,
};

/// Persistence for briefs and everything around them
///
/// Writes replace wholesale: saving a brief or a property's source data
/// discards whatever was stored before for that property.
pub trait BriefStore: Send + Sync {
    /// Insert a property, or touch the existing one with the same
    /// normalized address
    fn upsert_property(&self, address: &str, normalized_address: &str)
    -> anyhow::Result<Property>;

    /// Get a property by ID
    fn property(&self, id: u64) -> anyhow::Result<Option<Property>>;

    /// List all properties
    fn properties(&self) -> anyhow::Result<Vec<Property>>;

    /// Replace every stored source record for a property
    fn replace_source_data(&self, property_id: u64, sources: &MergeInput) -> anyhow::Result<()>;

    /// Get the stored source records for a property
    fn source_data(&self, property_id: u64) -> anyhow::Result<Vec<SourceDatum>>;

    /// Store a property's current brief
    fn save_brief(&self, brief: &Brief) -> anyhow::Result<()>;

    /// Get a property's current brief
    fn brief(&self, property_id: u64) -> anyhow::Result<Option<Brief>>;

    /// Record a new contribution, returning it with its assigned ID
    fn add_contribution(
        &self,
        property_id: u64,
        submission: NewContribution,
    ) -> anyhow::Result<Contribution>;

    /// Get a contribution by ID
    fn contribution(&self, id: u64) -> anyhow::Result<Option<Contribution>>;

    /// List contributions for a property, oldest first
    fn contributions(&self, property_id: u64) -> anyhow::Result<Vec<Contribution>>;

    /// Update a contribution's review status
    ///
    /// Returns `None` when no contribution has that ID.
    fn set_contribution_status(
        &self,
        id: u64,
        status: ContributionStatus,
    ) -> anyhow::Result<Option<Contribution>>;
}
