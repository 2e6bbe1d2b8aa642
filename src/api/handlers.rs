//! Pure API handlers
//!
//! These handlers run the ingest/refresh workflow around the pure core and
//! are HTTP-agnostic. They take typed input and return `Result<T, ApiError>`.

use chrono::Utc;

use super::context::Context;
use super::error::{ApiError, Resource};
use super::types::{
    BriefData, ContributionsData, CreateContributionRequest, IngestData, IngestRequest,
    PropertiesData, PropertyItem, ReconcileData, RefreshData, ReviewContributionRequest,
    SourcesData, SummaryRequest,
};
use crate::core::models::{
    Brief, Contribution, ContributionStatus, MergeInput, NewContribution, Property, Summary,
};
use crate::core::services::summarize;

// =============================================================================
// INGEST / REFRESH
// =============================================================================

/// Ingest an address: fetch every source, merge, score and store the brief
pub fn ingest(ctx: &Context, req: &IngestRequest) -> Result<IngestData, ApiError> {
    let address = req.address.trim();
    if address.is_empty() {
        return Err(ApiError::invalid("Address cannot be empty"));
    }

    let normalized = ctx.normalizer().normalize(address);
    if normalized.is_empty() {
        return Err(ApiError::invalid("Address has no usable content"));
    }

    let property = ctx.store().upsert_property(address, &normalized)?;
    log::info!("ingesting property {} ({normalized})", property.id);

    let brief = rebuild(ctx, &property)?;
    Ok(IngestData {
        property,
        completeness_score: brief.completeness_score,
        conflicts: brief.merged.conflicts.len(),
        sources_used: brief.merged.sources_used.into_iter().collect(),
    })
}

/// Re-fetch every source for a known property and replace its brief
pub fn refresh(ctx: &Context, property_id: u64) -> Result<RefreshData, ApiError> {
    let property = require_property(ctx, property_id)?;
    log::info!("refreshing property {property_id}");

    let brief = rebuild(ctx, &property)?;
    Ok(RefreshData {
        id: property_id,
        refreshed_at: Utc::now(),
        completeness: brief.completeness_score,
        conflicts_count: brief.merged.conflicts.len(),
    })
}

/// Query every provider; failures and misses are both treated as absent
#[must_use]
pub fn fetch_sources(ctx: &Context, normalized_key: &str) -> MergeInput {
    let mut sources = MergeInput::new();
    for provider in ctx.providers() {
        match provider.fetch(normalized_key) {
            Ok(Some(record)) => {
                log::debug!("{}: {} field(s)", provider.name(), record.len());
                sources.insert(provider.name().to_string(), record);
            },
            Ok(None) => log::debug!("{}: no data for '{normalized_key}'", provider.name()),
            Err(e) => log::warn!("{}: fetch failed, skipping: {e:#}", provider.name()),
        }
    }
    sources
}

fn rebuild(ctx: &Context, property: &Property) -> Result<Brief, ApiError> {
    let sources = fetch_sources(ctx, &property.normalized_address);
    ctx.store().replace_source_data(property.id, &sources)?;

    let merged = ctx.reconciler().reconcile(&sources);
    let brief = Brief {
        property_id: property.id,
        completeness_score: ctx.scorer().score(&merged.fields),
        merged,
    };
    ctx.store().save_brief(&brief)?;

    if !brief.merged.conflicts.is_empty() {
        log::info!(
            "property {}: {} conflict(s) flagged",
            property.id,
            brief.merged.conflicts.len()
        );
    }
    Ok(brief)
}

/// Reconcile and score caller-supplied records without touching the store
#[must_use]
pub fn reconcile_sources(ctx: &Context, sources: &MergeInput) -> ReconcileData {
    let merged = ctx.reconciler().reconcile(sources);
    ReconcileData {
        completeness_score: ctx.scorer().score(&merged.fields),
        merged,
    }
}

// =============================================================================
// READS
// =============================================================================

/// Get a property's current brief
pub fn get_brief(ctx: &Context, property_id: u64) -> Result<BriefData, ApiError> {
    let property = require_property(ctx, property_id)?;
    let brief = require_brief(ctx, property_id)?;
    let missing_fields =
        ctx.scorer().missing(&brief.merged.fields).into_iter().map(String::from).collect();

    Ok(BriefData {
        property,
        brief,
        missing_fields,
    })
}

/// Get the raw source records stored for a property
pub fn get_sources(ctx: &Context, property_id: u64) -> Result<SourcesData, ApiError> {
    require_property(ctx, property_id)?;
    Ok(SourcesData {
        property_id,
        sources: ctx.store().source_data(property_id)?,
    })
}

/// List every known property with its current score
pub fn list_properties(ctx: &Context) -> Result<PropertiesData, ApiError> {
    let properties = ctx
        .store()
        .properties()?
        .into_iter()
        .map(|p| -> anyhow::Result<PropertyItem> {
            let completeness_score = ctx.store().brief(p.id)?.map(|b| b.completeness_score);
            Ok(PropertyItem {
                id: p.id,
                address: p.address,
                normalized_address: p.normalized_address,
                completeness_score,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(PropertiesData { properties })
}

// =============================================================================
// CONTRIBUTIONS
// =============================================================================

/// Record a user-submitted correction (pending review)
pub fn create_contribution(
    ctx: &Context,
    property_id: u64,
    req: &CreateContributionRequest,
) -> Result<Contribution, ApiError> {
    require_property(ctx, property_id)?;

    let field = req.field.trim();
    if field.is_empty() {
        return Err(ApiError::invalid("Contribution field cannot be empty"));
    }
    let contributor = req.contributor.trim();
    if contributor.is_empty() {
        return Err(ApiError::invalid("Contributor cannot be empty"));
    }

    let contribution = ctx.store().add_contribution(
        property_id,
        NewContribution {
            field: field.to_string(),
            proposed_value: req.proposed_value.clone(),
            reason: req.reason.trim().to_string(),
            contributor: contributor.to_string(),
        },
    )?;
    log::info!("contribution {} on property {property_id} ({field})", contribution.id);
    Ok(contribution)
}

/// List a property's contributions
pub fn list_contributions(ctx: &Context, property_id: u64) -> Result<ContributionsData, ApiError> {
    require_property(ctx, property_id)?;
    Ok(ContributionsData {
        property_id,
        contributions: ctx.store().contributions(property_id)?,
    })
}

/// Accept or reject a pending contribution
///
/// Review only records the decision; accepted values are not merged.
pub fn review_contribution(
    ctx: &Context,
    contribution_id: u64,
    req: &ReviewContributionRequest,
) -> Result<Contribution, ApiError> {
    let status = req
        .status
        .parse::<ContributionStatus>()
        .map_err(|e| ApiError::invalid(e.to_string()))?;
    if status == ContributionStatus::Pending {
        return Err(ApiError::invalid("Review status must be accepted or rejected"));
    }

    let current = ctx
        .store()
        .contribution(contribution_id)?
        .ok_or_else(|| ApiError::missing(Resource::Contribution, contribution_id))?;
    if current.status != ContributionStatus::Pending {
        return Err(ApiError::conflict(format!(
            "Contribution {contribution_id} was already {}",
            current.status
        )));
    }

    ctx.store()
        .set_contribution_status(contribution_id, status)?
        .ok_or_else(|| ApiError::missing(Resource::Contribution, contribution_id))
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Narrative summary of a property's brief
///
/// Enrichment failures never surface here; they come back as a rule-based
/// summary with [`Summary::fallback`] set.
pub fn summary(ctx: &Context, property_id: u64, req: &SummaryRequest) -> Result<Summary, ApiError> {
    require_property(ctx, property_id)?;
    let brief = require_brief(ctx, property_id)?;
    Ok(summarize(&brief, ctx.narrator(), req.prompt_override.as_deref()))
}

// =============================================================================
// HELPERS
// =============================================================================

fn require_property(ctx: &Context, id: u64) -> Result<Property, ApiError> {
    ctx.store().property(id)?.ok_or_else(|| ApiError::missing(Resource::Property, id))
}

fn require_brief(ctx: &Context, property_id: u64) -> Result<Brief, ApiError> {
    ctx.store()
        .brief(property_id)?
        .ok_or_else(|| ApiError::missing(Resource::Brief, property_id))
}
