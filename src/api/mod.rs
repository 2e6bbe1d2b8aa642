//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers for
//! the ingest, refresh, brief, contribution and summary workflows. Any HTTP
//! server, or the CLI directly, can drive them.
//!
//! ## Design
//!
//! - **Handlers orchestrate, the core decides**: fetching, persistence and
//!   enrichment go through [`Context`]; merging and scoring stay pure
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod context;
mod error;
mod handlers;
mod types;

pub use context::Context;
pub use error::{ApiError, ApiErrorData, ErrorCode, Resource};
pub use handlers::{
    create_contribution, fetch_sources, get_brief, get_sources, ingest, list_contributions,
    list_properties, reconcile_sources, refresh, review_contribution, summary,
};
pub use types::{
    ApiResponse, BriefData, ContributionsData, CreateContributionRequest, IngestData,
    IngestRequest, PropertiesData, PropertyItem, ReconcileData, RefreshData,
    ReviewContributionRequest, SourcesData, SummaryRequest,
};
