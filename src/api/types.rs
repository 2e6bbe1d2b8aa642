//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::core::models::{
    Brief, Contribution, FieldValue, MergedBrief, Property, SourceDatum,
};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wrap a handler result
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self {
                success: false,
                data: None,
                error: Some(ApiErrorData::from(&e)),
            },
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for ingesting an address
#[derive(Debug, Clone, Deserialize)]
pub struct IngestRequest {
    /// Raw address as entered by the user
    pub address: String,
}

/// Request body for submitting a contribution
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContributionRequest {
    /// Field to correct
    pub field: String,
    /// Proposed value
    pub proposed_value: FieldValue,
    /// Why the current value is wrong
    #[serde(default)]
    pub reason: String,
    /// Who is submitting
    pub contributor: String,
}

/// Request body for reviewing a contribution
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewContributionRequest {
    /// New status ("accepted" or "rejected")
    pub status: String,
}

/// Request body for a narrative summary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    /// Replace the default prompt
    #[serde(default)]
    pub prompt_override: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Ingest response data
#[derive(Debug, Serialize)]
pub struct IngestData {
    /// The ingested property
    pub property: Property,
    /// Completeness score of the new brief
    pub completeness_score: u8,
    /// Number of conflicts detected
    pub conflicts: usize,
    /// Sources that contributed fields
    pub sources_used: Vec<String>,
}

/// Refresh response data
#[derive(Debug, Serialize)]
pub struct RefreshData {
    /// Property ID
    pub id: u64,
    /// When the refresh completed
    pub refreshed_at: DateTime<Utc>,
    /// Completeness score of the new brief
    pub completeness: u8,
    /// Number of conflicts detected
    pub conflicts_count: usize,
}

/// Brief response data
#[derive(Debug, Serialize)]
pub struct BriefData {
    /// The property
    pub property: Property,
    /// Its current brief
    pub brief: Brief,
    /// Scored fields the brief lacks
    pub missing_fields: Vec<String>,
}

/// Source data response
#[derive(Debug, Serialize)]
pub struct SourcesData {
    /// Property ID
    pub property_id: u64,
    /// Stored records, one per source
    pub sources: Vec<SourceDatum>,
}

/// Single property in a list
#[derive(Debug, Serialize)]
pub struct PropertyItem {
    /// Property ID
    pub id: u64,
    /// Address as first submitted
    pub address: String,
    /// Normalized lookup key
    pub normalized_address: String,
    /// Current completeness score, if a brief exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completeness_score: Option<u8>,
}

/// Property list response
#[derive(Debug, Serialize)]
pub struct PropertiesData {
    /// Known properties
    pub properties: Vec<PropertyItem>,
}

/// Contribution list response
#[derive(Debug, Serialize)]
pub struct ContributionsData {
    /// Property ID
    pub property_id: u64,
    /// Contributions, oldest first
    pub contributions: Vec<Contribution>,
}

/// Pure reconciliation response
#[derive(Debug, Serialize)]
pub struct ReconcileData {
    /// The merged brief
    pub merged: MergedBrief,
    /// Its completeness score
    pub completeness_score: u8,
}
