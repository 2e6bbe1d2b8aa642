//! Contribution model
//!
//! A contribution is a user's proposed correction to one field of a brief.
//! Contributions are recorded and reviewed but are not applied to
//! reconciliation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FieldValue;

/// Errors that can occur when parsing a contribution status
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Status string was not recognised
    #[error("invalid contribution status: {0}. Use: pending, accepted, rejected")]
    InvalidStatus(String),
}

/// Review state of a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    /// Awaiting review
    #[default]
    Pending,
    /// Reviewed and accepted
    Accepted,
    /// Reviewed and rejected
    Rejected,
}

impl std::fmt::Display for ContributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ContributionStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" | "accept" => Ok(Self::Accepted),
            "rejected" | "reject" => Ok(Self::Rejected),
            _ => Err(ParseError::InvalidStatus(s.to_string())),
        }
    }
}

/// A contribution as submitted, before the store assigns an identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContribution {
    /// Field the correction applies to
    pub field: String,

    /// Proposed replacement value
    pub proposed_value: FieldValue,

    /// Why the contributor believes the brief is wrong
    pub reason: String,

    /// Who submitted it
    pub contributor: String,
}

/// A stored contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Store-assigned identifier
    pub id: u64,

    /// Property the contribution targets
    pub property_id: u64,

    /// Field the correction applies to
    pub field: String,

    /// Proposed replacement value
    pub proposed_value: FieldValue,

    /// Why the contributor believes the brief is wrong
    pub reason: String,

    /// Who submitted it
    pub contributor: String,

    /// Review state
    pub status: ContributionStatus,

    /// When it was submitted
    pub created_at: DateTime<Utc>,
}

impl Contribution {
    /// Create a pending contribution from a submission
    #[must_use]
    pub fn new(id: u64, property_id: u64, submission: NewContribution) -> Self {
        Self {
            id,
            property_id,
            field: submission.field,
            proposed_value: submission.proposed_value,
            reason: submission.reason,
            contributor: submission.contributor,
            status: ContributionStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
