//! Narrative service port
//!
//! Language-model enrichment is best-effort. Failures come back as values,
//! never as panics, so the caller can fall back to a local summary.

use thiserror::Error;

/// Ways a narrative request can fail
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnrichmentError {
    /// The request did not finish within its time budget
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// Transport failure or unexpected HTTP status
    #[error("network error: {0}")]
    Network(String),

    /// The service refused the request due to rate limiting
    #[error("rate limited by narrative service")]
    RateLimited,

    /// The response body could not be understood
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response lacked an expected key
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// No service is configured (e.g. no API key)
    #[error("narrative service not configured: {0}")]
    NotConfigured(String),
}

impl EnrichmentError {
    /// Stable identifier for the failure kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "timeout",
            Self::Network(_) => "network",
            Self::RateLimited => "rate_limited",
            Self::MalformedResponse(_) => "malformed_response",
            Self::MissingField(_) => "missing_field",
            Self::NotConfigured(_) => "not_configured",
        }
    }
}

/// A service that turns a prompt into a short narrative
pub trait NarrativeService: Send + Sync {
    /// Model identifier reported alongside generated summaries
    fn model(&self) -> &str;

    /// Produce a narrative for the prompt
    ///
    /// Implementations must bound the call with a timeout.
    fn narrate(&self, prompt: &str) -> Result<String, EnrichmentError>;
}
