//! Narrative summary model

use serde::{Deserialize, Serialize};

/// Where a summary's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    /// Written by a language model
    Llm,
    /// Assembled locally from the brief's fields
    RuleBased,
}

impl std::fmt::Display for SummarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Llm => write!(f, "llm"),
            Self::RuleBased => write!(f, "rule_based"),
        }
    }
}

/// Why enrichment fell back to the rule-based summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackReason {
    /// Stable failure kind ("timeout", "rate_limited", ...)
    pub kind: String,

    /// Diagnostic message from the failure
    pub message: String,
}

/// A narrative summary of a brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text, never empty
    pub text: String,

    /// Which path produced the text
    pub source: SummarySource,

    /// Model name when the text came from a language model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Completeness score of the summarised brief
    pub completeness_score: u8,

    /// Set when a language model was attempted and failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}
