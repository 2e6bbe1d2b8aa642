//! Narrative summary service
//!
//! Produces a short prose summary of a brief. When a [`NarrativeService`]
//! is available it is asked first; any failure falls back to a summary
//! assembled locally from the brief's fields, with the failure kept as
//! diagnostic metadata. The brief itself is only ever read.

use std::collections::BTreeMap;

use super::coerce;
use crate::core::models::{Brief, FallbackReason, FieldValue, Summary, SummarySource};
use crate::core::ports::{EnrichmentError, NarrativeService};

/// Text used when the brief has nothing worth describing
pub const EMPTY_SUMMARY: &str = "No property details available.";

const PROMPT_FIELDS: [(&str, &str); 6] = [
    ("Address", "address"),
    ("Square Feet", "square_feet"),
    ("Bedrooms", "bedrooms"),
    ("Bathrooms", "bathrooms"),
    ("Year Built", "year_built"),
    ("Property Type", "property_type"),
];

/// Build the default language-model prompt for a field map
#[must_use]
pub fn build_prompt(fields: &BTreeMap<String, FieldValue>) -> String {
    let mut prompt = String::from("Summarize this property data in 2-3 sentences:\n");
    for (label, key) in PROMPT_FIELDS {
        let value = fields.get(key).map_or_else(|| "N/A".to_string(), coerce::display);
        prompt.push_str(&format!("{label}: {value}\n"));
    }
    prompt
}

/// Summarise a field map without any external service
///
/// Always returns non-empty text. Mentions the address when present.
#[must_use]
pub fn rule_based_summary(fields: &BTreeMap<String, FieldValue>) -> String {
    let truthy = |key: &str| fields.get(key).filter(|v| coerce::is_truthy(v));
    let mut parts = Vec::new();

    if let Some(address) = truthy("address") {
        let kind = truthy("property_type").map_or_else(|| "property".to_string(), coerce::display);
        parts.push(format!("This {kind} at {}", coerce::display(address)));
    }

    if let (Some(sqft), Some(beds), Some(baths)) =
        (truthy("square_feet"), truthy("bedrooms"), truthy("bathrooms"))
    {
        parts.push(format!(
            "features {} sq ft with {} bedrooms and {} bathrooms",
            coerce::display(sqft),
            coerce::display(beds),
            coerce::display(baths)
        ));
    }

    if let Some(year) = truthy("year_built") {
        parts.push(format!("built in {}", coerce::display(year)));
    }

    if let Some(fee) = truthy("hoa_fee") {
        parts.push(format!("with ${} monthly HOA fee", coerce::display(fee)));
    }

    if parts.is_empty() {
        EMPTY_SUMMARY.to_string()
    } else {
        format!("{}.", parts.join(". "))
    }
}

/// Summarise a brief, preferring the narrator and falling back locally
///
/// Never fails. Without a narrator the rule-based text is returned with no
/// fallback reason; with one, any [`EnrichmentError`] (including an empty
/// narrative) is recorded in [`Summary::fallback`].
#[must_use]
pub fn summarize(
    brief: &Brief,
    narrator: Option<&dyn NarrativeService>,
    prompt_override: Option<&str>,
) -> Summary {
    let fields = &brief.merged.fields;

    let Some(narrator) = narrator else {
        return rule_based(brief, None);
    };

    let prompt = prompt_override.map_or_else(|| build_prompt(fields), str::to_string);
    let outcome = narrator.narrate(&prompt).and_then(|text| {
        let text = text.trim();
        if text.is_empty() {
            Err(EnrichmentError::MalformedResponse("empty narrative".to_string()))
        } else {
            Ok(text.to_string())
        }
    });

    match outcome {
        Ok(text) => Summary {
            text,
            source: SummarySource::Llm,
            model: Some(narrator.model().to_string()),
            completeness_score: brief.completeness_score,
            fallback: None,
        },
        Err(e) => {
            log::warn!("narrative enrichment failed ({}), using rule-based summary: {e}", e.kind());
            rule_based(
                brief,
                Some(FallbackReason {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                }),
            )
        },
    }
}

fn rule_based(brief: &Brief, fallback: Option<FallbackReason>) -> Summary {
    Summary {
        text: rule_based_summary(&brief.merged.fields),
        source: SummarySource::RuleBased,
        model: None,
        completeness_score: brief.completeness_score,
        fallback,
    }
}
