//! Tests for the API handlers
//!
//! Handlers are driven with an in-memory store so each test starts from a
//! clean slate.

use std::sync::atomic::Ordering;

use propbrief::adapters::{MemoryStore, StaticSourceProvider, default_providers};
use propbrief::api::{
    self, ApiResponse, Context, CreateContributionRequest, ErrorCode, IngestRequest,
    ReviewContributionRequest, SummaryRequest,
};
use propbrief::core::models::{ContributionStatus, SummarySource};
use propbrief::core::ports::{AddressNormalizer, EnrichmentError, SourceProvider};
use serde_json::json;

use crate::common::{FailingProvider, ScriptedNarrator, ToggleProvider, record};

/// Keys addresses as upper-case, dash-joined parcel IDs
struct ParcelNormalizer;

impl AddressNormalizer for ParcelNormalizer {
    fn normalize(&self, raw_address: &str) -> String {
        raw_address.split_whitespace().collect::<Vec<_>>().join("-").to_uppercase()
    }
}

fn context() -> Context {
    Context::new(Box::new(MemoryStore::new()))
}

fn ingest(ctx: &Context, address: &str) -> u64 {
    api::ingest(
        ctx,
        &IngestRequest {
            address: address.to_string(),
        },
    )
    .expect("ingest succeeds")
    .property
    .id
}

fn contribution_request(field: &str) -> CreateContributionRequest {
    CreateContributionRequest {
        field: field.to_string(),
        proposed_value: json!(2700),
        reason: "Measured it myself".to_string(),
        contributor: "alex@example.com".to_string(),
    }
}

fn review(status: &str) -> ReviewContributionRequest {
    ReviewContributionRequest {
        status: status.to_string(),
    }
}

// =============================================================================
// INGEST
// =============================================================================

#[test]
fn test_ingest_known_address() {
    let ctx = context();
    let data = api::ingest(
        &ctx,
        &IngestRequest {
            address: "123 Main St".to_string(),
        },
    )
    .unwrap();

    assert_eq!(data.property.id, 1);
    assert_eq!(data.property.address, "123 Main St");
    assert_eq!(data.property.normalized_address, "123 main street");
    assert_eq!(data.completeness_score, 100);
    assert!(data.sources_used.contains(&"county".to_string()));
    assert!(data.sources_used.contains(&"listing".to_string()));
}

#[test]
fn test_ingest_prefers_listing_values() {
    let ctx = context();
    let id = ingest(&ctx, "123 Main St");
    let brief = api::get_brief(&ctx, id).unwrap().brief;

    assert_eq!(brief.merged.fields["square_feet"], json!(2600));
    assert_eq!(brief.merged.provenance["square_feet"], "listing");
    assert_eq!(brief.merged.provenance["tax_assessed_value"], "county");
    assert_eq!(brief.merged.provenance["hoa_fee"], "hoa");
}

#[test]
fn test_ingest_same_address_twice_reuses_property() {
    let ctx = context();
    let first = ingest(&ctx, "123 Main St");
    let second = ingest(&ctx, "123 main street");
    assert_eq!(first, second);
    assert_eq!(api::list_properties(&ctx).unwrap().properties.len(), 1);
}

#[test]
fn test_ingest_unknown_address_gives_empty_brief() {
    let ctx = context();
    let data = api::ingest(
        &ctx,
        &IngestRequest {
            address: "1 Nowhere Ln".to_string(),
        },
    )
    .unwrap();

    assert_eq!(data.completeness_score, 0);
    assert_eq!(data.conflicts, 0);
    assert!(data.sources_used.is_empty());
    assert!(api::get_brief(&ctx, data.property.id).unwrap().brief.merged.is_empty());
}

#[test]
fn test_ingest_blank_address_rejected() {
    let ctx = context();
    let err = api::ingest(
        &ctx,
        &IngestRequest {
            address: "   ".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert_eq!(err.code.status_code(), 400);
}

#[test]
fn test_custom_normalizer_drives_lookup_key() {
    let providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(
        StaticSourceProvider::new("county").with_record("PARCEL-7", json!({"bedrooms": 4})),
    )];
    let ctx = context()
        .with_providers(providers)
        .with_normalizer(Box::new(ParcelNormalizer));

    let data = api::ingest(
        &ctx,
        &IngestRequest {
            address: "parcel 7".to_string(),
        },
    )
    .unwrap();
    assert_eq!(data.property.normalized_address, "PARCEL-7");
    assert_eq!(data.completeness_score, 15);
}

#[test]
fn test_failing_provider_is_skipped() {
    let mut providers: Vec<Box<dyn SourceProvider>> = default_providers();
    providers.insert(0, Box::new(FailingProvider("flaky")));
    let ctx = context().with_providers(providers);

    let id = ingest(&ctx, "123 Main St");
    let brief = api::get_brief(&ctx, id).unwrap().brief;
    assert_eq!(brief.completeness_score, 100);
    assert!(!brief.merged.sources_used.contains("flaky"));
}

#[test]
fn test_square_footage_conflict_is_reported() {
    let providers: Vec<Box<dyn SourceProvider>> = vec![
        Box::new(
            StaticSourceProvider::new("county")
                .with_record("9 elm road", json!({"square_feet": 1000})),
        ),
        Box::new(
            StaticSourceProvider::new("listing")
                .with_record("9 elm road", json!({"square_feet": 1200})),
        ),
    ];
    let ctx = context().with_providers(providers);

    let data = api::ingest(
        &ctx,
        &IngestRequest {
            address: "9 Elm Rd".to_string(),
        },
    )
    .unwrap();
    assert_eq!(data.conflicts, 1);

    let brief = api::get_brief(&ctx, data.property.id).unwrap().brief;
    assert_eq!(brief.merged.fields["square_feet"], json!(1200));
    assert_eq!(brief.merged.conflicts[0].field, "square_feet");
}

// =============================================================================
// REFRESH
// =============================================================================

#[test]
fn test_refresh_drops_stale_provenance() {
    let county = ToggleProvider::new(
        "county",
        record(&[("address", json!("9 Elm Road")), ("tax_year", json!(2024))]),
    );
    let switch = county.switch();
    let hoa = ToggleProvider::new("hoa", record(&[("hoa_fee", json!(75))]));
    let ctx = context().with_providers(vec![Box::new(county), Box::new(hoa)]);

    let id = ingest(&ctx, "9 Elm Road");
    let before = api::get_brief(&ctx, id).unwrap().brief;
    assert_eq!(before.merged.provenance["tax_year"], "county");

    switch.store(false, Ordering::SeqCst);
    let refreshed = api::refresh(&ctx, id).unwrap();
    assert_eq!(refreshed.id, id);
    assert_eq!(refreshed.completeness, 5);

    let after = api::get_brief(&ctx, id).unwrap().brief;
    assert!(!after.merged.fields.contains_key("tax_year"));
    assert!(!after.merged.provenance.contains_key("address"));
    assert_eq!(after.merged.sources_used.len(), 1);

    let sources = api::get_sources(&ctx, id).unwrap().sources;
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].source_name, "hoa");
}

#[test]
fn test_refresh_unknown_property_is_not_found() {
    let ctx = context();
    let err = api::refresh(&ctx, 42).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

// =============================================================================
// READS
// =============================================================================

#[test]
fn test_brief_lists_missing_fields() {
    let providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(
        StaticSourceProvider::new("hoa").with_record("9 elm road", json!({"hoa_fee": 75})),
    )];
    let ctx = context().with_providers(providers);
    let id = ingest(&ctx, "9 Elm Road");

    let data = api::get_brief(&ctx, id).unwrap();
    assert_eq!(data.brief.completeness_score, 5);
    assert!(data.missing_fields.contains(&"address".to_string()));
    assert!(!data.missing_fields.contains(&"hoa_fee".to_string()));
}

#[test]
fn test_brief_for_missing_property() {
    let ctx = context();
    let err = api::get_brief(&ctx, 7).unwrap_err();
    assert_eq!(err.code.status_code(), 404);
    assert!(err.message.contains('7'));
}

#[test]
fn test_sources_are_stored_per_provider() {
    let ctx = context();
    let id = ingest(&ctx, "456 Oak Ave");
    let data = api::get_sources(&ctx, id).unwrap();
    assert_eq!(data.property_id, id);
    let names: Vec<&str> = data.sources.iter().map(|s| s.source_name.as_str()).collect();
    assert!(names.contains(&"county"));
    assert!(names.contains(&"listing"));
}

#[test]
fn test_list_properties_reports_scores() {
    let ctx = context();
    ingest(&ctx, "123 Main St");
    ingest(&ctx, "1 Nowhere Ln");

    let listed = api::list_properties(&ctx).unwrap().properties;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].completeness_score, Some(100));
    assert_eq!(listed[1].completeness_score, Some(0));
}

#[test]
fn test_reconcile_sources_bypasses_store() {
    let ctx = context();
    let input = crate::common::sources(&[
        ("county", record(&[("square_feet", json!(100))])),
        ("listing", record(&[("square_feet", json!(106))])),
    ]);
    let data = api::reconcile_sources(&ctx, &input);
    assert_eq!(data.merged.conflicts.len(), 1);
    assert_eq!(data.completeness_score, 15);
    assert!(api::list_properties(&ctx).unwrap().properties.is_empty());
}

// =============================================================================
// CONTRIBUTIONS
// =============================================================================

#[test]
fn test_contribution_lifecycle() {
    let ctx = context();
    let id = ingest(&ctx, "123 Main St");

    let created = api::create_contribution(&ctx, id, &contribution_request("square_feet")).unwrap();
    assert_eq!(created.status, ContributionStatus::Pending);
    assert_eq!(created.property_id, id);

    let listed = api::list_contributions(&ctx, id).unwrap();
    assert_eq!(listed.contributions.len(), 1);

    let accepted = api::review_contribution(&ctx, created.id, &review("accepted")).unwrap();
    assert_eq!(accepted.status, ContributionStatus::Accepted);

    let again = api::review_contribution(&ctx, created.id, &review("rejected")).unwrap_err();
    assert_eq!(again.code, ErrorCode::Conflict);
    assert_eq!(again.status_code(), 409);
}

#[test]
fn test_accepted_contribution_does_not_change_brief() {
    let ctx = context();
    let id = ingest(&ctx, "123 Main St");
    let created = api::create_contribution(&ctx, id, &contribution_request("square_feet")).unwrap();
    api::review_contribution(&ctx, created.id, &review("accept")).unwrap();
    api::refresh(&ctx, id).unwrap();

    let brief = api::get_brief(&ctx, id).unwrap().brief;
    assert_eq!(brief.merged.fields["square_feet"], json!(2600));
}

#[test]
fn test_contribution_validation() {
    let ctx = context();
    let id = ingest(&ctx, "123 Main St");

    let blank_field = api::create_contribution(&ctx, id, &contribution_request(" ")).unwrap_err();
    assert_eq!(blank_field.code, ErrorCode::BadRequest);

    let mut anonymous = contribution_request("bedrooms");
    anonymous.contributor = String::new();
    assert_eq!(
        api::create_contribution(&ctx, id, &anonymous).unwrap_err().code,
        ErrorCode::BadRequest
    );

    let unknown = api::create_contribution(&ctx, 99, &contribution_request("bedrooms")).unwrap_err();
    assert_eq!(unknown.code, ErrorCode::NotFound);
}

#[test]
fn test_review_rejects_bad_status_and_unknown_id() {
    let ctx = context();
    let id = ingest(&ctx, "123 Main St");
    let created = api::create_contribution(&ctx, id, &contribution_request("bedrooms")).unwrap();

    let bogus = api::review_contribution(&ctx, created.id, &review("maybe")).unwrap_err();
    assert_eq!(bogus.code, ErrorCode::BadRequest);

    let pending = api::review_contribution(&ctx, created.id, &review("pending")).unwrap_err();
    assert_eq!(pending.code, ErrorCode::BadRequest);

    let missing = api::review_contribution(&ctx, 500, &review("accepted")).unwrap_err();
    assert_eq!(missing.code, ErrorCode::NotFound);
}

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn test_summary_without_narrator_is_rule_based() {
    let ctx = context();
    let id = ingest(&ctx, "123 Main St");
    let summary = api::summary(&ctx, id, &SummaryRequest::default()).unwrap();

    assert_eq!(summary.source, SummarySource::RuleBased);
    assert!(summary.text.contains("123 Main Street"));
    assert_eq!(summary.completeness_score, 100);
}

#[test]
fn test_summary_uses_narrator() {
    let ctx = context().with_narrator(Box::new(ScriptedNarrator(Ok("Nice house.".to_string()))));
    let id = ingest(&ctx, "123 Main St");
    let summary = api::summary(&ctx, id, &SummaryRequest::default()).unwrap();

    assert_eq!(summary.source, SummarySource::Llm);
    assert_eq!(summary.text, "Nice house.");
}

#[test]
fn test_summary_survives_narrator_failure() {
    let ctx = context().with_narrator(Box::new(ScriptedNarrator(Err(EnrichmentError::Timeout(10)))));
    let id = ingest(&ctx, "123 Main St");
    let before = api::get_brief(&ctx, id).unwrap().brief;

    let summary = api::summary(&ctx, id, &SummaryRequest::default()).unwrap();
    assert_eq!(summary.source, SummarySource::RuleBased);
    assert_eq!(summary.fallback.unwrap().kind, "timeout");
    assert_eq!(api::get_brief(&ctx, id).unwrap().brief, before);
}

#[test]
fn test_summary_for_missing_property() {
    let ctx = context();
    let err = api::summary(&ctx, 3, &SummaryRequest::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

#[test]
fn test_response_envelope_wraps_errors() {
    let ctx = context();
    let response = ApiResponse::from_result(api::get_brief(&ctx, 1));
    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error.unwrap().code, "NOT_FOUND");
}
