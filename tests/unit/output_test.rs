//! Tests for the Output module
//!
//! Result types render as human text or as JSON; these tests pin the JSON
//! shape scripts depend on.

use chrono::Utc;
use propbrief::api::{IngestData, PropertiesData, PropertyItem, ReconcileData, RefreshData};
use propbrief::core::models::{FallbackReason, MergedBrief, Property, Summary, SummarySource};
use propbrief::core::services::reconcile;
use propbrief::output::OutputMode;
use serde_json::json;

use crate::common::{record, sources};

fn property() -> Property {
    let now = Utc::now();
    Property {
        id: 1,
        address: "123 Main St".to_string(),
        normalized_address: "123 main street".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn ingest_data_serialization() {
    let data = IngestData {
        property: property(),
        completeness_score: 100,
        conflicts: 0,
        sources_used: vec!["county".to_string(), "listing".to_string()],
    };
    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["property"]["id"], 1);
    assert_eq!(value["property"]["normalized_address"], "123 main street");
    assert_eq!(value["completeness_score"], 100);
    assert_eq!(value["sources_used"], json!(["county", "listing"]));
}

#[test]
fn refresh_data_serialization() {
    let data = RefreshData {
        id: 4,
        refreshed_at: Utc::now(),
        completeness: 75,
        conflicts_count: 1,
    };
    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["id"], 4);
    assert_eq!(value["completeness"], 75);
    assert_eq!(value["conflicts_count"], 1);
    assert!(value["refreshed_at"].is_string());
}

#[test]
fn merged_brief_serialization_keeps_provenance_and_conflicts() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("square_feet", json!(100))])),
        ("listing", record(&[("square_feet", json!(106))])),
    ]));
    let data = ReconcileData {
        merged,
        completeness_score: 15,
    };
    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["merged"]["fields"]["square_feet"], 106);
    assert_eq!(value["merged"]["provenance"]["square_feet"], "listing");
    assert_eq!(value["merged"]["conflicts"][0]["values"]["county"], 100);
    assert_eq!(value["merged"]["sources_used"], json!(["county", "listing"]));
}

#[test]
fn empty_brief_serializes_empty_collections() {
    let value = serde_json::to_value(MergedBrief::empty()).unwrap();
    assert_eq!(value["fields"], json!({}));
    assert_eq!(value["conflicts"], json!([]));
}

#[test]
fn summary_serialization() {
    let plain = Summary {
        text: "This property at 9 Elm Road.".to_string(),
        source: SummarySource::RuleBased,
        model: None,
        completeness_score: 15,
        fallback: None,
    };
    let value = serde_json::to_value(&plain).unwrap();
    assert_eq!(value["source"], "rule_based");
    assert!(value.get("model").is_none());
    assert!(value.get("fallback").is_none());

    let fell_back = Summary {
        fallback: Some(FallbackReason {
            kind: "rate_limited".to_string(),
            message: "rate limited by narrative service".to_string(),
        }),
        ..plain
    };
    let value = serde_json::to_value(&fell_back).unwrap();
    assert_eq!(value["fallback"]["kind"], "rate_limited");
}

#[test]
fn properties_data_serialization() {
    let data = PropertiesData {
        properties: vec![PropertyItem {
            id: 2,
            address: "456 Oak Ave".to_string(),
            normalized_address: "456 oak avenue".to_string(),
            completeness_score: None,
        }],
    };
    let json = serde_json::to_string(&data).unwrap();
    assert!(json.contains("\"id\":2"));
    assert!(json.contains("456 oak avenue"));
}
