//! Neighborhood enrichment: schools, walkability, commute
//!
//! Not part of the default priority table, so it only wins fields nobody
//! else reports.

use serde_json::json;

use super::StaticSourceProvider;

/// The neighborhood data provider
#[must_use]
pub fn neighborhood() -> StaticSourceProvider {
    StaticSourceProvider::new("neighborhood")
        .with_record(
            "123 main street",
            json!({
                "school_score": 8,
                "walkscore": 72,
                "crime_index": "low",
                "median_commute_mins": 24
            }),
        )
        .with_record(
            "456 oak avenue",
            json!({
                "school_score": 7,
                "walkscore": 65,
                "crime_index": "moderate",
                "median_commute_mins": 27
            }),
        )
        .with_record(
            "789 pine drive",
            json!({
                "school_score": 9,
                "walkscore": 80,
                "crime_index": "low",
                "median_commute_mins": 22
            }),
        )
}
