//! HOA registry records: fees, rules, amenities

use serde_json::json;

use super::StaticSourceProvider;

/// The HOA registry provider
#[must_use]
pub fn hoa() -> StaticSourceProvider {
    StaticSourceProvider::new("hoa")
        .with_record(
            "123 main street",
            json!({
                "address": "123 Main Street",
                "hoa_name": "Main Street Community Association",
                "hoa_fee": 0,
                "hoa_fee_frequency": "N/A",
                "hoa_contact": "N/A",
                "amenities": [],
                "restrictions": []
            }),
        )
        .with_record(
            "456 oak avenue",
            json!({
                "address": "456 Oak Avenue",
                "hoa_name": "Oak Gardens Condo Association",
                "hoa_fee": 285,
                "hoa_fee_frequency": "monthly",
                "hoa_contact": "oakgardens@hoa.com",
                "amenities": ["Pool", "Fitness Center", "Parking Garage"],
                "restrictions": ["No pets over 25lbs", "Rental restrictions apply"],
                "special_assessments": [
                    {"date": "2024-01-15", "amount": 1200, "reason": "Roof replacement"}
                ]
            }),
        )
        .with_record(
            "789 pine drive",
            json!({
                "address": "789 Pine Drive",
                "hoa_name": "Pine Ridge Homeowners Association",
                "hoa_fee": 150,
                "hoa_fee_frequency": "monthly",
                "hoa_contact": "pineridge@hoa.com",
                "amenities": ["Community Pool", "Tennis Courts", "Walking Trails"],
                "restrictions": ["Architectural approval required", "No commercial vehicles"],
                "special_assessments": []
            }),
        )
}
