//! Listing service records: asking price, agent, market data

use serde_json::json;

use super::StaticSourceProvider;

/// The listing service provider
#[must_use]
pub fn listing() -> StaticSourceProvider {
    StaticSourceProvider::new("listing")
        .with_record(
            "123 main street",
            json!({
                "address": "123 Main Street",
                "square_feet": 2600,
                "bedrooms": 3,
                "bathrooms": 2.5,
                "year_built": 1995,
                "lot_size": "0.25 acres",
                "property_type": "Single Family",
                "listing_price": 485_000,
                "days_on_market": 12,
                "listing_date": "2024-09-15",
                "agent_name": "Sarah Johnson",
                "mls_number": "MLS123456",
                "description": "Beautiful family home with updated kitchen"
            }),
        )
        .with_record(
            "456 oak avenue",
            json!({
                "address": "456 Oak Avenue",
                "square_feet": 1800,
                "bedrooms": 2,
                "bathrooms": 2,
                "year_built": 1988,
                "lot_size": "0.20 acres",
                "property_type": "Condo",
                "listing_price": 345_000,
                "days_on_market": 45,
                "listing_date": "2024-08-01",
                "agent_name": "Mike Chen",
                "mls_number": "MLS789012",
                "description": "Modern condo with city views"
            }),
        )
        .with_record(
            "789 pine drive",
            json!({
                "address": "789 Pine Drive",
                "square_feet": 3100,
                "bedrooms": 4,
                "bathrooms": 3.5,
                "year_built": 2010,
                "lot_size": "0.42 acres",
                "property_type": "Single Family",
                "listing_price": 725_000,
                "days_on_market": 8,
                "listing_date": "2024-09-20",
                "agent_name": "Lisa Rodriguez",
                "mls_number": "MLS345678",
                "description": "Stunning contemporary home with pool"
            }),
        )
}
