//! County assessor records: tax, assessed value, basic structure

use serde_json::json;

use super::StaticSourceProvider;

/// The county assessor provider
#[must_use]
pub fn county() -> StaticSourceProvider {
    StaticSourceProvider::new("county")
        .with_record(
            "123 main street",
            json!({
                "address": "123 Main Street",
                "square_feet": 2500,
                "bedrooms": 3,
                "bathrooms": 2,
                "year_built": 1995,
                "lot_size": "0.25 acres",
                "property_type": "Single Family",
                "tax_assessed_value": 450_000,
                "tax_year": 2024,
                "last_sale_date": "2020-03-15",
                "last_sale_price": 420_000
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
                "tax_assessed_value": 320_000,
                "tax_year": 2024,
                "last_sale_date": "2019-07-22",
                "last_sale_price": 310_000
            }),
        )
        .with_record(
            "789 pine drive",
            json!({
                "address": "789 Pine Drive",
                "square_feet": 3200,
                "bedrooms": 4,
                "bathrooms": 3,
                "year_built": 2010,
                "lot_size": "0.40 acres",
                "property_type": "Single Family",
                "tax_assessed_value": 680_000,
                "tax_year": 2024,
                "last_sale_date": "2022-11-08",
                "last_sale_price": 650_000
            }),
        )
}
