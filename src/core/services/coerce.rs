//! Value coercion helpers
//!
//! Field values are untyped. These helpers make the few type-sensitive
//! decisions the core needs without ever failing.

use crate::core::models::FieldValue;

/// Coerce a value to a finite float
///
/// Numbers coerce directly and strings are parsed after trimming. Anything
/// else, including unparsable strings, is non-comparable and yields `None`.
#[must_use]
pub fn as_number(value: &FieldValue) -> Option<f64> {
    let n = match value {
        FieldValue::Number(n) => n.as_f64()?,
        FieldValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Whether a value counts as present (only `null` is absent)
#[must_use]
pub fn is_present(value: &FieldValue) -> bool {
    !value.is_null()
}

/// Whether a value is worth mentioning in prose
///
/// Zero, empty strings and empty collections are present but not truthy.
#[must_use]
pub fn is_truthy(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => false,
        FieldValue::Bool(b) => *b,
        FieldValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        FieldValue::String(s) => !s.is_empty(),
        FieldValue::Array(a) => !a.is_empty(),
        FieldValue::Object(o) => !o.is_empty(),
    }
}

/// Render a value for human-facing text
///
/// Strings are shown without quotes; everything else uses its JSON form.
#[must_use]
pub fn display(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => s.clone(),
        FieldValue::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}
