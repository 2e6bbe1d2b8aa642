//! Tests for the reconciler
//!
//! Covers priority selection, provenance, conflict detection and the
//! purity guarantees callers rely on when re-running a merge.

use propbrief::core::models::MergeInput;
use propbrief::core::services::{ConflictRule, ReconcileConfig, Reconciler, reconcile};
use serde_json::json;

use crate::common::{record, sources};

// =============================================================================
// PRIORITY AND PROVENANCE
// =============================================================================

#[test]
fn listing_beats_county() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("x", json!(1))])),
        ("listing", record(&[("x", json!(2))])),
    ]));
    assert_eq!(merged.fields["x"], json!(2));
    assert_eq!(merged.provenance["x"], "listing");
}

#[test]
fn county_beats_hoa() {
    let merged = reconcile(&sources(&[
        ("hoa", record(&[("address", json!("123 Main St"))])),
        ("county", record(&[("address", json!("123 Main Street"))])),
    ]));
    assert_eq!(merged.fields["address"], json!("123 Main Street"));
    assert_eq!(merged.provenance["address"], "county");
}

#[test]
fn single_source_passthrough() {
    let merged = reconcile(&sources(&[("hoa", record(&[("hoa_fee", json!(150))]))]));
    assert_eq!(merged.get("hoa_fee"), Some(&json!(150)));
    assert_eq!(merged.get("bedrooms"), None);
    assert_eq!(merged.provenance["hoa_fee"], "hoa");
}

#[test]
fn provenance_names_a_source_with_that_exact_value() {
    let input = sources(&[
        ("county", record(&[("a", json!(1)), ("b", json!("c")), ("c", json!([1, 2]))])),
        ("listing", record(&[("a", json!(2)), ("d", json!({"k": "v"}))])),
        ("hoa", record(&[("b", json!("h")), ("e", json!(false))])),
        ("neighborhood", record(&[("e", json!(true)), ("f", json!(0))])),
    ]);
    let merged = reconcile(&input);

    assert_eq!(merged.fields.len(), merged.provenance.len());
    for (field, value) in &merged.fields {
        let source = &merged.provenance[field];
        assert_eq!(&input[source][field], value, "provenance of {field} points at {source}");
    }
}

#[test]
fn every_present_field_survives() {
    let input = sources(&[
        ("county", record(&[("a", json!(1)), ("shared", json!(1))])),
        ("listing", record(&[("b", json!(2)), ("shared", json!(2))])),
        ("mystery", record(&[("c", json!(3))])),
    ]);
    let merged = reconcile(&input);
    for field in ["a", "b", "c", "shared"] {
        assert!(merged.fields.contains_key(field), "{field} was dropped");
    }
    assert_eq!(merged.fields.len(), 4);
}

#[test]
fn sources_used_lists_contributing_sources() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("a", json!(1))])),
        ("listing", record(&[])),
        ("hoa", record(&[("b", json!(null))])),
    ]));
    assert_eq!(merged.sources_used.iter().collect::<Vec<_>>(), vec!["county"]);
}

#[test]
fn substitute_priority_order() {
    let config = ReconcileConfig {
        priority: [("county".to_string(), 9), ("listing".to_string(), 1)].into(),
        conflicts: vec![ConflictRule::square_feet()],
    };
    let merged = Reconciler::new(config).reconcile(&sources(&[
        ("county", record(&[("x", json!(1))])),
        ("listing", record(&[("x", json!(2))])),
    ]));
    assert_eq!(merged.provenance["x"], "county");
}

// =============================================================================
// CONFLICTS
// =============================================================================

#[test]
fn six_percent_square_footage_gap_conflicts() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("square_feet", json!(100))])),
        ("listing", record(&[("square_feet", json!(106))])),
    ]));
    assert_eq!(merged.conflicts.len(), 1);
    let conflict = &merged.conflicts[0];
    assert_eq!(conflict.field, "square_feet");
    assert_eq!(conflict.reason, "Square footage varies by more than 5%");
    assert_eq!(conflict.values["county"], json!(100));
    assert_eq!(conflict.values["listing"], json!(106));
}

#[test]
fn four_percent_square_footage_gap_is_fine() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("square_feet", json!(100))])),
        ("listing", record(&[("square_feet", json!(104))])),
    ]));
    assert!(merged.conflicts.is_empty());
}

#[test]
fn numeric_strings_take_part_in_conflicts() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("square_feet", json!("2500"))])),
        ("listing", record(&[("square_feet", json!(3000))])),
    ]));
    assert_eq!(merged.conflicts.len(), 1);
}

#[test]
fn garbage_values_are_not_errors() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("square_feet", json!("two thousand"))])),
        ("listing", record(&[("square_feet", json!({"approx": 2000}))])),
        ("hoa", record(&[("square_feet", json!(true))])),
    ]));
    assert!(merged.conflicts.is_empty());
    assert_eq!(merged.provenance["square_feet"], "listing");
}

#[test]
fn other_fields_do_not_conflict_by_default() {
    let merged = reconcile(&sources(&[
        ("county", record(&[("bedrooms", json!(2))])),
        ("listing", record(&[("bedrooms", json!(5))])),
    ]));
    assert!(merged.conflicts.is_empty());
}

#[test]
fn extra_rules_plug_in_per_field() {
    let mut config = ReconcileConfig::default();
    config.conflicts.push(ConflictRule::new("bedrooms", 0.0, "Bedroom count differs"));
    let merged = Reconciler::new(config).reconcile(&sources(&[
        ("county", record(&[("bedrooms", json!(3)), ("square_feet", json!(100))])),
        ("listing", record(&[("bedrooms", json!(4)), ("square_feet", json!(200))])),
    ]));
    let fields: Vec<&str> = merged.conflicts.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, vec!["bedrooms", "square_feet"]);
}

// =============================================================================
// PURITY
// =============================================================================

#[test]
fn empty_input_yields_empty_brief() {
    let merged = reconcile(&MergeInput::new());
    assert!(merged.is_empty());
    assert!(merged.provenance.is_empty());
    assert!(merged.conflicts.is_empty());
    assert!(merged.sources_used.is_empty());
}

#[test]
fn repeated_merges_agree() {
    let input = sources(&[
        ("county", record(&[("square_feet", json!(2500)), ("bedrooms", json!(3))])),
        ("listing", record(&[("square_feet", json!(2900)), ("bathrooms", json!(2.5))])),
        ("hoa", record(&[("hoa_fee", json!(0))])),
    ]);
    let first = reconcile(&input);
    let second = reconcile(&input);
    assert_eq!(first.fields, second.fields);
    assert_eq!(first.provenance, second.provenance);
    assert_eq!(first.conflicts, second.conflicts);
}

#[test]
fn insertion_order_does_not_matter() {
    let mut forward = MergeInput::new();
    forward.insert("county".into(), record(&[("x", json!(1)), ("y", json!("c"))]));
    forward.insert("listing".into(), record(&[("x", json!(2))]));
    forward.insert("zeta".into(), record(&[("y", json!("z"))]));
    forward.insert("alpha".into(), record(&[("y", json!("a"))]));

    let mut backward = MergeInput::new();
    backward.insert("alpha".into(), record(&[("y", json!("a"))]));
    backward.insert("zeta".into(), record(&[("y", json!("z"))]));
    backward.insert("listing".into(), record(&[("x", json!(2))]));
    backward.insert("county".into(), record(&[("y", json!("c")), ("x", json!(1))]));

    let a = reconcile(&forward);
    let b = reconcile(&backward);
    assert_eq!(a.fields, b.fields);
    assert_eq!(a.provenance, b.provenance);
    assert_eq!(a.provenance["y"], "county");
}

#[test]
fn rerun_with_fewer_sources_leaves_no_residue() {
    let full = sources(&[
        ("county", record(&[("square_feet", json!(100)), ("tax_year", json!(2024))])),
        ("listing", record(&[("square_feet", json!(200))])),
    ]);
    assert_eq!(reconcile(&full).conflicts.len(), 1);

    let reduced = sources(&[("listing", record(&[("square_feet", json!(200))]))]);
    let merged = reconcile(&reduced);
    assert!(merged.conflicts.is_empty());
    assert!(!merged.fields.contains_key("tax_year"));
    assert!(!merged.provenance.contains_key("tax_year"));
    assert_eq!(merged.sources_used.len(), 1);
}
