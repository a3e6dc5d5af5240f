//! Outbound request-body preparation.
//!
//! Two rewrites run on every create/update body, in order:
//!
//! 1. Relation normalization: nested-object relation values are converted to
//!    the `_id`/`_ids` foreign-key form the wire expects, driven by the
//!    field schema of the element family being written.
//! 2. Coordinate coercion, pin family only: present numeric axes are rounded
//!    to whole numbers, which the service requires.

use onlyworlds_domain::schema::{self, FieldKind};
use onlyworlds_domain::ElementType;
use serde_json::{Map, Value};

/// Prepare one request body for submission.
pub(crate) fn prepare_body(element: ElementType, mut body: Value) -> Value {
    if let Value::Object(map) = &mut body {
        normalize_links(element, map);
        if element == ElementType::Pin {
            round_coordinates(map);
        }
    }
    body
}

/// Rewrite nested-object relation values to wire foreign keys.
///
/// Only fields the schema knows as links are touched, so a text field that
/// happens to hold an object with an `id` key passes through untouched.
/// Bare identifiers and bare identifier arrays are already in an accepted
/// shape and also pass through, which makes the rewrite idempotent: the
/// `_id`/`_ids` keys it produces are unknown to the schema.
///
/// An empty array is left as-is; there is no element to inspect, and a
/// caller clearing a multi-link should send the `_ids` wire key directly.
fn normalize_links(element: ElementType, map: &mut Map<String, Value>) {
    let mut rewrites: Vec<(String, String, Value)> = Vec::new();

    for (field, value) in map.iter() {
        match schema::field_kind(element, field) {
            Some(FieldKind::SingleLink(_)) => {
                if let Some(id) = value.get("id") {
                    rewrites.push((field.clone(), format!("{field}_id"), id.clone()));
                }
            }
            Some(FieldKind::MultiLink(_)) => {
                if let Value::Array(items) = value {
                    let first_is_object = items.first().is_some_and(|v| v.get("id").is_some());
                    if first_is_object {
                        // Mixed arrays map uniformly: object entries
                        // contribute their id, bare entries are taken to be
                        // identifiers already.
                        let ids: Vec<Value> = items
                            .iter()
                            .map(|item| item.get("id").cloned().unwrap_or_else(|| item.clone()))
                            .collect();
                        rewrites.push((field.clone(), format!("{field}_ids"), Value::Array(ids)));
                    }
                }
            }
            _ => {}
        }
    }

    for (old_key, wire_key, value) in rewrites {
        map.remove(&old_key);
        map.insert(wire_key, value);
    }
}

/// Round pin axes half-away-from-zero to whole numbers.
///
/// `f64::round` rounds halfway cases away from zero: `3.7 -> 4`,
/// `-2.2 -> -2`, `0.5 -> 1`, `-2.5 -> -3`. Non-numeric or absent axes are
/// left untouched.
fn round_coordinates(map: &mut Map<String, Value>) {
    for axis in ["x", "y", "z"] {
        if let Some(value) = map.get_mut(axis) {
            if let Some(n) = value.as_f64() {
                *value = Value::from(n.round() as i64);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_link_nested_object_becomes_foreign_key() {
        let body = json!({"name": "Aldric", "birthplace": {"id": "loc-9", "name": "Harrowgate"}});
        let prepared = prepare_body(ElementType::Character, body);
        assert_eq!(
            prepared,
            json!({"name": "Aldric", "birthplace_id": "loc-9"})
        );
    }

    #[test]
    fn test_multi_link_nested_objects_become_foreign_keys() {
        let body = json!({"friends": [{"id": "char-1"}, {"id": "char-2"}]});
        let prepared = prepare_body(ElementType::Character, body);
        assert_eq!(prepared, json!({"friends_ids": ["char-1", "char-2"]}));
    }

    #[test]
    fn test_bare_identifiers_pass_through() {
        let body = json!({"birthplace": "loc-9", "friends": ["char-1", "char-2"]});
        let prepared = prepare_body(ElementType::Character, body.clone());
        assert_eq!(prepared, body);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let body = json!({
            "birthplace": {"id": "loc-9"},
            "friends": [{"id": "char-1"}]
        });
        let once = prepare_body(ElementType::Character, body);
        let twice = prepare_body(ElementType::Character, once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_round_trip_preserves_identifiers() {
        let body = json!({
            "tradition": {"id": "con-5"},
            "instruments": [{"id": "obj-1"}, {"id": "obj-2"}]
        });
        let prepared = prepare_body(ElementType::Ability, body);
        assert_eq!(prepared["tradition_id"], json!("con-5"));
        assert_eq!(prepared["instruments_ids"], json!(["obj-1", "obj-2"]));
    }

    #[test]
    fn test_mixed_multi_link_array_maps_entries_uniformly() {
        let body = json!({"friends": [{"id": "char-1"}, "char-2"]});
        let prepared = prepare_body(ElementType::Character, body);
        assert_eq!(prepared, json!({"friends_ids": ["char-1", "char-2"]}));
    }

    #[test]
    fn test_empty_multi_link_array_is_left_alone() {
        let body = json!({"friends": []});
        let prepared = prepare_body(ElementType::Character, body.clone());
        assert_eq!(prepared, body);
    }

    #[test]
    fn test_non_link_object_field_is_untouched() {
        // "physicality" is a text field; an object with an id key in it is
        // the caller's data, not a relation.
        let body = json!({"physicality": {"id": "not-a-relation"}});
        let prepared = prepare_body(ElementType::Character, body.clone());
        assert_eq!(prepared, body);
    }

    #[test]
    fn test_unknown_fields_pass_through_verbatim() {
        let body = json!({"custom_field": {"id": "x"}});
        let prepared = prepare_body(ElementType::Character, body.clone());
        assert_eq!(prepared, body);
    }

    #[test]
    fn test_pin_coordinates_are_rounded_half_away_from_zero() {
        let body = json!({"x": 3.7, "y": -2.2, "z": 0.5});
        let prepared = prepare_body(ElementType::Pin, body);
        assert_eq!(prepared, json!({"x": 4, "y": -2, "z": 1}));
    }

    #[test]
    fn test_negative_half_rounds_away_from_zero() {
        let body = json!({"x": -2.5});
        let prepared = prepare_body(ElementType::Pin, body);
        assert_eq!(prepared, json!({"x": -3}));
    }

    #[test]
    fn test_non_pin_coordinates_are_untouched() {
        let body = json!({"x": 3.7, "y": -2.2, "z": 0.5});
        let prepared = prepare_body(ElementType::Marker, body.clone());
        assert_eq!(prepared, body);
    }

    #[test]
    fn test_non_numeric_axis_is_untouched() {
        let body = json!({"x": "center", "y": 1.5});
        let prepared = prepare_body(ElementType::Pin, body);
        assert_eq!(prepared, json!({"x": "center", "y": 2}));
    }

    #[test]
    fn test_pin_element_reference_is_normalized_too() {
        // element_id is a single link (wildcard target); the nested shape
        // still collapses to the foreign-key form.
        let body = json!({"element_id": {"id": "loc-3"}, "x": 1.2});
        let prepared = prepare_body(ElementType::Pin, body);
        assert_eq!(prepared, json!({"element_id_id": "loc-3", "x": 1}));
    }
}
