//! Classification Tests
//!
//! Predicates over every JSON value type, checked through the public API.

use putkonen_kind::{expect_container, expect_sequence, is_array, is_object, Kind, Shape};
use serde_json::{json, Value};

/// One representative per value type, with the expected shape.
fn corpus() -> Vec<(Value, Shape)> {
    vec![
        (Value::Null, Shape::Scalar),
        (json!(false), Shape::Scalar),
        (json!(42), Shape::Scalar),
        (json!(""), Shape::Scalar),
        (json!("baz"), Shape::Scalar),
        (json!([]), Shape::Sequence),
        (json!([1, [2, [3]]]), Shape::Sequence),
        (json!({}), Shape::Container),
        (json!({"nested": {"a": []}}), Shape::Container),
    ]
}

#[test]
fn test_predicates_agree_with_shape() {
    for (value, shape) in corpus() {
        assert_eq!(Shape::of(&value), shape, "shape of {value}");
        assert_eq!(is_array(&value), shape == Shape::Sequence, "is_array({value})");
        assert_eq!(is_object(&value), shape == Shape::Container, "is_object({value})");
    }
}

#[test]
fn test_predicates_are_exclusive() {
    for (value, _) in corpus() {
        assert!(
            !(is_array(&value) && is_object(&value)),
            "{value} classified as both array and object"
        );
    }
}

#[test]
fn test_expect_helpers_report_found_kind() {
    let err = expect_sequence(&json!({"a": 1})).unwrap_err();
    assert_eq!(err.found, Kind::Object);

    let err = expect_container(&json!("text")).unwrap_err();
    assert_eq!(err.found, Kind::String);
    assert!(err.to_string().contains("container"));
}
