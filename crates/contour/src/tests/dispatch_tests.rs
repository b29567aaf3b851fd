//! Tests for collection dispatch and output keying.

use rstest::rstest;
use serde_json::json;

use super::support::{data, keyed, keys, paths, to_json};
use crate::{AttributePath, Engine, IndexMode, ProjectionSpec, Value};

fn project(data: &Value, spec: Option<&ProjectionSpec>, index: &IndexMode) -> Value {
    Engine::default()
        .project(data, spec, index)
        .expect("projection succeeds")
}

fn by(attribute: &str) -> IndexMode {
    IndexMode::Attribute(AttributePath::new(attribute))
}

#[test]
fn source_key_on_sequence_appends_position_zero() {
    let rows = data(json!([{"a": 1}, {"a": 2}, {"a": 3}]));
    let output = project(&rows, Some(&paths(&["a"])), &IndexMode::SourceKey);
    assert!(matches!(output, Value::Map(_)));
    assert_eq!(keys(&output), ["0", "1", "2"]);
    assert_eq!(to_json(&output), json!({"0": {"a": 1}, "1": {"a": 2}, "2": {"a": 3}}));
}

#[test]
fn source_key_on_keyed_collection_keeps_keys() {
    let items = keyed(json!({"k1": {"a": 1}, "k2": {"a": 2}}));
    let output = project(&items, Some(&paths(&["a"])), &IndexMode::SourceKey);
    assert_eq!(keys(&output), ["k1", "k2"]);
}

#[test]
fn sequential_keyed_collection_becomes_sequence() {
    let items = keyed(json!({"k1": {"a": 1}, "k2": {"a": 2}}));
    let output = project(&items, Some(&paths(&["a"])), &IndexMode::Sequential);
    assert_eq!(to_json(&output), json!([{"a": 1}, {"a": 2}]));
}

#[test]
fn falsy_attribute_indexes_are_appended() {
    let rows = data(json!([{"id": "x"}, {"id": ""}, {"id": 0}, {"id": "0"}, {"id": "y"}]));
    let output = project(&rows, Some(&paths(&["id"])), &by("id"));
    assert_eq!(keys(&output), ["x", "0", "1", "2", "y"]);
}

#[test]
fn appended_keys_follow_largest_integer_key() {
    let rows = data(json!([{"id": 5}, {"id": null}, {"id": "10"}, {"id": false}]));
    let output = project(&rows, Some(&paths(&["id"])), &by("id"));
    assert_eq!(keys(&output), ["5", "6", "10", "11"]);
}

#[test]
fn non_canonical_integer_keys_do_not_move_the_counter() {
    let rows = data(json!([{"id": "07"}, {"id": null}]));
    let output = project(&rows, Some(&paths(&["id"])), &by("id"));
    assert_eq!(keys(&output), ["07", "0"]);
}

#[test]
fn repeated_keys_overwrite_in_place() {
    let rows = data(json!([{"id": "a", "v": 1}, {"id": "b", "v": 2}, {"id": "a", "v": 3}]));
    let output = project(&rows, Some(&paths(&["v"])), &by("id"));
    assert_eq!(keys(&output), ["a", "b"]);
    assert_eq!(to_json(&output), json!({"a": {"v": 3}, "b": {"v": 2}}));
}

#[rstest]
#[case::float(json!(2.7), "2")]
#[case::negative(json!(-3), "-3")]
#[case::true_flag(json!(true), "1")]
#[case::text(json!("sku-1"), "sku-1")]
fn scalar_indexes_are_stringified(#[case] id: serde_json::Value, #[case] key: &str) {
    let rows = data(json!([{"id": id}]));
    let output = project(&rows, Some(&paths(&["id"])), &by("id"));
    assert_eq!(keys(&output), [key]);
}

#[test]
fn non_scalar_indexes_are_appended() {
    let rows = data(json!([{"id": [1]}, {"id": {"n": 1}}]));
    let output = project(&rows, Some(&paths(&["id"])), &by("id"));
    assert!(matches!(output, Value::Sequence(_)));
}

#[test]
fn elements_without_a_spec_keep_their_shape() {
    let rows = data(json!([{"a": {"b": 1}}, 5, "text", [1, 2], null]));
    let output = project(&rows, None, &IndexMode::Sequential);
    assert_eq!(to_json(&output), json!([{"a": {"b": 1}}, [1, 2]]));
    let first = &output.as_sequence().expect("sequence")[0];
    assert!(matches!(first, Value::Map(_)));
    assert!(matches!(first.as_map().and_then(|fields| fields.get("a")), Some(Value::Record(_))));
}

#[rstest]
#[case::record(json!({"a": 1, "b": {"c": 2}}), json!({"a": 1, "b": {"c": 2}}))]
#[case::scalar(json!(42), json!(null))]
#[case::string(json!("text"), json!(null))]
fn single_items_without_a_spec(
    #[case] item: serde_json::Value,
    #[case] expected: serde_json::Value,
) {
    let output = project(&data(item), None, &IndexMode::Sequential);
    assert_eq!(to_json(&output), expected);
}

#[test]
fn single_record_with_spec_ignores_index_mode() {
    let output = project(&data(json!({"id": "x", "v": 1})), Some(&paths(&["v"])), &by("id"));
    assert_eq!(to_json(&output), json!({"v": 1}));
}

#[test]
fn elements_see_their_source_key() {
    let spec = paths(&["%key% as slot"]);
    let items = keyed(json!({"k1": {}, "k2": {}}));
    let output = project(&items, Some(&spec), &IndexMode::Sequential);
    assert_eq!(to_json(&output), json!([{"slot": "k1"}, {"slot": "k2"}]));

    let rows = data(json!([{"a": 1}, {"a": 2}]));
    let positions = project(&rows, Some(&spec), &IndexMode::Sequential);
    assert_eq!(to_json(&positions), json!([{"slot": 0}, {"slot": 1}]));
}

#[test]
fn null_elements_with_a_spec_stay_null() {
    let rows = data(json!([null, {"a": 1}]));
    let output = project(&rows, Some(&paths(&["a"])), &IndexMode::Sequential);
    assert_eq!(to_json(&output), json!([null, {"a": 1}]));
}

#[test]
fn empty_collections_project_to_empty_sequences() {
    let output = project(&data(json!([])), Some(&paths(&["a"])), &IndexMode::SourceKey);
    assert_eq!(output, Value::Sequence(vec![]));
}
