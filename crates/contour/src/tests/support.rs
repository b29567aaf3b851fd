//! Shared helpers for the facade tests.

use crate::{Map, ProjectionSpec, Value};

/// Builds data from a JSON literal; objects become records.
pub(super) fn data(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Builds a keyed collection from a JSON object literal.
pub(super) fn keyed(json: serde_json::Value) -> Value {
    let serde_json::Value::Object(entries) = json else {
        panic!("keyed collections are built from JSON objects");
    };
    Value::Map(
        entries
            .into_iter()
            .map(|(key, item)| (key, Value::from(item)))
            .collect::<Map>(),
    )
}

/// Renders a value as JSON for comparison.
pub(super) fn to_json(value: &Value) -> serde_json::Value {
    serde_json::to_value(value).expect("values serialise to JSON")
}

/// Returns the keys of a mapping output in order.
pub(super) fn keys(value: &Value) -> Vec<&str> {
    value
        .as_map()
        .expect("output should be a mapping")
        .keys()
        .map(String::as_str)
        .collect()
}

/// Builds a spec from plain path descriptors.
pub(super) fn paths(descriptors: &[&str]) -> ProjectionSpec {
    descriptors
        .iter()
        .fold(ProjectionSpec::builder(), |builder, descriptor| builder.path(descriptor))
        .build()
        .expect("descriptors should be valid")
}
