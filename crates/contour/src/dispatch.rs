//! Top-level projection: single items versus collections.

use contour_core::{ProjectionSpec, Value, path};
use tracing::{debug, trace};

use crate::error::ProjectionError;
use crate::index::{Collection, IndexMode, index_key};
use crate::resolve::Resolver;

/// Projects `data`, element by element when it is a collection.
pub(crate) fn project(
    resolver: Resolver<'_>,
    data: &Value,
    spec: Option<&ProjectionSpec>,
    index: &IndexMode,
) -> Result<Value, ProjectionError> {
    match data {
        Value::Null => Ok(Value::Null),
        Value::Sequence(items) => {
            debug!(elements = items.len(), ?index, "projecting sequence");
            let elements = items.iter().enumerate().map(|(position, item)| {
                (Value::Int(i64::try_from(position).unwrap_or(i64::MAX)), item)
            });
            collect(resolver, elements, spec, index)
        }
        Value::Map(items) => {
            debug!(elements = items.len(), ?index, "projecting keyed collection");
            let elements = items
                .iter()
                .map(|(key, item)| (Value::String(key.clone()), item));
            collect(resolver, elements, spec, index)
        }
        single => Ok(project_item(resolver, single, spec, None)?.unwrap_or_default()),
    }
}

/// Projects one item; `None` means the item produces nothing.
fn project_item(
    resolver: Resolver<'_>,
    item: &Value,
    spec: Option<&ProjectionSpec>,
    source_key: Option<&Value>,
) -> Result<Option<Value>, ProjectionError> {
    match (spec, item) {
        (Some(active), _) => resolver.resolve(item, active, source_key, 1).map(Some),
        (None, Value::Record(record)) => Ok(Some(Value::Map(record.fields().clone()))),
        (None, Value::Sequence(_) | Value::Map(_)) => Ok(Some(item.clone())),
        (None, _) => Ok(None),
    }
}

fn collect<'v>(
    resolver: Resolver<'_>,
    elements: impl Iterator<Item = (Value, &'v Value)>,
    spec: Option<&ProjectionSpec>,
    index: &IndexMode,
) -> Result<Value, ProjectionError> {
    let mut output = Collection::default();
    for (source_key, item) in elements {
        let Some(projected) = project_item(resolver, item, spec, Some(&source_key))? else {
            trace!(?source_key, "scalar element without a spec dropped");
            continue;
        };
        let explicit = match index {
            IndexMode::Sequential => None,
            IndexMode::SourceKey => Some(&source_key),
            IndexMode::Attribute(attribute) => Some(path::resolve(item, attribute)),
        };
        let key = explicit.and_then(|value| {
            let candidate = index_key(value);
            if candidate.is_none() {
                trace!(?source_key, index = ?value, "index falls back to append");
            }
            candidate
        });
        output.push(key, projected);
    }
    Ok(output.finish())
}
