//! Spec-driven attribute resolution.

use contour_core::{
    Descriptor, EngineConfig, Map, ProjectionSpec, SpecEntry, Target, Value, path,
};
use tracing::{debug, trace};

use crate::error::ProjectionError;

/// Applies a projection spec to one data value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'a> {
    config: &'a EngineConfig,
}

impl<'a> Resolver<'a> {
    pub(crate) const fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Resolves `spec` against `data` at nesting level `depth`.
    ///
    /// Levels count from 1 for the outermost spec.  The depth limit is
    /// checked before anything else, so a `Null` value nested too deeply
    /// still fails.
    pub(crate) fn resolve(
        self,
        data: &Value,
        spec: &ProjectionSpec,
        context_key: Option<&Value>,
        depth: usize,
    ) -> Result<Value, ProjectionError> {
        if depth > self.config.max_depth() {
            return Err(ProjectionError::DepthExceeded {
                limit: self.config.max_depth(),
            });
        }
        if data.is_null() {
            return Ok(Value::Null);
        }

        let mut output = Map::with_capacity(spec.len());
        for entry in spec.entries() {
            let mut value = self.entry_value(data, entry, context_key, depth)?;
            if let Some(cast) = entry.cast() {
                value = cast.apply(value);
            }
            write(&mut output, entry, value);
        }
        Ok(Value::Map(output))
    }

    fn entry_value(
        self,
        data: &Value,
        entry: &SpecEntry,
        context_key: Option<&Value>,
        depth: usize,
    ) -> Result<Value, ProjectionError> {
        trace!(path = %entry.path(), depth, "resolving spec entry");
        match entry.descriptor() {
            Descriptor::Nested(nested) => {
                let source = path::resolve(data, entry.path());
                if entry.is_array() {
                    match source {
                        Value::Sequence(items) => return self.each(items.iter(), nested, depth),
                        Value::Map(items) => return self.each(items.values(), nested, depth),
                        _ => {}
                    }
                }
                self.resolve(source, nested, None, depth + 1)
            }
            Descriptor::Computed(computed) => Ok(computed.call(path::resolve(data, entry.path()))),
            Descriptor::ContextKey => Ok(context_key.cloned().unwrap_or_default()),
            Descriptor::Path => Ok(path::resolve(data, entry.path()).clone()),
        }
    }

    fn each<'v>(
        self,
        items: impl Iterator<Item = &'v Value>,
        nested: &ProjectionSpec,
        depth: usize,
    ) -> Result<Value, ProjectionError> {
        items
            .map(|item| self.resolve(item, nested, None, depth + 1))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence)
    }
}

fn write(output: &mut Map, entry: &SpecEntry, value: Value) {
    match entry.target() {
        Target::Key(key) => {
            output.insert(key.clone(), value);
        }
        Target::Merge => match value {
            Value::Map(entries) => output.extend(entries),
            Value::Record(record) => output.extend(record.into_fields()),
            Value::Null => {}
            other => {
                debug!(path = %entry.path(), value = ?other, "merge source is not a mapping; skipped");
            }
        },
    }
}
