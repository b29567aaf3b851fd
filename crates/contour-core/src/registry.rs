//! Computed value callables and the named registry used by spec documents.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

type ComputeFn = dyn Fn(&Value) -> Value + Send + Sync;

/// A callable that derives an output value from one resolved data value.
///
/// # Example
///
/// ```
/// use contour_core::{Computed, Value};
///
/// let double = Computed::new(|value| match value {
///     Value::Int(n) => Value::Int(n * 2),
///     other => other.clone(),
/// });
/// assert_eq!(double.call(&Value::Int(21)), Value::Int(42));
/// ```
#[derive(Clone)]
pub struct Computed {
    name: Option<String>,
    func: Arc<ComputeFn>,
}

impl Computed {
    /// Wraps an anonymous closure.
    #[must_use]
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Wraps a closure under a name, used in diagnostics and debug output.
    #[must_use]
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// Returns the registered name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invokes the callable.
    #[must_use]
    pub fn call(&self, value: &Value) -> Value {
        (self.func)(value)
    }
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Computed")
            .field(&self.name.as_deref().unwrap_or("<closure>"))
            .finish()
    }
}

/// Named computed functions that spec documents may reference with `$fn`.
///
/// # Example
///
/// ```
/// use contour_core::{FunctionRegistry, Value};
///
/// let registry = FunctionRegistry::with_builtins();
/// let count = registry.get("count").expect("builtin");
/// assert_eq!(count.call(&Value::from(vec![Value::Null, Value::Null])), Value::Int(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, Computed>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin functions.
    ///
    /// - `count`: length of a sequence, map, record, or string
    /// - `string`: scalar rendered as a string
    /// - `upper`, `lower`, `trim`: string case and whitespace helpers
    /// - `exists`: whether the value is non-null
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("count", count);
        registry.register("string", stringify);
        registry.register("upper", |value| map_text(value, str::to_uppercase));
        registry.register("lower", |value| map_text(value, str::to_lowercase));
        registry.register("trim", |value| map_text(value, |text| text.trim().to_owned()));
        registry.register("exists", |value| Value::Bool(!value.is_null()));
        registry
    }

    /// Registers `func` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F) -> &mut Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        let key: String = name.into();
        self.functions
            .insert(key.clone(), Computed::named(key, func));
        self
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Computed> {
        self.functions.get(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

fn count(value: &Value) -> Value {
    let length = match value {
        Value::Sequence(items) => items.len(),
        Value::Map(map) => map.len(),
        Value::Record(record) => record.len(),
        Value::String(text) => text.chars().count(),
        _ => return Value::Null,
    };
    Value::Int(i64::try_from(length).unwrap_or(i64::MAX))
}

fn stringify(value: &Value) -> Value {
    match value {
        Value::Bool(flag) => Value::String(flag.to_string()),
        Value::Int(number) => Value::String(number.to_string()),
        Value::Float(number) => Value::String(number.to_string()),
        Value::String(text) => Value::String(text.clone()),
        _ => Value::Null,
    }
}

fn map_text(value: &Value, transform: impl Fn(&str) -> String) -> Value {
    match value {
        Value::String(text) => Value::String(transform(text)),
        other => other.clone(),
    }
}
