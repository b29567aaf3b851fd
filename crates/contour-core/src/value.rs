//! The data model projected by the engine.
//!
//! A [`Value`] is one of three shapes: a *record* (named fields), an
//! *indexed collection* (an ordered [`Value::Sequence`] or a keyed
//! [`Value::Map`]), or a *scalar*.  Path resolution reaches into values only
//! through the [`Lookup`] capability trait, so the resolver never probes
//! concrete variants itself.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// An ordered mapping from string keys to values.
///
/// Insertion order is significant: it is the order in which projected keys
/// are emitted.
pub type Map = IndexMap<String, Value>;

/// A data value accepted as projection input and produced as output.
///
/// # Example
///
/// ```
/// use contour_core::{Lookup, Record, Value};
///
/// let value = Value::from(Record::new().with_field("name", "Ann"));
/// assert!(value.is_record());
/// assert!(value.is_truthy());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A signed integer scalar.
    Int(i64),
    /// A floating point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence, addressable by position.
    Sequence(Vec<Value>),
    /// A keyed collection, addressable by key.
    Map(Map),
    /// A record with named fields.
    Record(Record),
}

/// Shared absent value handed out by borrowing lookups.
pub(crate) static NULL: Value = Value::Null;

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for booleans, numbers, and strings.
    ///
    /// `Null` is not a scalar, so numeric casts leave it untouched.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    /// Returns the string slice for [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer for [`Value::Int`].
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the mapping for [`Value::Map`].
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the elements of [`Value::Sequence`].
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Loose truthiness used by the index fallback policy.
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` and empty containers are
    /// falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::String(text) => !(text.is_empty() || text == "0"),
            Self::Sequence(items) => !items.is_empty(),
            Self::Map(map) => !map.is_empty(),
            Self::Record(record) => !record.is_empty(),
        }
    }

    /// Converts any serialisable value into a [`Value`].
    ///
    /// Structs and JSON-like objects become records; sequences become
    /// [`Value::Sequence`].
    ///
    /// # Errors
    ///
    /// Returns the serialiser error when `value` cannot be represented
    /// (for example a map with non-string keys).
    ///
    /// # Example
    ///
    /// ```
    /// use contour_core::{Lookup, Value};
    ///
    /// #[derive(serde::Serialize)]
    /// struct Person { name: &'static str }
    ///
    /// let value = Value::from_serialize(&Person { name: "Ann" }).expect("serialisable");
    /// assert_eq!(value.field("name"), Some(&Value::from("Ann")));
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::from)
    }
}

/// A named-field container.
///
/// Field order follows insertion order and is preserved when a record is
/// flattened into an output mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and returns the record, for literal construction.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a field, replacing any previous value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the named field, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns all fields in order.
    #[must_use]
    pub const fn fields(&self) -> &Map {
        &self.fields
    }

    /// Consumes the record, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Map {
        self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Capability interface through which paths read data values.
///
/// Implementations answer three questions: does the value expose a named
/// field, does it hold an entry under a key, and is it an indexed
/// collection.
pub trait Lookup {
    /// Returns `true` when the value is a named-field container.
    fn is_record(&self) -> bool;

    /// Returns `true` when the value is a sequence or keyed collection.
    fn is_collection(&self) -> bool;

    /// Returns the named field of a record.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Returns the entry stored under `key` in a collection.
    ///
    /// Sequences accept keys written as a canonical non-negative position.
    fn entry(&self, key: &str) -> Option<&Value>;
}

impl Lookup for Value {
    fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Map(_))
    }

    fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(record) => record.field(name),
            _ => None,
        }
    }

    fn entry(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(key),
            Self::Sequence(items) => sequence_position(key).and_then(|position| items.get(position)),
            _ => None,
        }
    }
}

/// Reads a sequence position written exactly in decimal (`"1"`, not `"01"` or `"+1"`).
fn sequence_position(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|position| position.to_string() == key)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => serialize_entries(serializer, map),
            Self::Record(record) => serialize_entries(serializer, record.fields()),
        }
    }
}

fn serialize_entries<S: Serializer>(serializer: S, entries: &Map) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => number.as_i64().map_or_else(
                || Self::Float(number.as_f64().unwrap_or_default()),
                Self::Int,
            ),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Record(fields.into_iter().collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<V: Into<Self>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
