//! Dotted attribute paths and their resolution against data values.

use std::fmt;

use crate::value::{Lookup, NULL, Value};

/// A dotted path naming a possibly nested field or key.
///
/// The literal `.` is the identity path and resolves to the value itself.
///
/// # Example
///
/// ```
/// use contour_core::AttributePath;
///
/// let path = AttributePath::new("address.city");
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["address", "city"]);
/// assert!(AttributePath::new(".").is_identity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributePath {
    raw: String,
}

impl AttributePath {
    /// The identity path.
    pub const IDENTITY: &'static str = ".";

    /// The marker that selects the contextual key of a collection element.
    pub const CONTEXT_KEY: &'static str = "%key%";

    /// Creates a path from its textual form.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` for the identity path `.`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.raw == Self::IDENTITY
    }

    /// Returns `true` for the contextual key marker `%key%`.
    #[must_use]
    pub fn is_context_key(&self) -> bool {
        self.raw == Self::CONTEXT_KEY
    }

    /// Returns the segments separated by `.`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for AttributePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for AttributePath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// Resolves `path` against `data`.
///
/// Each segment reads a record field, a map entry, or a sequence position.
/// Traversal stops at the first value that cannot be read into and the
/// result is `Null`; resolution never fails.
///
/// # Example
///
/// ```
/// use contour_core::{AttributePath, Record, Value, path};
///
/// let data = Value::from(
///     Record::new().with_field("a", Record::new().with_field("b", 5)),
/// );
/// assert_eq!(path::resolve(&data, &AttributePath::new("a.b")), &Value::Int(5));
/// assert!(path::resolve(&data, &AttributePath::new("a.b.c")).is_null());
/// ```
#[must_use]
pub fn resolve<'a>(data: &'a Value, path: &AttributePath) -> &'a Value {
    if path.is_identity() {
        return data;
    }
    path.segments()
        .try_fold(data, step)
        .unwrap_or(&NULL)
}

fn step<'a>(data: &'a Value, segment: &str) -> Option<&'a Value> {
    if data.is_record() {
        data.field(segment)
    } else if data.is_collection() {
        data.entry(segment)
    } else {
        None
    }
}
