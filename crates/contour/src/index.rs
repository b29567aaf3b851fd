//! Output keying for projected collections.
//!
//! Each element of a projected collection is either stored under an explicit
//! key or appended.  An explicit key comes from the element's source key or
//! from one of its attributes, depending on the [`IndexMode`].  Index values
//! that are falsy or not scalars fall back to appending; see
//! [`is_fallback_index`].

use contour_core::{AttributePath, Cast, Map, Value};

/// How the elements of a projected collection are keyed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// Append every element; the result is a sequence.
    #[default]
    Sequential,
    /// Key each element by its source position or map key.
    SourceKey,
    /// Key each element by the value at this path within it.
    Attribute(AttributePath),
}

/// Returns `true` when `index` cannot key an element and the element is
/// appended instead.
///
/// `Null`, `false`, `0`, `0.0`, `""`, `"0"`, and every non-scalar value fall
/// back.  This applies to source keys too, so the first element of a
/// sequence projected with [`IndexMode::SourceKey`] is appended.
///
/// # Example
///
/// ```
/// use contour::Value;
/// use contour::index::is_fallback_index;
///
/// assert!(is_fallback_index(&Value::from("0")));
/// assert!(is_fallback_index(&Value::from(vec![Value::Int(1)])));
/// assert!(!is_fallback_index(&Value::from("x")));
/// ```
#[must_use]
pub fn is_fallback_index(index: &Value) -> bool {
    !index.is_scalar() || !index.is_truthy()
}

/// Converts an index value into an output key.
///
/// Integers are written in decimal, floats are truncated, `true` becomes
/// `"1"`, and strings are used as they are.  Returns `None` for values that
/// fall back to appending.
///
/// # Example
///
/// ```
/// use contour::Value;
/// use contour::index::index_key;
///
/// assert_eq!(index_key(&Value::Float(7.9)).as_deref(), Some("7"));
/// assert_eq!(index_key(&Value::Bool(true)).as_deref(), Some("1"));
/// assert_eq!(index_key(&Value::Null), None);
/// ```
#[must_use]
pub fn index_key(index: &Value) -> Option<String> {
    if is_fallback_index(index) {
        return None;
    }
    if let Value::String(text) = index {
        return Some(text.clone());
    }
    Cast::Int
        .apply(index.clone())
        .as_i64()
        .as_ref()
        .map(ToString::to_string)
}

/// Accumulates projected elements in source order.
///
/// Stays a plain sequence until the first explicit key arrives.  Appended
/// elements of a keyed result take the integer after the largest integer key
/// seen so far; a repeated key replaces the earlier value in place.
#[derive(Debug, Default)]
pub(crate) struct Collection {
    entries: Map,
    keyed: bool,
    next: i64,
}

impl Collection {
    pub(crate) fn push(&mut self, key: Option<String>, value: Value) {
        if let Some(explicit) = key {
            self.keyed = true;
            if let Some(number) = canonical_integer(&explicit) {
                self.next = self.next.max(number.saturating_add(1));
            }
            self.entries.insert(explicit, value);
            return;
        }
        let appended = self.next.to_string();
        self.next = self.next.saturating_add(1);
        self.entries.insert(appended, value);
    }

    pub(crate) fn finish(self) -> Value {
        if self.keyed {
            Value::Map(self.entries)
        } else {
            Value::Sequence(self.entries.into_values().collect())
        }
    }
}

/// Parses keys written exactly as a decimal integer (`"7"`, not `"07"`).
fn canonical_integer(key: &str) -> Option<i64> {
    key.parse::<i64>()
        .ok()
        .filter(|number| number.to_string() == key)
}
