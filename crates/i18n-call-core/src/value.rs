//! Predicates over the dynamic value model.
//!
//! Call sites are positional and untyped, so arguments are carried as
//! [`serde_json::Value`]. These helpers pin down the loose-typing rules the
//! resolver depends on: truthiness for "was an options argument passed" style
//! checks, and the object test used by both the resolver and the classifier.

use serde_json::Value;

/// Loose truthiness: `null` and `false` are falsy, as are zero numbers and
/// empty strings. Arrays and objects are always truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `value` is a genuine key-value object (not an array, not `null`).
#[must_use]
#[inline]
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Whether `value` occupies the "object" corner of the dynamic type lattice:
/// objects, arrays, and `null`. A value in this corner can never be a lookup
/// key.
#[must_use]
#[inline]
pub(crate) fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_) | Value::Null)
}
