//! Call-shape disambiguation for translation call sites.
//!
//! A translate call passes one to three positional values:
//! `[key_or_default, default_or_options?, maybe_options?]`. The resolver
//! decides which position holds the lookup key, which holds a default (plain
//! string or pluralization hash), and which holds the options bag, then
//! reduces everything to one canonical `(key, options)` pair with the default
//! carried under the options' `defaultValue` entry.
//!
//! # Invariants
//!
//! 1. **Total**: resolution never fails; malformed shapes degrade to
//!    best-effort `(key, options)` pairs, with a `null` key when no key can
//!    be inferred.
//!
//! 2. **Idempotent**: an already-canonical pair (two values, the second an
//!    object with a truthy `defaultValue`) resolves to itself.
//!
//! 3. **Pure**: the caller's slice is never mutated; the working list is a
//!    local copy.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unrecognized default shape | e.g. a number at position 0 | `null` key, value still moved into `defaultValue` |
//! | Truthy non-object options | e.g. a string at position 2 | Fresh options map, default preserved |
//! | Non-object options, nothing to move | e.g. a number at position 1 after a key | Empty options map |

use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::sync::LazyLock;

use regex::Regex;

use crate::plural::{Pluralize, infer_pluralization_hash, is_pluralization_hash};
use crate::value::{is_object, is_object_like, is_truthy};

/// Dot-separated lookup path, e.g. `errors.messages.blank`.
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+\.)+\w+$").expect("pattern is valid"));

/// Canonical `(key, options)` pair produced by [`CallResolver::resolve`].
///
/// `key` is a string when the call supplied or implied one, `null` when the
/// default shape was unrecognized or blank. `options` always exists; the
/// call's default (if any) sits under its `defaultValue` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCall {
    /// The lookup key, or `null` when none could be inferred.
    pub key: Value,
    /// The options bag, `defaultValue` included when a default was given.
    pub options: Map<String, Value>,
}

/// Normalizes overloaded translate-call shapes into [`ResolvedCall`]s.
///
/// Possible call shapes:
///
/// - `key [, options]`
/// - `key, default_string [, options]`
/// - `key, default_object, options`
/// - `default_string [, options]`
/// - `default_object, options`
///
/// # Example
///
/// ```
/// use i18n_call_core::CallResolver;
/// use serde_json::json;
///
/// let resolver = CallResolver::new(|word: &str| format!("{word}s"));
///
/// // Explicit key and default string.
/// let call = resolver.resolve(&[json!("errors.messages.blank"), json!("can't be blank")]);
/// assert_eq!(call.key, json!("errors.messages.blank"));
/// assert_eq!(call.options["defaultValue"], json!("can't be blank"));
///
/// // Bare noun plus count: a pluralization hash is inferred.
/// let call = resolver.resolve(&[json!("cat"), json!({"count": 3})]);
/// assert_eq!(call.key, json!("cat"));
/// assert_eq!(
///     call.options["defaultValue"],
///     json!({"one": "1 cat", "other": "%{count} cats"})
/// );
/// assert_eq!(call.options["count"], json!(3));
/// ```
#[derive(Debug, Clone)]
pub struct CallResolver<P: Pluralize> {
    pluralizer: P,
}

impl<P: Pluralize> CallResolver<P> {
    /// Create a resolver around an injected singular-to-plural transform.
    #[must_use]
    pub fn new(pluralizer: P) -> Self {
        Self { pluralizer }
    }

    /// Reduce a positional argument list to its canonical `(key, options)`
    /// pair.
    #[must_use]
    pub fn resolve(&self, args: &[Value]) -> ResolvedCall {
        // Fast path: the caller already passed canonical shape.
        if let [key, Value::Object(options)] = args
            && options.get("defaultValue").is_some_and(is_truthy)
        {
            return ResolvedCall {
                key: key.clone(),
                options: options.clone(),
            };
        }

        let mut list: SmallVec<[Value; 4]> = args.iter().cloned().collect();

        if !is_key_provided(list.first(), list.get(1), list.get(2)) {
            let default = list.first().cloned().unwrap_or(Value::Null);
            let translate_options = list.get(1).cloned().unwrap_or(Value::Null);
            let key = infer_key(&default);
            tracing::debug!(key = %key, "no key provided, inferred from default");
            if let Some(slot) = list.first_mut() {
                *slot = normalize_default(default, &translate_options, &self.pluralizer);
            }
            list.insert(0, key);
        }

        let second_is_default = list
            .get(1)
            .is_some_and(|v| matches!(v, Value::String(_)) || is_pluralization_hash(v));
        let third_truthy = list.get(2).is_some_and(is_truthy);
        if third_truthy || second_is_default {
            let supplied = if list.len() > 2 {
                list.remove(2)
            } else {
                Value::Null
            };
            let default = list.remove(1);
            let mut options = match supplied {
                Value::Object(map) => map,
                // A truthy non-object options slot cannot hold the default;
                // keep the default rather than drop it.
                _ => Map::new(),
            };
            options.insert("defaultValue".to_owned(), default);
            list.insert(1, Value::Object(options));
        }

        let key = if list.is_empty() {
            Value::Null
        } else {
            list.remove(0)
        };
        let options = match list.first_mut() {
            Some(Value::Object(map)) => std::mem::take(map),
            _ => Map::new(),
        };
        ResolvedCall { key, options }
    }
}

/// Whether position 0 of a call is a genuine lookup key rather than an
/// implicit default.
///
/// Precedence: an object-like position 0 (object, array, `null`) can never be
/// a key; a string at position 1 forces position 0 to be the key; a truthy
/// explicit options argument at position 2 does the same; otherwise position
/// 0 is a key only if it matches the dotted-path pattern.
#[must_use]
pub fn is_key_provided(
    key_or_default: Option<&Value>,
    default_or_options: Option<&Value>,
    maybe_options: Option<&Value>,
) -> bool {
    let Some(first) = key_or_default else {
        return false;
    };
    if is_object_like(first) {
        return false;
    }
    if matches!(default_or_options, Some(Value::String(_))) {
        return true;
    }
    if maybe_options.is_some_and(is_truthy) {
        return true;
    }
    if let Value::String(s) = first
        && KEY_PATTERN.is_match(s)
    {
        return true;
    }
    false
}

/// Whether `value` is an acceptable default: blank (when `allow_blank`),
/// a string, or an object.
#[must_use]
pub fn valid_default(value: &Value, allow_blank: bool) -> bool {
    (allow_blank && value.is_null()) || value.is_string() || is_object(value)
}

/// Normalize a default: expand a bare noun into a pluralization hash when the
/// options carry a count, then trim surrounding whitespace off string
/// defaults.
#[must_use]
pub fn normalize_default<P: Pluralize>(
    default: Value,
    translate_options: &Value,
    pluralizer: &P,
) -> Value {
    match infer_pluralization_hash(default, translate_options, pluralizer) {
        Value::String(s) => Value::String(s.trim().to_owned()),
        other => other,
    }
}

/// Synthesize a key placeholder from an implicit default: the trimmed string
/// itself, or a pluralization hash's stringified `other` category. Anything
/// else yields `null`.
fn infer_key(default: &Value) -> Value {
    if !valid_default(default, true) {
        return Value::Null;
    }
    match default {
        Value::String(s) => Value::String(s.trim().to_owned()),
        Value::Object(map) if is_pluralization_hash(default) => match map.get("other") {
            Some(Value::String(s)) => Value::String(s.clone()),
            Some(other) => Value::String(other.to_string()),
            None => Value::Null,
        },
        _ => Value::Null,
    }
}
