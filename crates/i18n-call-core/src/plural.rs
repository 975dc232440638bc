//! Pluralization hash classification and inference.
//!
//! A pluralization hash maps CLDR grammatical-number categories to template
//! strings, e.g. `{"one": "1 cat", "other": "%{count} cats"}`. The classifier
//! decides whether an arbitrary value is shaped like one; the inference step
//! expands a bare singular noun into a two-category hash when the call
//! carries a `count` option.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Extra key in hash | e.g. `{"other": ..., "foo": ...}` | Classified as not-a-hash |
//! | Missing required category | hash without `one`/`other` | Still accepted (see [`REQUIRED_CATEGORIES`]) |
//! | Non-noun default | whitespace, punctuation | Inference passes value through |

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::value::{is_object, is_truthy};

/// A single word or hyphenated token, the only default shape eligible for
/// pluralization inference.
static BARE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+$").expect("pattern is valid"));

/// CLDR grammatical-number category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Every recognized category, i.e. the allowed key set for a
    /// pluralization hash.
    pub const ALL: [Self; 5] = [Self::Zero, Self::One, Self::Few, Self::Many, Self::Other];

    /// Parse a hash key into a category.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The hash key for this category.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

/// Categories every complete hash should carry.
///
/// Documented but deliberately not enforced by [`is_pluralization_hash`]:
/// the lookup/rendering layer owns validation strictness, and rejecting a
/// partial hash here would change which argument position gets treated as
/// the default.
pub const REQUIRED_CATEGORIES: [PluralCategory; 2] = [PluralCategory::One, PluralCategory::Other];

/// Whether `value` is shaped like a pluralization hash: a non-empty object
/// whose every key names a [`PluralCategory`].
///
/// ```
/// use i18n_call_core::is_pluralization_hash;
/// use serde_json::json;
///
/// assert!(is_pluralization_hash(&json!({"other": "x"})));
/// assert!(!is_pluralization_hash(&json!({"other": "x", "foo": "y"})));
/// assert!(!is_pluralization_hash(&json!({})));
/// assert!(!is_pluralization_hash(&json!("x")));
/// ```
#[must_use]
pub fn is_pluralization_hash(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            !map.is_empty() && map.keys().all(|k| PluralCategory::from_key(k).is_some())
        }
        _ => false,
    }
}

/// Injected singular-to-plural word transform.
///
/// The pluralization algorithm itself lives outside this crate; any
/// `Fn(&str) -> String` closure satisfies the trait.
pub trait Pluralize {
    /// Return the plural form of a singular `word`.
    fn pluralize(&self, word: &str) -> String;
}

impl<F> Pluralize for F
where
    F: Fn(&str) -> String,
{
    fn pluralize(&self, word: &str) -> String {
        self(word)
    }
}

/// Expand a bare-noun default into a pluralization hash when the call's
/// options carry a truthy `count`; pass every other value through unchanged.
///
/// `"cat"` with `{"count": 3}` becomes
/// `{"one": "1 cat", "other": "%{count} cats"}` (using the injected
/// pluralizer for `"cats"`).
#[must_use]
pub fn infer_pluralization_hash<P: Pluralize>(
    value: Value,
    options: &Value,
    pluralizer: &P,
) -> Value {
    match value {
        Value::String(word) if BARE_WORD.is_match(&word) && options_carry_count(options) => {
            tracing::debug!(word = %word, "expanding bare noun into pluralization hash");
            let mut hash = Map::new();
            hash.insert(
                PluralCategory::One.as_key().to_owned(),
                Value::String(format!("1 {word}")),
            );
            hash.insert(
                PluralCategory::Other.as_key().to_owned(),
                Value::String(format!("%{{count}} {}", pluralizer.pluralize(&word))),
            );
            Value::Object(hash)
        }
        other => other,
    }
}

fn options_carry_count(options: &Value) -> bool {
    is_object(options)
        && options
            .get("count")
            .is_some_and(is_truthy)
}
