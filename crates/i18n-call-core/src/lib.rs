#![forbid(unsafe_code)]

//! Call-shape normalization core for translation APIs.
//!
//! Translation call sites pass positional, untyped arguments in several
//! overloaded shapes (a lookup key alone, a key plus default, a default plus
//! options, a pluralization hash, ...). This crate reduces every shape to one
//! canonical `(key, options)` pair, with any inferred default carried under
//! the options' `defaultValue` entry, and applies ordered delimiter-based
//! text substitutions ("wrappers") to resolved strings.
//!
//! The actual translation-table lookup, plural-rule selection, and the
//! singular-to-plural word transform are external: the pluralizer is injected
//! via the [`Pluralize`] trait and everything else is left to the caller.

pub mod calls;
pub mod plural;
pub mod value;
pub mod wrappers;

pub use calls::{CallResolver, ResolvedCall, is_key_provided, normalize_default, valid_default};
pub use plural::{
    PluralCategory, Pluralize, REQUIRED_CATEGORIES, infer_pluralization_hash,
    is_pluralization_hash,
};
pub use value::{is_object, is_truthy};
pub use wrappers::{WrapperFn, Wrappers, apply_wrappers};
