//! Delimiter-based text substitution for rendered translations.
//!
//! A wrapper replaces one delimited span in a string with the output of a
//! transform over the span's inner text, e.g. turning `*bold*` into
//! `<b>bold</b>`. Wrappers come in two shapes: positional (anonymous `*`,
//! `**`, `***`, ... delimiters, one per nesting level) and named (explicit
//! delimiter strings).
//!
//! # Invariants
//!
//! 1. **Longest delimiter first**: positional wrappers apply from the highest
//!    index down, named wrappers sort by descending delimiter length, so a
//!    longer marker is always consumed before a shorter prefix of it.
//!
//! 2. **One replacement per delimiter**: only the first delimited span is
//!    rewritten; later pairs of the same delimiter are left untouched.
//!
//! 3. **Delimiters are literal**: delimiter text is escaped before pattern
//!    construction, so no delimiter value can corrupt the match.

use regex::Regex;

/// Transform applied to the inner text of a delimited span.
pub type WrapperFn = Box<dyn Fn(&str) -> String>;

/// A set of wrappers to apply to one string.
///
/// Constructed per call and consumed once; not retained.
pub enum Wrappers {
    /// Ordered transforms with synthesized delimiters: index 0 gets `*`,
    /// index 1 gets `**`, and so on.
    Positional(Vec<WrapperFn>),
    /// Explicit delimiter strings, each with its transform.
    Named(Vec<(String, WrapperFn)>),
}

/// Apply every wrapper in `wrappers` to `text`, longest delimiter first.
///
/// ```
/// use i18n_call_core::{Wrappers, apply_wrappers};
///
/// let wrappers = Wrappers::Positional(vec![
///     Box::new(|s: &str| format!("<b>{s}</b>")),
///     Box::new(|s: &str| format!("<strong>{s}</strong>")),
/// ]);
/// assert_eq!(
///     apply_wrappers("*bold* and **bolder**", &wrappers),
///     "<b>bold</b> and <strong>bolder</strong>"
/// );
/// ```
#[must_use]
pub fn apply_wrappers(text: &str, wrappers: &Wrappers) -> String {
    let mut out = text.to_owned();
    match wrappers {
        Wrappers::Positional(transforms) => {
            for i in (1..=transforms.len()).rev() {
                out = apply_wrapper(&out, &"*".repeat(i), &transforms[i - 1]);
            }
        }
        Wrappers::Named(entries) => {
            let mut order: Vec<usize> = (0..entries.len()).collect();
            // Descending delimiter length; stable, so ties keep given order.
            order.sort_by_key(|&i| std::cmp::Reverse(entries[i].0.len()));
            for i in order {
                let (delimiter, transform) = &entries[i];
                out = apply_wrapper(&out, delimiter, transform);
            }
        }
    }
    out
}

/// Replace the first `delimiter`-delimited span in `text` with the
/// transform's output over the inner capture. An uncompilable pattern leaves
/// the text unchanged; escaping makes that unreachable in practice.
fn apply_wrapper(text: &str, delimiter: &str, wrapper: &WrapperFn) -> String {
    let escaped = regex::escape(delimiter);
    let pattern = format!("{escaped}(.*?){escaped}");
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace(text, |caps: &regex::Captures<'_>| {
                wrapper(caps.get(1).map_or("", |m| m.as_str()))
            })
            .into_owned(),
        Err(_) => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &'static str) -> WrapperFn {
        Box::new(move |s: &str| format!("<{name}>{s}</{name}>"))
    }

    #[test]
    fn positional_applies_longest_marker_first() {
        let wrappers = Wrappers::Positional(vec![tag("b"), tag("strong")]);
        assert_eq!(
            apply_wrappers("*bold* and **bolder**", &wrappers),
            "<b>bold</b> and <strong>bolder</strong>"
        );
    }

    #[test]
    fn positional_consumes_each_pair_once() {
        let wrappers = Wrappers::Positional(vec![tag("b")]);
        assert_eq!(
            apply_wrappers("*first* then *second*", &wrappers),
            "<b>first</b> then *second*"
        );
    }

    #[test]
    fn named_sorts_by_descending_length() {
        let wrappers = Wrappers::Named(vec![
            ("~".to_owned(), tag("sub")),
            ("~~".to_owned(), tag("del")),
        ]);
        assert_eq!(
            apply_wrappers("~~gone~~ ~new~", &wrappers),
            "<del>gone</del> <sub>new</sub>"
        );
    }

    #[test]
    fn named_single_delimiter() {
        let wrappers = Wrappers::Named(vec![("__".to_owned(), tag("u"))]);
        assert_eq!(
            apply_wrappers("an __underlined__ word", &wrappers),
            "an <u>underlined</u> word"
        );
    }

    #[test]
    fn delimiter_metacharacters_are_literal() {
        let wrappers = Wrappers::Named(vec![(".".to_owned(), tag("dot"))]);
        assert_eq!(apply_wrappers("a.b.c", &wrappers), "a<dot>b</dot>c");

        let wrappers = Wrappers::Named(vec![("(".to_owned(), tag("p"))]);
        assert_eq!(apply_wrappers("(inner( rest", &wrappers), "<p>inner</p> rest");
    }

    #[test]
    fn empty_sets_are_no_ops() {
        assert_eq!(
            apply_wrappers("text", &Wrappers::Positional(Vec::new())),
            "text"
        );
        assert_eq!(apply_wrappers("text", &Wrappers::Named(Vec::new())), "text");
    }

    #[test]
    fn unmatched_delimiter_leaves_text_alone() {
        let wrappers = Wrappers::Positional(vec![tag("b")]);
        assert_eq!(apply_wrappers("no markers here", &wrappers), "no markers here");
        assert_eq!(apply_wrappers("lone *star", &wrappers), "lone *star");
    }

    #[test]
    fn transform_receives_inner_capture() {
        let shout: WrapperFn = Box::new(|s: &str| s.to_uppercase());
        let wrappers = Wrappers::Named(vec![("!".to_owned(), shout)]);
        assert_eq!(apply_wrappers("so !loud! now", &wrappers), "so LOUD now");
    }
}
