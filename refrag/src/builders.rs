//! Composition helpers
//!
//! Small constructors for the shapes most patterns are made of. Every helper
//! wraps its operand in a sequence first, so a multi-token operand behaves as
//! one unit under a quantifier or inside an alternation.
//!
//! ```
//! use refrag::{backref, maybe, named, one_of, seq};
//!
//! let value = one_of([
//!     seq![named("quote", r#"'|""#), named("text", ".*?"), backref("quote")],
//!     named("bare", r"\w+"),
//! ]);
//! let pattern = seq![named("key", r"\w+"), maybe(seq!["=", value])];
//! let m = pattern.search("k='v'").unwrap().unwrap();
//! assert_eq!(m.group("text"), Some("v"));
//! ```

use crate::fragment::Fragment;

/// Treat `item` as a sequence
///
/// An existing sequence is returned unchanged; anything else becomes a
/// one-element sequence.
pub fn wrap(item: impl Into<Fragment>) -> Fragment {
    item.into().into_sequence()
}

/// Concatenate `items` in order
pub fn sequence<I, T>(items: I) -> Fragment
where
    I: IntoIterator<Item = T>,
    T: Into<Fragment>,
{
    Fragment::from_many(items)
}

/// Match `item` zero or one time
pub fn maybe(item: impl Into<Fragment>) -> Fragment {
    quantified(item, "?")
}

/// Match `item` zero or more times
pub fn zero_or_more(item: impl Into<Fragment>) -> Fragment {
    quantified(item, "*")
}

/// Match `item` one or more times
pub fn one_or_more(item: impl Into<Fragment>) -> Fragment {
    quantified(item, "+")
}

fn quantified(item: impl Into<Fragment>, quantifier: &str) -> Fragment {
    Fragment::Sequence(vec![wrap(item), Fragment::literal(quantifier)])
}

/// Match the first of `alternatives` that succeeds
///
/// Alternatives are tried in the order given.
pub fn one_of<I, T>(alternatives: I) -> Fragment
where
    I: IntoIterator<Item = T>,
    T: Into<Fragment>,
{
    let mut parts = vec![Fragment::literal("(?:")];
    for (i, alternative) in alternatives.into_iter().enumerate() {
        if i > 0 {
            parts.push(Fragment::literal("|"));
        }
        parts.push(wrap(alternative));
    }
    parts.push(Fragment::literal(")"));
    Fragment::Sequence(parts)
}

/// Capture `item` under the logical name `name`
pub fn named(name: impl Into<String>, item: impl Into<Fragment>) -> Fragment {
    Fragment::named_group(name, wrap(item))
}

/// Match the text captured by the most recent group called `name`
pub fn backref(name: impl Into<String>) -> Fragment {
    Fragment::backref(name)
}
