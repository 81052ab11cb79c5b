//! Rendering fragment trees into engine syntax
//!
//! A render pass walks the tree once, pre-order and left to right, handing
//! out increasing indices to every sequence and named group it enters. Each
//! named group is emitted under an engine-level name made of its logical name
//! and its own index (`arg__3__`), so the same group may appear at several
//! places in one pattern without a name clash. Backreferences resolve to the
//! most recent group of the same logical name rendered earlier in the pass.
//!
//! Indices depend only on traversal position within one pass. Rendering a
//! subtree on its own and rendering it inside a larger tree generally gives
//! different engine-level names for the same node.

use std::collections::HashMap;
use std::fmt;

use crate::fragment::Fragment;

/// Separator between a logical name and its render index
pub const GROUP_DELIMITER: &str = "__";

/// Per-pass index allocator and name bindings
#[derive(Debug, Default)]
pub struct RenderContext {
    next_index: usize,
    bindings: HashMap<String, usize>,
}

impl RenderContext {
    /// Create a context for a new render pass
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next index
    fn advance(&mut self) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    /// Record that `name` was last rendered at `index`
    fn bind(&mut self, name: &str, index: usize) {
        self.bindings.insert(name.to_string(), index);
    }

    /// The index of the most recent group called `name` in this pass
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.bindings.get(name).copied()
    }

    /// Number of indices handed out so far
    pub fn indices_used(&self) -> usize {
        self.next_index
    }
}

/// Build the engine-level name for a logical name at a render index
pub fn mangle(name: &str, index: usize) -> String {
    format!("{name}{GROUP_DELIMITER}{index}{GROUP_DELIMITER}")
}

/// Recover the logical name from an engine-level name
///
/// Exactly one trailing `__<digits>__` suffix is removed. Names without such a
/// suffix are returned unchanged.
pub fn demangle(engine_name: &str) -> &str {
    let Some(rest) = engine_name.strip_suffix(GROUP_DELIMITER) else {
        return engine_name;
    };
    let Some(split) = rest.rfind(GROUP_DELIMITER) else {
        return engine_name;
    };
    let digits = &rest[split + GROUP_DELIMITER.len()..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return engine_name;
    }
    &rest[..split]
}

impl Fragment {
    /// Render this tree into a pattern string
    ///
    /// Every call starts a fresh pass with its own [`RenderContext`].
    pub fn render(&self) -> String {
        let mut context = RenderContext::new();
        let mut out = String::new();
        self.render_part(&mut context, &mut out);
        tracing::trace!("rendered pattern {out:?} ({} indices)", context.indices_used());
        out
    }

    /// Render this node into `out`, continuing the pass held by `context`
    pub fn render_part(&self, context: &mut RenderContext, out: &mut String) {
        match self {
            Fragment::Literal(text) => out.push_str(text),
            Fragment::Sequence(items) => {
                context.advance();
                out.push_str("(?:");
                for item in items {
                    item.render_part(context, out);
                }
                out.push(')');
            }
            Fragment::NamedGroup { name, body } => {
                let index = context.advance();
                context.bind(name, index);
                out.push_str(&format!("(?P<{}>", mangle(name, index)));
                body.render_part(context, out);
                out.push(')');
            }
            Fragment::Backref(name) => match context.resolve(name) {
                Some(index) => out.push_str(&format!("\\k<{}>", mangle(name, index))),
                // Left for the engine to reject at compile time.
                None => out.push_str(&format!("\\k<{name}>")),
            },
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::{backref, maybe, named, one_of, zero_or_more};
    use crate::seq;

    #[test]
    fn test_render_literal() {
        assert_eq!(Fragment::literal(r"\d+").render(), r"\d+");
    }

    #[test]
    fn test_render_sequence() {
        assert_eq!(seq!["a", "b"].render(), "(?:ab)");
    }

    #[test]
    fn test_render_nested_sequences() {
        assert_eq!(seq!["a", seq!["b", seq!["c"]]].render(), "(?:a(?:b(?:c)))");
    }

    #[test]
    fn test_render_named_group_uses_own_index() {
        // seq -> 0, group -> 1, group body -> 2
        assert_eq!(seq![named("x", "a")].render(), "(?:(?P<x__1__>(?:a)))");
    }

    #[test]
    fn test_render_backref_follows_group() {
        let frag = seq![named("q", "'"), "x", backref("q")];
        assert_eq!(frag.render(), r"(?:(?P<q__1__>(?:'))x\k<q__1__>)");
    }

    #[test]
    fn test_backref_resolves_to_latest_group() {
        let frag = seq![named("q", "a"), named("q", "b"), backref("q")];
        assert_eq!(
            frag.render(),
            r"(?:(?P<q__1__>(?:a))(?P<q__3__>(?:b))\k<q__3__>)"
        );
    }

    #[test]
    fn test_unresolved_backref_keeps_bare_name() {
        assert_eq!(seq![backref("q")].render(), r"(?:\k<q>)");
    }

    #[test]
    fn test_reused_group_gets_distinct_names() {
        let arg = seq![named("arg", r"\w+")];
        let frag = seq![arg.clone(), zero_or_more(seq![",", arg])];
        let rendered = frag.render();
        assert!(rendered.contains("(?P<arg__2__>"));
        assert!(rendered.contains("(?P<arg__7__>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let frag = seq![named("a", maybe(named("b", "x"))), one_of(["y", "z"])];
        assert_eq!(frag.render(), frag.render());
    }

    #[test]
    fn test_display_matches_render() {
        let frag = seq![named("a", "x")];
        assert_eq!(frag.to_string(), frag.render());
    }

    #[test]
    fn test_render_part_continues_pass() {
        let mut context = RenderContext::new();
        let mut out = String::new();
        seq!["a"].render_part(&mut context, &mut out);
        named("n", "b").render_part(&mut context, &mut out);
        assert_eq!(out, "(?:a)(?P<n__1__>(?:b))");
        assert_eq!(context.resolve("n"), Some(1));
        assert_eq!(context.indices_used(), 3);
    }

    #[test]
    fn test_mangle() {
        assert_eq!(mangle("quote", 12), "quote__12__");
    }

    #[test]
    fn test_demangle() {
        assert_eq!(demangle("quote__12__"), "quote");
        assert_eq!(demangle("arg_name__0__"), "arg_name");
    }

    #[test]
    fn test_demangle_strips_one_suffix() {
        assert_eq!(demangle(&mangle("x__3__", 7)), "x__3__");
        assert_eq!(demangle(&mangle("a__", 3)), "a__");
    }

    #[test]
    fn test_demangle_leaves_plain_names() {
        assert_eq!(demangle("plain"), "plain");
        assert_eq!(demangle("trail__"), "trail__");
        assert_eq!(demangle("x____"), "x____");
        assert_eq!(demangle("x__1a__"), "x__1a__");
    }
}
