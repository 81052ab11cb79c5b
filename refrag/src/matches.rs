//! Decoded match results

use std::collections::HashMap;
use std::ops::Range;

/// Key for looking up a capture in a [`Match`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey<'a> {
    /// The whole match (index `0`)
    Whole,
    /// A numeric index; only `0` is meaningful
    Index(usize),
    /// A logical group name
    Name(&'a str),
}

impl From<usize> for GroupKey<'_> {
    fn from(index: usize) -> Self {
        if index == 0 {
            GroupKey::Whole
        } else {
            GroupKey::Index(index)
        }
    }
}

impl<'a> From<&'a str> for GroupKey<'a> {
    fn from(name: &'a str) -> Self {
        GroupKey::Name(name)
    }
}

impl<'a> From<&'a String> for GroupKey<'a> {
    fn from(name: &'a String) -> Self {
        GroupKey::Name(name)
    }
}

/// A successful match, with captures keyed by logical name
///
/// When several engine groups share a logical name, the one that comes last
/// in the pattern decides the stored value, even if it did not participate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    text: String,
    start: usize,
    end: usize,
    groups: HashMap<String, Option<String>>,
}

impl Match {
    pub(crate) fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Match {
            text: text.into(),
            start,
            end,
            groups: HashMap::new(),
        }
    }

    /// Store a capture, replacing any earlier value for the same name
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.groups.insert(name.into(), value);
    }

    /// The whole matched text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset where the match starts in the subject
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the end of the match
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match in the subject
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Look up a capture
    ///
    /// Returns `None` for a group that did not take part in the match and for
    /// a name the pattern does not define. Index `0` is the whole match.
    ///
    /// ```
    /// use refrag::{maybe, named, seq};
    ///
    /// let frag = seq![named("word", r"\w+"), maybe(named("bang", "!"))];
    /// let m = frag.search("hi").unwrap().unwrap();
    /// assert_eq!(m.group(0), Some("hi"));
    /// assert_eq!(m.group("word"), Some("hi"));
    /// assert_eq!(m.group("bang"), None);
    /// assert_eq!(m.group("missing"), None);
    /// ```
    pub fn group<'k>(&self, key: impl Into<GroupKey<'k>>) -> Option<&str> {
        match key.into() {
            GroupKey::Whole | GroupKey::Index(0) => Some(&self.text),
            GroupKey::Index(_) => None,
            GroupKey::Name(name) => self.groups.get(name)?.as_deref(),
        }
    }

    /// Whether the pattern defines a group with this logical name
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Logical names defined by the pattern, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// All captures as `(logical name, value)` pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.groups
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}
