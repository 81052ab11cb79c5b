//! Pattern fragments
//!
//! A [`Fragment`] is one node of a composable pattern tree. Trees are built
//! from the helpers in [`crate::builders`] and turned into engine syntax by
//! [`Fragment::render`].
//!
//! Literal text is inserted verbatim. Nothing is escaped, so a literal may
//! carry any engine syntax the caller wants (`\s*`, `[^\]]+`, ...).

/// A node in a pattern tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Raw pattern text, emitted as-is
    Literal(String),

    /// Ordered children, emitted inside a non-capturing group `(?:...)`
    Sequence(Vec<Fragment>),

    /// A capturing group with a logical name
    NamedGroup {
        /// The caller-facing name of the group
        name: String,
        /// The pattern inside the group
        body: Box<Fragment>,
    },

    /// A reference to the text captured by an earlier group of the same name
    Backref(String),
}

impl Fragment {
    /// Create a literal fragment
    pub fn literal(text: impl Into<String>) -> Self {
        Fragment::Literal(text.into())
    }

    /// Create a one-element sequence around `item`
    pub fn from_one(item: impl Into<Fragment>) -> Self {
        Fragment::Sequence(vec![item.into()])
    }

    /// Create a sequence from an ordered collection of items
    pub fn from_many<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Fragment>,
    {
        Fragment::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Create a named group
    pub fn named_group(name: impl Into<String>, body: impl Into<Fragment>) -> Self {
        Fragment::NamedGroup {
            name: name.into(),
            body: Box::new(body.into()),
        }
    }

    /// Create a backreference to a logical group name
    pub fn backref(name: impl Into<String>) -> Self {
        Fragment::Backref(name.into())
    }

    /// The logical name of a named group or backreference
    pub fn name(&self) -> Option<&str> {
        match self {
            Fragment::NamedGroup { name, .. } | Fragment::Backref(name) => Some(name),
            Fragment::Literal(_) | Fragment::Sequence(_) => None,
        }
    }

    /// Direct children of this node
    pub fn children(&self) -> &[Fragment] {
        match self {
            Fragment::Sequence(items) => items,
            Fragment::NamedGroup { body, .. } => std::slice::from_ref(body),
            Fragment::Literal(_) | Fragment::Backref(_) => &[],
        }
    }

    /// Whether this is a [`Fragment::Literal`]
    pub fn is_literal(&self) -> bool {
        matches!(self, Fragment::Literal(_))
    }

    /// Whether this is a [`Fragment::Sequence`]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Fragment::Sequence(_))
    }

    /// Whether this is a [`Fragment::NamedGroup`]
    pub fn is_named_group(&self) -> bool {
        matches!(self, Fragment::NamedGroup { .. })
    }

    /// Whether this is a [`Fragment::Backref`]
    pub fn is_backref(&self) -> bool {
        matches!(self, Fragment::Backref(_))
    }

    /// Wrap into a sequence unless this already is one
    pub(crate) fn into_sequence(self) -> Self {
        match self {
            Fragment::Sequence(_) => self,
            other => Fragment::from_one(other),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(text)
    }
}

impl From<&String> for Fragment {
    fn from(text: &String) -> Self {
        Fragment::Literal(text.clone())
    }
}

impl From<char> for Fragment {
    fn from(c: char) -> Self {
        Fragment::Literal(c.to_string())
    }
}

impl From<&Fragment> for Fragment {
    fn from(fragment: &Fragment) -> Self {
        fragment.clone()
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
    fn from(items: Vec<T>) -> Self {
        Fragment::from_many(items)
    }
}

impl<T: Into<Fragment>, const N: usize> From<[T; N]> for Fragment {
    fn from(items: [T; N]) -> Self {
        Fragment::from_many(items)
    }
}

/// Build a [`Fragment::Sequence`] from a mixed list of strings and fragments
///
/// ```
/// use refrag::{named, seq};
///
/// let pair = seq![named("key", r"\w+"), "=", named("value", r"\w+")];
/// assert!(pair.is_sequence());
/// ```
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        $crate::Fragment::Sequence(vec![$($crate::Fragment::from($item)),*])
    };
}
