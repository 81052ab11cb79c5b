//! Refrag
//!
//! Composable regex fragments with collision-free named groups and
//! backreferences.
//!
//! Patterns are built as trees of [`Fragment`]s. A named group may be reused
//! at any number of places in one pattern: every render pass gives each
//! occurrence its own engine-level name, and matches report captures under
//! the original logical names again.
//!
//! ```
//! use refrag::{named, seq, zero_or_more};
//!
//! let word = named("word", "[a-z]+");
//! let words = seq![word.clone(), zero_or_more(seq![" ", word.clone()])];
//!
//! let m = words.search("one two three").unwrap().unwrap();
//! assert_eq!(m.as_str(), "one two three");
//! assert_eq!(m.group("word"), Some("three"));
//!
//! let each: Vec<_> = word
//!     .finditer(m.as_str())
//!     .unwrap()
//!     .into_iter()
//!     .map(|w| w.as_str().to_string())
//!     .collect();
//! assert_eq!(each, ["one", "two", "three"]);
//! ```

pub mod builders;
pub mod error;
pub mod fragment;
pub mod matcher;
pub mod matches;
pub mod render;

pub use builders::{backref, maybe, named, one_of, one_or_more, sequence, wrap, zero_or_more};
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use matcher::Matcher;
pub use matches::{GroupKey, Match};
pub use render::{GROUP_DELIMITER, RenderContext, demangle, mangle};
