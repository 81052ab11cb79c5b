//! Matching rendered fragments
//!
//! A [`Matcher`] holds one render pass compiled by `fancy_regex`. Engine-level
//! group names are demangled back to logical names when a match is decoded.

use fancy_regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::matches::Match;
use crate::render::demangle;

/// A compiled render pass
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    regex: Regex,
}

impl Matcher {
    /// Render `fragment` and compile the result
    pub fn new(fragment: &Fragment) -> Result<Self> {
        Self::from_pattern(fragment.render())
    }

    /// Compile an already rendered pattern
    pub fn from_pattern(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(source) => return Err(Error::Compile { pattern, source }),
        };
        tracing::debug!("compiled pattern {pattern:?}");
        Ok(Matcher { pattern, regex })
    }

    /// The rendered pattern
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Logical group names, in group order, without duplicates
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.regex.capture_names().flatten().map(demangle) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Check if the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.regex.is_match(text).map_err(Error::Runtime)
    }

    /// Find the first match in `text`
    pub fn search(&self, text: &str) -> Result<Option<Match>> {
        let captures = self.regex.captures(text).map_err(Error::Runtime)?;
        Ok(captures.map(|caps| self.decode(&caps)))
    }

    /// Find all non-overlapping matches in `text`, left to right
    pub fn finditer(&self, text: &str) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for captures in self.regex.captures_iter(text) {
            let captures = captures.map_err(Error::Runtime)?;
            matches.push(self.decode(&captures));
        }
        tracing::trace!("{} matches for {:?}", matches.len(), self.pattern);
        Ok(matches)
    }

    fn decode(&self, captures: &Captures<'_>) -> Match {
        let mut result = match captures.get(0) {
            Some(whole) => Match::new(whole.as_str(), whole.start(), whole.end()),
            None => Match::new("", 0, 0),
        };
        // Group order: a later group with the same logical name wins.
        for engine_name in self.regex.capture_names().flatten() {
            let value = captures.name(engine_name).map(|m| m.as_str().to_string());
            result.insert(demangle(engine_name), value);
        }
        result
    }
}

impl Fragment {
    /// Render and compile this fragment
    pub fn compile(&self) -> Result<Matcher> {
        Matcher::new(self)
    }

    /// Render, compile and check if this fragment matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.compile()?.is_match(text)
    }

    /// Render, compile and find the first match in `text`
    pub fn search(&self, text: &str) -> Result<Option<Match>> {
        self.compile()?.search(text)
    }

    /// Render, compile and find all non-overlapping matches in `text`
    pub fn finditer(&self, text: &str) -> Result<Vec<Match>> {
        self.compile()?.finditer(text)
    }
}
