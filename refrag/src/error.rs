//! Error types for fragment compilation and matching
//!
//! Building and rendering fragments never fails. Errors only appear once a
//! rendered pattern reaches the regex engine: either it refuses to compile the
//! pattern, or it gives up while matching (for example on a backtrack limit).

use thiserror::Error;

/// The main error type for compiled fragments
#[derive(Error, Debug)]
pub enum Error {
    /// The engine rejected the rendered pattern
    #[error("failed to compile pattern `{pattern}`: {source}")]
    Compile {
        /// The rendered pattern handed to the engine
        pattern: String,
        /// The engine's diagnostic
        source: fancy_regex::Error,
    },

    /// The engine failed while running a match
    #[error("match failed: {0}")]
    Runtime(#[source] fancy_regex::Error),
}

impl Error {
    /// The rendered pattern, if this is a compilation failure
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Error::Compile { pattern, .. } => Some(pattern),
            Error::Runtime(_) => None,
        }
    }
}

/// Result type alias for compile and match operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_error(pattern: &str) -> fancy_regex::Error {
        fancy_regex::Regex::new(pattern).unwrap_err()
    }

    #[test]
    fn test_compile_error_display() {
        let err = Error::Compile {
            pattern: "(?:a".to_string(),
            source: engine_error("(?:a"),
        };
        assert!(err.to_string().starts_with("failed to compile pattern `(?:a`: "));
        assert_eq!(err.pattern(), Some("(?:a"));
    }

    #[test]
    fn test_compile_error_has_source() {
        let err = Error::Compile {
            pattern: "(".to_string(),
            source: engine_error("("),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_runtime_error_display() {
        let err = Error::Runtime(engine_error("("));
        assert!(err.to_string().starts_with("match failed: "));
        assert_eq!(err.pattern(), None);
    }
}
