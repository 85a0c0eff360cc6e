//! # Audit Target Model
//!
//! Defines the page URL accepted by every audit tool.
//!
//! Validation is deliberately shallow: only the literal `http://` or
//! `https://` prefix is checked, and the string is otherwise carried
//! verbatim. The security audit compares captured response URLs against
//! this exact string, so no normalization may happen here.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A caller-supplied page URL with an accepted scheme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrlTarget(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("URL must start with http:// or https://: {0}")]
    MissingScheme(String),
}

impl UrlTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UrlTarget {
    type Err = TargetError;

    /// The prefix check is case-sensitive; `HTTP://` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(Self(s.to_owned()))
        } else {
            Err(TargetError::MissingScheme(s.to_owned()))
        }
    }
}

impl fmt::Display for UrlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(UrlTarget::from_str("http://example.com").is_ok());
        assert!(UrlTarget::from_str("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn rejects_missing_or_foreign_scheme() {
        assert!(UrlTarget::from_str("example.com").is_err());
        assert!(UrlTarget::from_str("ftp://example.com").is_err());
        assert!(UrlTarget::from_str("").is_err());
    }

    #[test]
    fn prefix_check_is_case_sensitive() {
        assert!(UrlTarget::from_str("HTTP://example.com").is_err());
        assert!(UrlTarget::from_str("Https://example.com").is_err());
    }

    #[test]
    fn carries_the_input_verbatim() {
        let url = UrlTarget::from_str("https://example.com:8080/a b").unwrap();
        assert_eq!(url.as_str(), "https://example.com:8080/a b");
        assert_eq!(url.to_string(), "https://example.com:8080/a b");
    }
}
