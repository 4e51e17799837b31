//! Reference syntax: `{path.to.token}` or `{path-to-token}`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([^{}\s]+)\}$").expect("reference pattern compiles"));

/// A symbolic pointer to another token.
///
/// Any string of the exact form `{` path `}` is a reference; every other
/// string is a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    path: &'a str,
}

impl<'a> Reference<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let captures = REFERENCE.captures(raw)?;
        let path = captures.get(1)?.as_str();
        Some(Self { path })
    }

    /// Parses a reference out of a JSON string value.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_str().and_then(Self::parse)
    }

    /// The path between the braces.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Candidate segment lists, in lookup order.
    ///
    /// The path is first read as dot-separated segments, then as
    /// hyphen-separated ones; the second reading is dropped when it would be
    /// identical to the first.
    pub fn notations(&self) -> Vec<Vec<&'a str>> {
        let dotted: Vec<&str> = self.path.split('.').collect();
        let hyphenated: Vec<&str> = self.path.split('-').collect();
        if hyphenated == dotted {
            vec![dotted]
        } else {
            vec![dotted, hyphenated]
        }
    }
}
