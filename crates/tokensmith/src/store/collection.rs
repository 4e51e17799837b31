//! Collection identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One of the three layered token namespaces.
///
/// Layering runs one way: semantic tokens may point at primitives, component
/// tokens may point at semantic tokens and primitives, and primitives point
/// at nothing but other primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Primitives,
    Semantic,
    Component,
}

impl Collection {
    /// All collections in emission order.
    pub const ALL: [Collection; 3] = [
        Collection::Primitives,
        Collection::Semantic,
        Collection::Component,
    ];

    /// Lower-case name, as accepted in `$collection` hints.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Primitives => "primitives",
            Collection::Semantic => "semantic",
            Collection::Component => "component",
        }
    }

    /// Section heading used in generated documents.
    pub fn title(self) -> &'static str {
        match self {
            Collection::Primitives => "Primitives",
            Collection::Semantic => "Semantic",
            Collection::Component => "Component",
        }
    }

    /// Segment inserted into output identifiers for this layer.
    pub fn slug(self) -> &'static str {
        match self {
            Collection::Primitives => "primitive",
            Collection::Semantic => "semantic",
            Collection::Component => "component",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a collection name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection '{0}' (expected primitives, semantic or component)")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primitives" | "primitive" => Ok(Collection::Primitives),
            "semantic" | "semantic-tokens" => Ok(Collection::Semantic),
            "component" | "components" | "component-tokens" => Ok(Collection::Component),
            _ => Err(UnknownCollection(s.to_string())),
        }
    }
}
