//! Token store: the three layered collections held for one run.
//!
//! This module provides:
//!
//! - [`Collection`]: identifier for the primitives, semantic and component layers
//! - [`TokenStore`]: immutable snapshot of all three token trees
//! - [`TokenRecord`]: borrowed view of a leaf carrying `$value`
//! - [`LoadError`]: fatal failure to load a collection document
//!
//! Trees are plain `serde_json::Value`s with insertion order preserved, so
//! "first encountered" always means first in the source document.

mod collection;
mod error;
mod load;
mod record;

pub use collection::{Collection, UnknownCollection};
pub use error::LoadError;
pub use load::{load_document, parse_document, Sources};
pub use record::{
    is_reserved, kind_of, Deprecation, RecordError, TokenRecord, TokenType, COLLECTION_KEY,
    DESCRIPTION_KEY, EXTENSIONS_KEY, MARKER, TYPE_KEY, VALUE_KEY,
};

use serde_json::Value;

/// Immutable snapshot of the three collections.
///
/// Built once per run and passed by reference to everything that resolves,
/// formats or walks tokens. Nothing caches across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStore {
    primitives: Value,
    semantic: Value,
    component: Value,
}

impl TokenStore {
    /// Builds a store from already-parsed trees.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotAnObject`] if any root is not an object.
    pub fn new(primitives: Value, semantic: Value, component: Value) -> Result<Self, LoadError> {
        for (collection, tree) in [
            (Collection::Primitives, &primitives),
            (Collection::Semantic, &semantic),
            (Collection::Component, &component),
        ] {
            if !tree.is_object() {
                return Err(LoadError::NotAnObject {
                    collection,
                    found: kind_of(tree),
                });
            }
        }
        Ok(Self {
            primitives,
            semantic,
            component,
        })
    }

    /// Loads all three documents. Any failure aborts the whole load.
    pub fn load(sources: &Sources) -> Result<Self, LoadError> {
        let primitives = load_document(Collection::Primitives, sources.path(Collection::Primitives))?;
        let semantic = load_document(Collection::Semantic, sources.path(Collection::Semantic))?;
        let component = load_document(Collection::Component, sources.path(Collection::Component))?;
        Self::new(primitives, semantic, component)
    }

    /// A store holding only primitives; the other layers are empty.
    pub fn primitives_only(primitives: Value) -> Result<Self, LoadError> {
        Self::new(primitives, empty_tree(), empty_tree())
    }

    pub fn tree(&self, collection: Collection) -> &Value {
        match collection {
            Collection::Primitives => &self.primitives,
            Collection::Semantic => &self.semantic,
            Collection::Component => &self.component,
        }
    }

    /// Follows `segments` from the root of `collection`.
    ///
    /// Reserved `$` keys never match, so record metadata is not addressable
    /// as a namespace.
    pub fn lookup<S: AsRef<str>>(&self, collection: Collection, segments: &[S]) -> Option<&Value> {
        let mut node = self.tree(collection);
        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() || is_reserved(segment) {
                return None;
            }
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }
}

fn empty_tree() -> Value {
    Value::Object(serde_json::Map::new())
}
