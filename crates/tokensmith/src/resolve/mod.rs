//! Reference resolution across the three token layers.
//!
//! This module provides:
//!
//! - [`Reference`]: the `{path}` syntax
//! - [`Scope`]: which layer a value lives in, plus an optional collection hint
//! - [`Resolver`]: follows references until a literal is reached
//! - [`Literal`]: the resolved value
//! - [`ResolveError`]: non-fatal resolution failures
//!
//! # Lookup order
//!
//! Each hop searches collections in the order given by [`Scope::search_order`].
//! Within one collection the path is tried as dotted segments and then as
//! hyphenated segments before moving to the next collection.
//!
//! # Termination
//!
//! Every node passed through is remembered, so a chain that revisits a node
//! fails with [`ResolveError::Cycle`]. Chains longer than the hop limit fail
//! with [`ResolveError::DepthExceeded`].

mod error;
mod reference;

pub use error::ResolveError;
pub use reference::Reference;

use serde_json::Value;

use crate::store::{Collection, TokenRecord, TokenStore};

/// Default hop limit for a single reference chain.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// A fully resolved token value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Number(f64),
    Bool(bool),
    /// An object or array. Resolution hands these on; formatting rejects them.
    Composite(Value),
}

impl Literal {
    /// Converts a non-reference JSON value. `null` has no literal form.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Literal::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Literal::Number),
            Value::String(s) => Some(Literal::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Some(Literal::Composite(value.clone())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Text(_) => "string",
            Literal::Number(_) => "number",
            Literal::Bool(_) => "boolean",
            Literal::Composite(Value::Array(_)) => "array",
            Literal::Composite(_) => "object",
        }
    }
}

/// Resolution context for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    /// Layer the value being resolved lives in.
    pub layer: Collection,
    /// Explicit `$collection` hint in force, if any.
    pub hint: Option<Collection>,
}

impl Scope {
    pub fn new(layer: Collection) -> Self {
        Self { layer, hint: None }
    }

    pub fn with_hint(mut self, hint: Option<Collection>) -> Self {
        self.hint = hint;
        self
    }

    /// Collections to search, in order.
    ///
    /// | Scope | Order |
    /// |-------|-------|
    /// | hint present | hint, then the rest of semantic, primitives, component |
    /// | primitives layer | primitives |
    /// | semantic layer | semantic, primitives |
    /// | component layer | semantic, primitives, component |
    pub fn search_order(&self) -> Vec<Collection> {
        const FALLBACK: [Collection; 3] = [
            Collection::Semantic,
            Collection::Primitives,
            Collection::Component,
        ];

        if let Some(hint) = self.hint {
            let mut order = vec![hint];
            order.extend(FALLBACK.into_iter().filter(|c| *c != hint));
            return order;
        }

        match self.layer {
            Collection::Primitives => vec![Collection::Primitives],
            Collection::Semantic => vec![Collection::Semantic, Collection::Primitives],
            Collection::Component => FALLBACK.to_vec(),
        }
    }
}

/// A node found by following a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located<'a> {
    pub collection: Collection,
    pub node: &'a Value,
}

/// One hop of a reference chain, kept for cycle detection and reporting.
#[derive(Debug, Clone)]
struct Hop<'a> {
    label: String,
    node: &'a Value,
}

/// Follows references against an immutable [`TokenStore`].
///
/// Resolution is a pure function of the store: the same value and scope
/// always give the same result.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokensmith::resolve::{Literal, Resolver, Scope};
/// use tokensmith::store::{Collection, TokenStore};
///
/// let store = TokenStore::new(
///     json!({ "brand": { "500": { "$value": "#538bff", "$type": "color" } } }),
///     json!({ "button-bg": { "$value": "{brand.500}", "$type": "color" } }),
///     json!({}),
/// )
/// .unwrap();
///
/// let resolver = Resolver::new(&store);
/// let literal = resolver
///     .resolve(&json!("{button-bg}"), Scope::new(Collection::Component))
///     .unwrap();
/// assert_eq!(literal, Literal::Text("#538bff".into()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a TokenStore,
    max_depth: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a TokenStore) -> Self {
        Self {
            store,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the hop limit for a single chain.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Resolves a raw value to a literal.
    ///
    /// Literals come back unchanged. References are followed hop by hop.
    pub fn resolve(&self, raw: &Value, scope: Scope) -> Result<Literal, ResolveError> {
        let mut trail = Vec::new();
        self.resolve_at(raw, scope, 0, &mut trail)
    }

    /// Resolves a record found in `layer`, honoring its own `$collection` hint.
    pub fn resolve_record(
        &self,
        record: &TokenRecord<'_>,
        layer: Collection,
    ) -> Result<Literal, ResolveError> {
        self.resolve(record.value, Scope::new(layer).with_hint(record.collection))
    }

    /// Finds the node a reference points at, without following it further.
    pub fn locate(&self, reference: &Reference<'_>, scope: Scope) -> Option<Located<'a>> {
        let notations = reference.notations();
        for collection in scope.search_order() {
            for segments in &notations {
                if let Some(node) = self.store.lookup(collection, segments) {
                    return Some(Located { collection, node });
                }
            }
        }
        None
    }

    fn resolve_at(
        &self,
        raw: &Value,
        scope: Scope,
        depth: usize,
        trail: &mut Vec<Hop<'a>>,
    ) -> Result<Literal, ResolveError> {
        let Some(reference) = Reference::from_value(raw) else {
            return Literal::from_value(raw).ok_or(ResolveError::NullValue);
        };

        if depth >= self.max_depth {
            return Err(ResolveError::DepthExceeded {
                reference: reference.path().to_string(),
                max_depth: self.max_depth,
            });
        }

        let located = self
            .locate(&reference, scope)
            .ok_or_else(|| ResolveError::NotFound {
                reference: reference.path().to_string(),
                searched: scope.search_order(),
            })?;

        let label = format!("{}:{}", located.collection, reference.path());
        if trail.iter().any(|hop| std::ptr::eq(hop.node, located.node)) {
            let mut chain: Vec<String> = trail.iter().map(|hop| hop.label.clone()).collect();
            chain.push(label);
            return Err(ResolveError::Cycle { chain });
        }
        tracing::trace!(hop = %label, depth, "following reference");
        trail.push(Hop {
            label,
            node: located.node,
        });

        let next = Scope {
            layer: located.collection,
            hint: scope.hint,
        };

        if TokenRecord::is_record(located.node) {
            let record = TokenRecord::from_node(located.node).map_err(|source| {
                ResolveError::MalformedTarget {
                    reference: reference.path().to_string(),
                    source,
                }
            })?;
            let next = next.with_hint(record.collection.or(scope.hint));
            return self.resolve_at(record.value, next, depth + 1, trail);
        }

        if located.node.is_object() {
            return Err(ResolveError::NotAToken {
                reference: reference.path().to_string(),
            });
        }

        self.resolve_at(located.node, next, depth + 1, trail)
    }
}
