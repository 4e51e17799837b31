//! Emission pipeline: from a token store to one output document.
//!
//! This module provides:
//!
//! - [`Emitter`]: walks, resolves, formats and names every token
//! - [`Emission`]: the three emitted sections plus warnings and the deprecation audit
//! - [`Warning`]: why a token was left out
//! - [`render`] and [`write_document`]: serialization and the final write
//!
//! # Pipeline
//!
//! Collections are processed in the fixed order primitives, semantic,
//! component. For each leaf, in document order:
//!
//! 1. read the record (malformed records are dropped)
//! 2. resolve its value (unresolvable values are dropped)
//! 3. format it for its declared type (composite or empty values are dropped)
//! 4. name it, keeping only the first token to claim an identifier
//!
//! Every dropped token produces one [`Warning`]; none of them stop the run.

mod output;
mod render;
mod walk;
mod warning;

pub use output::write_document;
pub use render::{render, OutputFormat, RenderError, RenderOptions};
pub use walk::{leaves, Leaf};
pub use warning::Warning;

use std::collections::HashMap;

use serde::Serialize;

use crate::deprecation::{audit_deprecated, DeprecatedToken};
use crate::format::format_literal;
use crate::naming::VariableNamer;
use crate::resolve::Resolver;
use crate::store::{Collection, TokenStore};

/// One emitted variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub identifier: String,
    pub value: String,
    /// Dotted source path.
    pub path: String,
    pub description: Option<String>,
}

/// The emitted variables of one layer, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub collection: Collection,
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

impl Section {
    fn new(collection: Collection) -> Self {
        Self {
            collection,
            title: collection.title(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of one emission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    /// Primitives, semantic and component sections, in that order.
    pub sections: Vec<Section>,
    pub deprecated: Vec<DeprecatedToken>,
    pub warnings: Vec<Warning>,
}

impl Emission {
    pub fn section(&self, collection: Collection) -> Option<&Section> {
        self.sections.iter().find(|s| s.collection == collection)
    }

    /// Looks up an emitted value by identifier.
    pub fn value(&self, identifier: &str) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .find(|e| e.identifier == identifier)
            .map(|e| e.value.as_str())
    }

    pub fn token_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Drives emission over a [`TokenStore`].
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokensmith::emit::Emitter;
/// use tokensmith::store::TokenStore;
///
/// let store = TokenStore::new(
///     json!({ "brand": { "500": { "$value": "#538bff", "$type": "color" } } }),
///     json!({ "button-bg": { "$value": "{brand.500}", "$type": "color" } }),
///     json!({}),
/// )
/// .unwrap();
///
/// let emission = Emitter::new(&store).emit();
/// assert_eq!(emission.value("--token-semantic-button-bg"), Some("#538bff"));
/// ```
#[derive(Debug, Clone)]
pub struct Emitter<'a> {
    store: &'a TokenStore,
    resolver: Resolver<'a>,
    namer: VariableNamer,
}

impl<'a> Emitter<'a> {
    pub fn new(store: &'a TokenStore) -> Self {
        Self {
            store,
            resolver: Resolver::new(store),
            namer: VariableNamer::default(),
        }
    }

    pub fn with_namer(mut self, namer: VariableNamer) -> Self {
        self.namer = namer;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.resolver = self.resolver.with_max_depth(max_depth);
        self
    }

    /// Runs the whole pipeline. Never fails; problems become warnings.
    pub fn emit(&self) -> Emission {
        let mut claimed: HashMap<String, String> = HashMap::new();
        let mut warnings = Vec::new();

        let sections = Collection::ALL
            .into_iter()
            .map(|collection| self.emit_collection(collection, &mut claimed, &mut warnings))
            .collect();

        let deprecated = audit_deprecated(
            self.store.tree(Collection::Semantic),
            self.store.tree(Collection::Component),
            &self.namer,
        );

        Emission {
            sections,
            deprecated,
            warnings,
        }
    }

    fn emit_collection(
        &self,
        collection: Collection,
        claimed: &mut HashMap<String, String>,
        warnings: &mut Vec<Warning>,
    ) -> Section {
        let mut section = Section::new(collection);
        let tree = self.store.tree(collection);

        for leaf in leaves(tree) {
            let path = leaf.dotted();
            let record = match leaf.record {
                Ok(record) => record,
                Err(source) => {
                    report(
                        warnings,
                        Warning::MalformedRecord {
                            collection,
                            path,
                            source,
                        },
                    );
                    continue;
                }
            };
            let identifier = self.namer.name(&leaf.path, collection);

            let literal = match self.resolver.resolve_record(&record, collection) {
                Ok(literal) => literal,
                Err(source) => {
                    report(
                        warnings,
                        Warning::Unresolved {
                            collection,
                            path,
                            identifier,
                            source,
                        },
                    );
                    continue;
                }
            };

            let value = match format_literal(&literal, &record.token_type) {
                Ok(value) => value,
                Err(source) => {
                    report(
                        warnings,
                        Warning::Unformattable {
                            collection,
                            path,
                            identifier,
                            source,
                        },
                    );
                    continue;
                }
            };

            if let Some(first_path) = claimed.get(&identifier) {
                report(
                    warnings,
                    Warning::DuplicateIdentifier {
                        collection,
                        path,
                        identifier,
                        first_path: first_path.clone(),
                    },
                );
                continue;
            }
            claimed.insert(identifier.clone(), path.clone());

            section.entries.push(Entry {
                identifier,
                value,
                path,
                description: record.description.map(str::to_string),
            });
        }

        tracing::debug!(
            %collection,
            emitted = section.len(),
            max_depth = self.resolver.max_depth(),
            "collection emitted"
        );
        section
    }
}

fn report(warnings: &mut Vec<Warning>, warning: Warning) {
    tracing::warn!(collection = %warning.collection(), "{}", warning);
    warnings.push(warning);
}
