//! Output variable naming.
//!
//! A token at path `["button", "bg"]` in the semantic layer becomes
//! `--token-semantic-button-bg`. Each layer has its own prefix, so identical
//! paths in different layers never produce the same identifier.

use crate::store::Collection;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "token";

const SEPARATOR: char = '-';

/// Maps token paths to flat CSS custom property names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNamer {
    namespace: String,
}

impl VariableNamer {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Prefix shared by every identifier of one layer, e.g. `--token-primitive-`.
    pub fn layer_prefix(&self, collection: Collection) -> String {
        if self.namespace.is_empty() {
            format!("--{}{}", collection.slug(), SEPARATOR)
        } else {
            format!(
                "--{}{}{}{}",
                normalize_segment(&self.namespace),
                SEPARATOR,
                collection.slug(),
                SEPARATOR
            )
        }
    }

    /// Full identifier for a token path in a layer.
    pub fn name<S: AsRef<str>>(&self, path: &[S], collection: Collection) -> String {
        let mut identifier = self.layer_prefix(collection);
        identifier.push_str(&normalize_path(path));
        identifier
    }
}

impl Default for VariableNamer {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Joins, lower-cases and restricts a path to `[a-z0-9-]`.
pub fn normalize_path<S: AsRef<str>>(path: &[S]) -> String {
    let joined = path
        .iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string());
    normalize_segment(&joined)
}

fn normalize_segment(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == SEPARATOR {
                c
            } else {
                SEPARATOR
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_identifier() {
        let namer = VariableNamer::default();
        assert_eq!(
            namer.name(&["button-bg"], Collection::Semantic),
            "--token-semantic-button-bg"
        );
    }

    #[test]
    fn joins_and_lowercases() {
        let namer = VariableNamer::default();
        assert_eq!(
            namer.name(&["Brand", "500"], Collection::Primitives),
            "--token-primitive-brand-500"
        );
    }

    #[test]
    fn replaces_foreign_characters() {
        assert_eq!(normalize_path(&["font", "size.lg"]), "font-size-lg");
        assert_eq!(normalize_path(&["space", "1/2"]), "space-1-2");
        assert_eq!(normalize_path(&["café"]), "caf-");
    }

    #[test]
    fn layers_never_share_identifiers() {
        let namer = VariableNamer::default();
        let path = ["surface"];
        let names: Vec<String> = Collection::ALL
            .iter()
            .map(|c| namer.name(&path, *c))
            .collect();
        assert_eq!(
            names,
            vec![
                "--token-primitive-surface",
                "--token-semantic-surface",
                "--token-component-surface"
            ]
        );
    }

    #[test]
    fn custom_namespace() {
        let namer = VariableNamer::new("Acme UI");
        assert_eq!(namer.layer_prefix(Collection::Component), "--acme-ui-component-");
    }

    #[test]
    fn empty_namespace_drops_segment() {
        let namer = VariableNamer::new("");
        assert_eq!(namer.name(&["gap"], Collection::Primitives), "--primitive-gap");
    }

    #[test]
    fn distinct_paths_can_collide() {
        assert_eq!(normalize_path(&["button", "bg"]), normalize_path(&["button-bg"]));
    }
}
