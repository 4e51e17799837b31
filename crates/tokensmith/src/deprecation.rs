//! Deprecated token audit.
//!
//! Walks the semantic and component layers for records flagged
//! `deprecated: true` and reports each one under the identifier emission
//! would give it. Primitives are never audited. The audit has no effect on
//! which tokens are emitted.

use serde::Serialize;
use serde_json::Value;

use crate::emit::leaves;
use crate::naming::VariableNamer;
use crate::store::{Collection, Deprecation, EXTENSIONS_KEY};

/// A deprecated token and its suggested replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeprecatedToken {
    pub identifier: String,
    pub collection: Collection,
    pub path: String,
    /// `replacedBy` exactly as authored.
    #[serde(rename = "replacedBy")]
    pub replaced_by: Option<String>,
}

/// Lists every deprecated leaf, semantic layer first, in document order.
///
/// Each flagged leaf appears exactly once, even when two leaves share an
/// output identifier.
pub fn audit_deprecated(
    semantic: &Value,
    component: &Value,
    namer: &VariableNamer,
) -> Vec<DeprecatedToken> {
    let mut found = Vec::new();
    for (collection, tree) in [
        (Collection::Semantic, semantic),
        (Collection::Component, component),
    ] {
        for leaf in leaves(tree) {
            // Read from the raw node so a leaf dropped from emission is still audited.
            let Some(deprecation) = leaf
                .node
                .get(EXTENSIONS_KEY)
                .and_then(Deprecation::from_extensions)
            else {
                continue;
            };
            let token = DeprecatedToken {
                identifier: namer.name(&leaf.path, collection),
                collection,
                path: leaf.dotted(),
                replaced_by: deprecation.replaced_by.clone(),
            };
            tracing::info!(
                identifier = %token.identifier,
                replaced_by = token.replaced_by.as_deref().unwrap_or("-"),
                "deprecated token"
            );
            found.push(token);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn audit(semantic: Value, component: Value) -> Vec<DeprecatedToken> {
        audit_deprecated(&semantic, &component, &VariableNamer::default())
    }

    #[test]
    fn finds_flagged_tokens_in_order() {
        let found = audit(
            json!({
                "old-bg": {
                    "$value": "#fff",
                    "$extensions": { "deprecation": { "deprecated": true, "replacedBy": "surface.base" } }
                },
                "surface": { "base": { "$value": "#fff" } }
            }),
            json!({
                "card": {
                    "shadow": { "$value": "none", "$extensions": { "deprecated": true } }
                }
            }),
        );
        assert_eq!(
            found,
            vec![
                DeprecatedToken {
                    identifier: "--token-semantic-old-bg".into(),
                    collection: Collection::Semantic,
                    path: "old-bg".into(),
                    replaced_by: Some("surface.base".into()),
                },
                DeprecatedToken {
                    identifier: "--token-component-card-shadow".into(),
                    collection: Collection::Component,
                    path: "card.shadow".into(),
                    replaced_by: None,
                },
            ]
        );
    }

    #[test]
    fn replacement_is_kept_verbatim() {
        let found = audit(
            json!({
                "x": { "$value": 1, "$extensions": { "deprecated": true, "replacedBy": "{Surface.Base}" } }
            }),
            json!({}),
        );
        assert_eq!(found[0].replaced_by.as_deref(), Some("{Surface.Base}"));
    }

    #[test]
    fn colliding_identifiers_are_each_reported() {
        let flagged = json!({ "$value": 1, "$extensions": { "deprecated": true } });
        let found = audit(
            json!({ "button": { "bg": flagged.clone() }, "button-bg": flagged }),
            json!({}),
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].identifier, found[1].identifier);
    }

    #[test]
    fn malformed_flagged_leaves_are_still_reported() {
        let found = audit(
            json!({
                "old-fill": {
                    "$value": "#fff",
                    "$collection": "palette",
                    "$extensions": { "deprecated": true, "replacedBy": "new" }
                },
                "stub": {
                    "$type": "color",
                    "$extensions": { "deprecation": { "deprecated": true } }
                }
            }),
            json!({}),
        );
        let paths: Vec<&str> = found.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, vec!["old-fill", "stub"]);
        assert_eq!(found[0].replaced_by.as_deref(), Some("new"));
    }

    #[test]
    fn undeprecated_and_malformed_leaves_are_ignored() {
        let found = audit(
            json!({
                "fine": { "$value": 1 },
                "broken": { "$type": "color" },
                "loose": "#fff"
            }),
            json!({}),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn serializes_replaced_by_in_camel_case() {
        let token = DeprecatedToken {
            identifier: "--token-semantic-a".into(),
            collection: Collection::Semantic,
            path: "a".into(),
            replaced_by: Some("b".into()),
        };
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["replacedBy"], "b");
        assert_eq!(value["collection"], "semantic");
    }
}
