//! Depth-first walk over a token tree.

use serde_json::{Map, Value};

use crate::store::{is_reserved, kind_of, RecordError, TokenRecord, TYPE_KEY};

/// A leaf reached by [`leaves`]: either a readable record or the reason it
/// is not one.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<'a> {
    pub path: Vec<&'a str>,
    pub node: &'a Value,
    pub record: Result<TokenRecord<'a>, RecordError>,
}

impl Leaf<'_> {
    /// The path as written in references, e.g. `button.bg`.
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }
}

/// Collects every leaf of `tree` in document order.
///
/// Keys starting with `$` are record metadata and are never descended into.
pub fn leaves(tree: &Value) -> Vec<Leaf<'_>> {
    let mut out = Vec::new();
    if let Value::Object(map) = tree {
        let mut path = Vec::new();
        walk_namespace(map, &mut path, &mut out);
    }
    out
}

fn walk_namespace<'a>(map: &'a Map<String, Value>, path: &mut Vec<&'a str>, out: &mut Vec<Leaf<'a>>) {
    for (key, node) in map {
        if is_reserved(key) {
            continue;
        }
        path.push(key.as_str());
        visit(node, path, out);
        path.pop();
    }
}

fn visit<'a>(node: &'a Value, path: &mut Vec<&'a str>, out: &mut Vec<Leaf<'a>>) {
    match node {
        Value::Object(_) if TokenRecord::is_record(node) => out.push(Leaf {
            path: path.clone(),
            node,
            record: TokenRecord::from_node(node),
        }),
        Value::Object(map) => {
            let has_children = map.keys().any(|key| !is_reserved(key));
            if !has_children && map.contains_key(TYPE_KEY) {
                out.push(Leaf {
                    path: path.clone(),
                    node,
                    record: Err(RecordError::MissingValue),
                });
            } else {
                walk_namespace(map, path, out);
            }
        }
        other => out.push(Leaf {
            path: path.clone(),
            node,
            record: Err(RecordError::NotARecord {
                found: kind_of(other),
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walks_in_document_order() {
        let tree = json!({
            "brand": {
                "500": { "$value": "#538bff" },
                "100": { "$value": "#eef3ff" }
            },
            "space": { "4": { "$value": 16 } }
        });
        let paths: Vec<String> = leaves(&tree).iter().map(Leaf::dotted).collect();
        assert_eq!(paths, vec!["brand.500", "brand.100", "space.4"]);
    }

    #[test]
    fn skips_group_metadata() {
        let tree = json!({
            "color": {
                "$type": "color",
                "$description": "palette",
                "red": { "$value": "#f00" }
            }
        });
        let found = leaves(&tree);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].dotted(), "color.red");
        assert!(found[0].record.is_ok());
    }

    #[test]
    fn typed_leaf_without_value_is_malformed() {
        let tree = json!({ "broken": { "$type": "color" } });
        let found = leaves(&tree);
        assert_eq!(found[0].record, Err(RecordError::MissingValue));
        assert_eq!(found[0].node, &json!({ "$type": "color" }));
    }

    #[test]
    fn bare_scalar_is_malformed() {
        let tree = json!({ "gray": "#888" });
        let found = leaves(&tree);
        assert_eq!(
            found[0].record,
            Err(RecordError::NotARecord { found: "string" })
        );
    }

    #[test]
    fn empty_group_yields_nothing() {
        assert!(leaves(&json!({ "empty": {} })).is_empty());
    }

    #[test]
    fn non_object_root_yields_nothing() {
        assert!(leaves(&json!([1, 2])).is_empty());
    }
}
