//! Token records and their metadata fields.

use serde::Deserialize;
use serde_json::Value;

use super::collection::{Collection, UnknownCollection};

/// Prefix that marks record metadata keys (as opposed to namespace keys).
pub const MARKER: char = '$';

pub const VALUE_KEY: &str = "$value";
pub const TYPE_KEY: &str = "$type";
pub const DESCRIPTION_KEY: &str = "$description";
pub const COLLECTION_KEY: &str = "$collection";
pub const EXTENSIONS_KEY: &str = "$extensions";

/// Returns true for metadata keys that must never be walked as namespaces.
pub fn is_reserved(key: &str) -> bool {
    key.starts_with(MARKER)
}

/// Short description of a JSON node's shape, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declared semantic kind of a token.
///
/// Only used to pick an output format; resolution never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    Color,
    Dimension,
    Sizing,
    Spacing,
    Opacity,
    FontWeight,
    Duration,
    String,
    Other(String),
    Unspecified,
}

impl TokenType {
    pub fn parse(name: &str) -> Self {
        match name {
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            "sizing" => TokenType::Sizing,
            "spacing" => TokenType::Spacing,
            "opacity" => TokenType::Opacity,
            "fontWeight" | "fontWeights" => TokenType::FontWeight,
            "duration" => TokenType::Duration,
            "string" => TokenType::String,
            other => TokenType::Other(other.to_string()),
        }
    }

    /// Types whose numeric values carry a pixel unit.
    pub fn is_pixel(&self) -> bool {
        matches!(
            self,
            TokenType::Dimension | TokenType::Sizing | TokenType::Spacing
        )
    }
}

/// Deprecation record found under `$extensions`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Deprecation {
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default, rename = "replacedBy")]
    pub replaced_by: Option<String>,
}

impl Deprecation {
    /// Reads `$extensions.deprecation` or, failing that, the flat
    /// `$extensions.deprecated` form. Returns `None` unless the token is
    /// actually flagged.
    pub fn from_extensions(extensions: &Value) -> Option<Self> {
        let source = extensions.get("deprecation").unwrap_or(extensions);
        let deprecation = Deprecation::deserialize(source).ok()?;
        deprecation.deprecated.then_some(deprecation)
    }
}

/// Reasons a leaf cannot be read as a token record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record declares $type but has no $value")]
    MissingValue,
    #[error("$type must be a string, found {found}")]
    InvalidType { found: &'static str },
    #[error("$collection must be a string, found {found}")]
    InvalidCollection { found: &'static str },
    #[error(transparent)]
    UnknownCollection(#[from] UnknownCollection),
    #[error("expected a token record or namespace, found {found}")]
    NotARecord { found: &'static str },
}

/// Borrowed view of a leaf carrying `$value`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord<'a> {
    pub value: &'a Value,
    pub token_type: TokenType,
    /// Explicit `$collection` hint for references made by this record.
    pub collection: Option<Collection>,
    pub description: Option<&'a str>,
    pub deprecation: Option<Deprecation>,
}

impl<'a> TokenRecord<'a> {
    /// Whether `node` is a record rather than a namespace container.
    pub fn is_record(node: &Value) -> bool {
        node.as_object()
            .is_some_and(|map| map.contains_key(VALUE_KEY))
    }

    pub fn from_node(node: &'a Value) -> Result<Self, RecordError> {
        let map = match node {
            Value::Object(map) => map,
            other => {
                return Err(RecordError::NotARecord {
                    found: kind_of(other),
                })
            }
        };
        let value = map.get(VALUE_KEY).ok_or(RecordError::MissingValue)?;

        let token_type = match map.get(TYPE_KEY) {
            None => TokenType::Unspecified,
            Some(Value::String(name)) => TokenType::parse(name),
            Some(other) => {
                return Err(RecordError::InvalidType {
                    found: kind_of(other),
                })
            }
        };

        let collection = match map.get(COLLECTION_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.parse()?),
            Some(other) => {
                return Err(RecordError::InvalidCollection {
                    found: kind_of(other),
                })
            }
        };

        Ok(Self {
            value,
            token_type,
            collection,
            description: map.get(DESCRIPTION_KEY).and_then(Value::as_str),
            deprecation: map.get(EXTENSIONS_KEY).and_then(Deprecation::from_extensions),
        })
    }
}
