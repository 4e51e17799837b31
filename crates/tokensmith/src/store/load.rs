//! Reading collection documents from disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::collection::Collection;
use super::error::LoadError;

/// Where each collection document lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sources {
    pub primitives: PathBuf,
    pub semantic: PathBuf,
    pub component: PathBuf,
}

impl Sources {
    pub fn path(&self, collection: Collection) -> &Path {
        match collection {
            Collection::Primitives => &self.primitives,
            Collection::Semantic => &self.semantic,
            Collection::Component => &self.component,
        }
    }

    /// Resolves relative paths against `base`.
    pub fn relative_to(&self, base: &Path) -> Sources {
        Sources {
            primitives: base.join(&self.primitives),
            semantic: base.join(&self.semantic),
            component: base.join(&self.component),
        }
    }
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            primitives: PathBuf::from("tokens/primitives.json"),
            semantic: PathBuf::from("tokens/semantic.json"),
            component: PathBuf::from("tokens/components.json"),
        }
    }
}

/// Document syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Json,
    Yaml,
}

impl Syntax {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Syntax::Yaml,
            _ => Syntax::Json,
        }
    }
}

/// Parses one collection document.
pub fn parse_document(
    collection: Collection,
    path: &Path,
    content: &str,
) -> Result<Value, LoadError> {
    let parsed = match Syntax::for_path(path) {
        Syntax::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        Syntax::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| LoadError::Parse {
        collection,
        path: path.to_path_buf(),
        message,
    })
}

/// Reads and parses one collection document.
pub fn load_document(collection: Collection, path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        collection,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(%collection, path = %path.display(), bytes = content.len(), "loaded token document");
    parse_document(collection, path, &content)
}
