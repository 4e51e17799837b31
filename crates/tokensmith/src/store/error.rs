//! Collection loading errors.

use std::path::PathBuf;

use super::collection::Collection;

/// A collection document could not be loaded.
///
/// Always fatal: without a whole layer, the layers above it cannot be
/// resolved correctly.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {collection} tokens from {}: {source}", path.display())]
    Read {
        collection: Collection,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {collection} tokens in {}: {message}", path.display())]
    Parse {
        collection: Collection,
        path: PathBuf,
        message: String,
    },

    #[error("{collection} tokens must be an object at the document root, found {found}")]
    NotAnObject {
        collection: Collection,
        found: &'static str,
    },
}

impl LoadError {
    pub fn collection(&self) -> Collection {
        match self {
            LoadError::Read { collection, .. }
            | LoadError::Parse { collection, .. }
            | LoadError::NotAnObject { collection, .. } => *collection,
        }
    }
}
