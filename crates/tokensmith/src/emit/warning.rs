//! Non-fatal emission warnings.

use crate::format::FormatError;
use crate::resolve::ResolveError;
use crate::store::{Collection, RecordError};

/// A token that was left out of the output, and why.
///
/// Warnings never stop a run; they are logged as they occur and collected
/// on the [`Emission`](super::Emission) for review.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("{collection} token '{path}' dropped: malformed record: {source}")]
    MalformedRecord {
        collection: Collection,
        path: String,
        #[source]
        source: RecordError,
    },

    #[error("{collection} token '{path}' dropped: {source}")]
    Unresolved {
        collection: Collection,
        path: String,
        identifier: String,
        #[source]
        source: ResolveError,
    },

    #[error("{collection} token '{path}' dropped: {source}")]
    Unformattable {
        collection: Collection,
        path: String,
        identifier: String,
        #[source]
        source: FormatError,
    },

    /// Two paths normalized to the same identifier; the first one was kept.
    #[error(
        "{collection} token '{path}' dropped: identifier {identifier} already emitted for '{first_path}'"
    )]
    DuplicateIdentifier {
        collection: Collection,
        path: String,
        identifier: String,
        first_path: String,
    },
}

impl Warning {
    pub fn collection(&self) -> Collection {
        match self {
            Warning::MalformedRecord { collection, .. }
            | Warning::Unresolved { collection, .. }
            | Warning::Unformattable { collection, .. }
            | Warning::DuplicateIdentifier { collection, .. } => *collection,
        }
    }

    /// Dotted source path of the dropped token.
    pub fn path(&self) -> &str {
        match self {
            Warning::MalformedRecord { path, .. }
            | Warning::Unresolved { path, .. }
            | Warning::Unformattable { path, .. }
            | Warning::DuplicateIdentifier { path, .. } => path,
        }
    }

    /// Whether the token was dropped because its reference chain loops.
    pub fn is_cycle(&self) -> bool {
        matches!(
            self,
            Warning::Unresolved {
                source: ResolveError::Cycle { .. },
                ..
            }
        )
    }
}
