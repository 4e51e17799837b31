//! Resolution errors.
//!
//! None of these abort a run: the emission pipeline turns each one into a
//! warning and drops the affected token.

use crate::store::{Collection, RecordError};

/// Why a value could not be resolved to a literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No searched collection contains the referenced path.
    #[error("reference '{{{reference}}}' not found in {}", join_collections(.searched))]
    NotFound {
        reference: String,
        searched: Vec<Collection>,
    },

    /// The reference chain revisits a token it already passed through.
    #[error("reference cycle detected: {}", .chain.join(" -> "))]
    Cycle { chain: Vec<String> },

    /// The chain is longer than the configured hop limit.
    #[error("reference '{{{reference}}}' exceeds the maximum depth of {max_depth} hops")]
    DepthExceeded { reference: String, max_depth: usize },

    /// The reference lands on a namespace container rather than a token.
    #[error("reference '{{{reference}}}' points at a namespace, not a token")]
    NotAToken { reference: String },

    /// The referenced record itself is malformed.
    #[error("reference '{{{reference}}}' points at a malformed record: {source}")]
    MalformedTarget {
        reference: String,
        #[source]
        source: RecordError,
    },

    #[error("token value is null")]
    NullValue,
}

fn join_collections(collections: &[Collection]) -> String {
    collections
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}
