//! Fatal run errors.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::emit::RenderError;
use crate::store::LoadError;

/// Anything that stops a run. Per-token problems are
/// [`Warning`](crate::emit::Warning)s instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
