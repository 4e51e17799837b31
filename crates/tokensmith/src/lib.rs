//! Design-token resolution and CSS custom property emission.
//!
//! Tokens live in three layered collections: primitives hold raw values,
//! semantic tokens reference primitives, and component tokens reference
//! either. `tokensmith` resolves every reference down to a literal, formats
//! it for its declared type, and emits one custom property per token:
//!
//! ```text
//! {brand.500}  ->  --token-semantic-button-bg: #538bff;
//! ```
//!
//! # Modules
//!
//! - [`store`] - loading and holding the three collections
//! - [`resolve`] - reference parsing and multi-hop resolution
//! - [`format`] - type-aware value formatting (`px`, `ms`, opacity)
//! - [`naming`] - output identifier construction
//! - [`emit`] - the emission pipeline, rendering and writing
//! - [`deprecation`] - the deprecated token audit
//! - [`config`] - run configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use tokensmith::Config;
//!
//! let config = Config::load("tokensmith.yaml".as_ref())?;
//! let build = tokensmith::build(&config)?;
//! for warning in &build.emission.warnings {
//!     eprintln!("{}", warning);
//! }
//! # Ok::<(), tokensmith::Error>(())
//! ```
//!
//! Per-token problems never abort a run: the token is left out and a
//! [`Warning`] is recorded. Only a missing or unparsable collection document,
//! a bad config, or a failed write is fatal.

pub mod config;
pub mod deprecation;
pub mod emit;
mod error;
pub mod format;
pub mod naming;
pub mod resolve;
pub mod store;

pub use config::{Config, ConfigError};
pub use deprecation::DeprecatedToken;
pub use emit::{Emission, Emitter, OutputFormat, RenderOptions, Warning};
pub use error::{Error, Result};
pub use resolve::{ResolveError, Resolver};
pub use store::{Collection, LoadError, TokenStore};

use std::path::PathBuf;

/// Output of a completed [`build`].
#[derive(Debug, Clone)]
pub struct Build {
    pub emission: Emission,
    pub output: PathBuf,
    pub document: String,
}

/// Loads the configured collections and runs emission without writing.
pub fn compile(config: &Config) -> Result<Emission> {
    config.validate()?;
    let store = TokenStore::load(&config.sources)?;
    let emission = Emitter::new(&store)
        .with_namer(config.namer())
        .with_max_depth(config.max_depth)
        .emit();
    tracing::info!(
        tokens = emission.token_count(),
        warnings = emission.warnings.len(),
        deprecated = emission.deprecated.len(),
        "emission complete"
    );
    Ok(emission)
}

/// Compiles, renders and writes the output document.
pub fn build(config: &Config) -> Result<Build> {
    let emission = compile(config)?;
    let document = emit::render(&emission, config.render_options())?;
    emit::write_document(&config.output, &document).map_err(|source| Error::Write {
        path: config.output.clone(),
        source,
    })?;
    Ok(Build {
        emission,
        output: config.output.clone(),
        document,
    })
}
