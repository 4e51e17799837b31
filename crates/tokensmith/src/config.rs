//! Run configuration.
//!
//! A configuration file is YAML with kebab-case keys. Every key is optional:
//!
//! ```yaml
//! sources:
//!   primitives: tokens/primitives.json
//!   semantic: tokens/semantic.json
//!   component: tokens/components.json
//! output: dist/tokens.css
//! format: css
//! namespace: token
//! max-depth: 10
//! descriptions: false
//! ```
//!
//! Relative paths in a file are taken relative to the file's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::emit::{OutputFormat, RenderOptions};
use crate::naming::{VariableNamer, DEFAULT_NAMESPACE};
use crate::resolve::DEFAULT_MAX_DEPTH;
use crate::store::Sources;

/// Conventional configuration file name.
pub const CONFIG_FILE: &str = "tokensmith.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub sources: Sources,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// First identifier segment, e.g. `token` in `--token-semantic-...`.
    pub namespace: String,
    pub max_depth: usize,
    /// Emit `$description`s as CSS comments.
    pub descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Sources::default(),
            output: PathBuf::from("dist/tokens.css"),
            format: OutputFormat::Css,
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            descriptions: false,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file and anchors its relative paths at the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    /// Loads `path` if given, else `tokensmith.yaml` in the working
    /// directory when present, else the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    pub fn relative_to(self, base: &Path) -> Self {
        Self {
            sources: self.sources.relative_to(base),
            output: base.join(&self.output),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max-depth must be at least 1".into()));
        }
        Ok(())
    }

    pub fn namer(&self) -> VariableNamer {
        VariableNamer::new(self.namespace.clone())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            descriptions: self.descriptions,
        }
    }
}
