//! Serializing an [`Emission`] into an output document.

use std::fmt;
use std::str::FromStr;

use minijinja::{context, AutoEscape, Environment};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Emission;

const CSS_TEMPLATE: &str = include_str!("templates/tokens.css.tmpl");
const BANNER: &str = "Generated by tokensmith. Do not edit directly.";

/// Output document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Custom properties in three `:root` blocks.
    #[default]
    Css,
    /// One object per layer mapping identifiers to values.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Css => "css",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(OutputFormat::Css),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected css or json)", other)),
        }
    }
}

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Append `$description`s as trailing comments (CSS only).
    pub descriptions: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the emission in the requested format.
pub fn render(emission: &Emission, options: RenderOptions) -> Result<String, RenderError> {
    match options.format {
        OutputFormat::Css => render_css(emission, options.descriptions),
        OutputFormat::Json => render_json(emission),
    }
}

fn render_css(emission: &Emission, descriptions: bool) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    // Keep authored text from closing the surrounding comment.
    env.add_filter("comment", |text: String| text.replace("*/", "* /"));
    env.add_template("tokens.css", CSS_TEMPLATE)?;

    let template = env.get_template("tokens.css")?;
    let mut document = template.render(context! {
        banner => BANNER,
        deprecated => &emission.deprecated,
        sections => &emission.sections,
        descriptions => descriptions,
    })?;
    document.push('\n');
    Ok(document)
}

fn render_json(emission: &Emission) -> Result<String, RenderError> {
    let mut document = Map::new();
    document.insert(
        "deprecated".to_string(),
        serde_json::to_value(&emission.deprecated)?,
    );
    for section in &emission.sections {
        let variables: Map<String, Value> = section
            .entries
            .iter()
            .map(|e| (e.identifier.clone(), Value::String(e.value.clone())))
            .collect();
        document.insert(section.collection.name().to_string(), Value::Object(variables));
    }
    let mut text = serde_json::to_string_pretty(&Value::Object(document))?;
    text.push('\n');
    Ok(text)
}
