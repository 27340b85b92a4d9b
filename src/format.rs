//! Schema input format selection.

use anyhow::Context;
use clap::ValueEnum;
use schema_core::{is_yaml_path, Schema};
use std::path::Path;

/// Format of a schema document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaFormat {
    /// Pick by file extension (`.yaml`/`.yml` is YAML, anything else JSON)
    #[value(name = "auto")]
    Auto,
    /// JSON document
    #[value(name = "json")]
    Json,
    /// YAML document
    #[value(name = "yaml")]
    Yaml,
}

impl SchemaFormat {
    /// Resolve `Auto` against a path. Other formats are returned unchanged.
    pub fn resolve(self, path: &Path) -> SchemaFormat {
        match self {
            SchemaFormat::Auto if is_yaml_path(path) => SchemaFormat::Yaml,
            SchemaFormat::Auto => SchemaFormat::Json,
            other => other,
        }
    }

    /// Parse schema text in this format. `Auto` is treated as JSON.
    pub fn parse(self, content: &str) -> anyhow::Result<Schema> {
        let schema = match self {
            SchemaFormat::Yaml => {
                Schema::from_yaml_str(content).context("Failed to parse schema YAML")?
            }
            SchemaFormat::Json | SchemaFormat::Auto => {
                Schema::from_json_str(content).context("Failed to parse schema JSON")?
            }
        };
        Ok(schema)
    }
}
