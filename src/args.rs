//! CLI argument definitions for the generate command.

use crate::format::SchemaFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments for `schema-rand generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to the schema file (JSON or YAML), or `-` for stdin
    #[arg(long, short = 's', env = "SCHEMA_RAND_SCHEMA")]
    pub schema: PathBuf,

    /// How to parse the schema; `auto` decides by file extension
    #[arg(long, value_enum, default_value = "auto")]
    pub format: SchemaFormat,

    /// Number of reports to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Pretty-print each report instead of writing one JSON document per line
    #[arg(long)]
    pub pretty: bool,

    /// Write reports to this file instead of stdout
    #[arg(long, short = 'o', env = "SCHEMA_RAND_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Whether the schema is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.schema.as_os_str() == "-"
    }
}
