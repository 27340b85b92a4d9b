//! schema-rand library
//!
//! Command-line surface around [`schema_randomizer`]: loads a schema file,
//! generates one or more reports and writes them as JSON.
//!
//! # CLI Usage
//!
//! ```bash
//! # One compact report per line
//! schema-rand generate --schema user.json --count 10
//!
//! # YAML schema from stdin, pretty-printed into a file
//! cat user.yaml | schema-rand generate --schema - --format yaml --pretty -o out.json
//! ```

pub mod args;
pub mod format;
pub mod generate;

pub use args::GenerateArgs;
pub use format::SchemaFormat;
pub use generate::{load_schema, run_generate, write_reports, GenerateMetrics};
