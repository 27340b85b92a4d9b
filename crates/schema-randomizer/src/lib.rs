//! Random value generator for schema-rand.
//!
//! This crate provides the [`SchemaRandomizer`], which walks a schema
//! depth-first and produces a same-shaped mapping of random values together
//! with the number of keys visited.
//!
//! # Architecture
//!
//! ```text
//! Schema (JSON / YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ SchemaRandomizer │
//! │                  │
//! │  - thread rng    │
//! │  - size counter  │
//! │  - diagnostics   │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    GenerationReport { size, random_values, diagnostics }
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let report = schema_randomizer::generate(&json!({
//!     "name": "string",
//!     "age": "number",
//!     "address": { "city": "string" }
//! }))
//! .unwrap();
//!
//! assert_eq!(report.size, 4);
//! assert!(report.random_values.get("age").unwrap().as_i64().unwrap() < 100);
//! ```
//!
//! # Type tags
//!
//! - `number` - integer in [0, 100)
//! - `string` - variable-length base36 token (may be empty)
//! - `boolean` - fair coin flip
//! - `array` - single-element array holding one token (also produced for any array node)
//! - `object` - empty mapping
//! - anything else - null, reported as a warning diagnostic
//!
//! Nodes that are neither strings, arrays nor mappings become null and are
//! reported as error diagnostics; the rest of the schema is still generated.

pub mod generators;
pub mod randomizer;
pub mod report;

// Re-exports for convenience
pub use randomizer::{NodeError, SchemaRandomizer};
pub use report::{Diagnostic, DiagnosticLevel, GenerationReport};
pub use schema_core::{InvalidSchemaError, RandomValue, Schema};

/// Validate a raw JSON schema and generate values for it.
pub fn generate(schema: &serde_json::Value) -> Result<GenerationReport, InvalidSchemaError> {
    SchemaRandomizer::new().generate_json(schema)
}
