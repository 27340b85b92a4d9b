//! Core types for schema-rand.
//!
//! This crate provides the types shared by the generator and the CLI:
//!
//! - [`Schema`] - ordered field name → [`SchemaNode`] mapping, parsed from JSON or YAML
//! - [`SchemaNode`] / [`TypeTag`] - per-field node classification
//! - [`RandomValue`] - generated values mirroring a schema's shape
//! - [`InvalidSchemaError`] / [`SchemaError`] - schema validation and loading errors
//!
//! # Architecture
//!
//! ```text
//! schema-core (this crate)
//!    │
//!    ├─── schema-randomizer  (walks a Schema, produces RandomValue)
//!    │
//!    └─── schema-rand        (CLI: loads schema files, prints reports)
//! ```
//!
//! # Example
//!
//! ```rust
//! use schema_core::{Schema, SchemaNode, TypeTag};
//!
//! let schema = Schema::from_json_str(r#"{"age": "number", "address": {"city": "string"}}"#).unwrap();
//! assert_eq!(schema.get("age"), Some(&SchemaNode::Tag(TypeTag::Number)));
//! assert_eq!(schema.key_count(), 3);
//! ```

pub mod schema;
pub mod values;

// Re-exports for convenience
pub use schema::{
    is_yaml_path, join_path, InvalidSchemaError, Schema, SchemaBuilder, SchemaError, SchemaNode,
    TypeTag,
};
pub use values::RandomValue;
