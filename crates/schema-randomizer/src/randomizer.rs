//! Recursive schema walk that produces a [`GenerationReport`].

use crate::generators::{generate_array, generate_leaf};
use crate::report::{Diagnostic, GenerationReport};
use rand::Rng;
use schema_core::{join_path, InvalidSchemaError, RandomValue, Schema, SchemaNode};
use serde_json::Value as JsonValue;
use tracing::{debug, error, warn};

/// Per-key failure. The key is set to null and the walk continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Node is neither a tag string, an array nor a mapping
    #[error("Invalid schema value for key \"{key}\". Expected a valid type or nested object (found {found}).")]
    Malformed { key: String, found: String },
}

/// Generates random values shaped like a schema.
///
/// The randomizer holds no state; every call draws from the thread-local RNG,
/// so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRandomizer;

impl SchemaRandomizer {
    pub fn new() -> Self {
        Self
    }

    /// Generate values for a schema.
    pub fn generate(&self, schema: &Schema) -> GenerationReport {
        self.generate_with_rng(schema, &mut rand::thread_rng())
    }

    /// Validate a raw JSON schema, then generate values for it.
    pub fn generate_json(&self, schema: &JsonValue) -> Result<GenerationReport, InvalidSchemaError> {
        let schema = Schema::from_json_value(schema)?;
        Ok(self.generate(&schema))
    }

    /// Generate values for a schema using the given RNG.
    pub fn generate_with_rng<R: Rng>(&self, schema: &Schema, rng: &mut R) -> GenerationReport {
        let mut walk = Walk {
            rng,
            size: 0,
            diagnostics: Vec::new(),
        };
        let random_values = walk.traverse(schema, "");

        debug!(
            size = walk.size,
            diagnostics = walk.diagnostics.len(),
            "Generated random values"
        );

        GenerationReport {
            size: walk.size,
            random_values,
            diagnostics: walk.diagnostics,
        }
    }
}

/// State for a single depth-first walk.
struct Walk<'a, R> {
    rng: &'a mut R,
    /// Keys visited so far, across all levels
    size: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<R: Rng> Walk<'_, R> {
    fn traverse(&mut self, schema: &Schema, parent: &str) -> RandomValue {
        let mut entries = Vec::with_capacity(schema.len());

        for (key, node) in schema.fields() {
            self.size += 1;
            let path = join_path(parent, key);

            let value = match self.generate_node(key, node, &path) {
                Ok(value) => value,
                Err(err) => {
                    self.record_error(&path, &err);
                    RandomValue::Null
                }
            };
            entries.push((key.clone(), value));
        }

        RandomValue::Object(entries)
    }

    fn generate_node(
        &mut self,
        key: &str,
        node: &SchemaNode,
        path: &str,
    ) -> Result<RandomValue, NodeError> {
        match node {
            SchemaNode::ArrayMarker => Ok(generate_array(&mut *self.rng)),
            SchemaNode::Nested(inner) => Ok(self.traverse(inner, path)),
            SchemaNode::Tag(tag) => {
                if !tag.is_supported() {
                    self.record_unsupported(path, tag.as_str());
                }
                Ok(generate_leaf(tag, &mut *self.rng))
            }
            SchemaNode::Malformed { found } => Err(NodeError::Malformed {
                key: key.to_string(),
                found: found.clone(),
            }),
        }
    }

    fn record_unsupported(&mut self, path: &str, tag: &str) {
        let message = format!("Unsupported data type \"{tag}\". Returning null.");
        warn!(path = %path, tag = %tag, "{message}");
        self.diagnostics.push(Diagnostic::warning(path, message));
    }

    fn record_error(&mut self, path: &str, err: &NodeError) {
        error!(path = %path, "Error processing key: {err}");
        self.diagnostics.push(Diagnostic::error(path, err.to_string()));
    }
}
