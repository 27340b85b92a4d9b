//! Schema definitions for schema-rand.
//!
//! A [`Schema`] is an ordered list of `(field name, SchemaNode)` entries.
//! Every node is classified once, when the schema is parsed, so generation
//! never inspects raw JSON or YAML again.
//!
//! ## Node kinds
//!
//! - a type-tag string (`"number"`, `"string"`, ...) becomes [`SchemaNode::Tag`]
//! - a nested mapping becomes [`SchemaNode::Nested`]
//! - any array becomes [`SchemaNode::ArrayMarker`]; its contents are ignored
//! - anything else (numbers, booleans, null) becomes [`SchemaNode::Malformed`]
//!   so the generator can report it per key instead of rejecting the schema

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// The top-level schema is not usable at all.
///
/// Both variants abort a generation call. Callers that don't care about the
/// difference can treat them identically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSchemaError {
    /// Top-level value is not a mapping (null, string, number, array, ...)
    #[error("Invalid schema: Schema must be a non-null object (found {found})")]
    NotAnObject { found: String },

    /// Top-level mapping has no keys
    #[error("Invalid schema: Schema cannot be empty")]
    Empty,

    /// Same field name appears twice in one mapping
    #[error("Invalid schema: Duplicate key \"{key}\"")]
    DuplicateKey { key: String },
}

/// Error type for loading and parsing schemas.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema parsed but has an invalid shape
    #[error(transparent)]
    Invalid(#[from] InvalidSchemaError),

    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// YAML mapping key that has no string form
    #[error("Unsupported mapping key at '{path}': keys must be strings, numbers or booleans")]
    InvalidKey { path: String },
}

// ============================================================================
// Type Tags
// ============================================================================

/// Primitive kind declared by a type-tag string.
///
/// Matching is exact and case-sensitive: `"Number"` is unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `"number"` - integer in [0, 100)
    Number,
    /// `"string"` - random base36 token
    String,
    /// `"boolean"` - fair coin flip
    Boolean,
    /// `"array"` - single-element array holding one token
    Array,
    /// `"object"` - empty mapping
    Object,
    /// Any other tag; generates null
    Unsupported(String),
}

impl TypeTag {
    /// Classify a tag string.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "number" => TypeTag::Number,
            "string" => TypeTag::String,
            "boolean" => TypeTag::Boolean,
            "array" => TypeTag::Array,
            "object" => TypeTag::Object,
            other => TypeTag::Unsupported(other.to_string()),
        }
    }

    /// The tag string as it appears in a schema.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Unsupported(tag) => tag,
        }
    }

    /// Whether values can be generated for this tag.
    pub fn is_supported(&self) -> bool {
        !matches!(self, TypeTag::Unsupported(_))
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        TypeTag::parse(tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Schema Nodes
// ============================================================================

/// One entry's value within a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Type-tag string
    Tag(TypeTag),

    /// Nested mapping, expanded recursively
    Nested(Schema),

    /// Array value of any contents
    ArrayMarker,

    /// Value that is neither a tag, an array nor a mapping
    Malformed {
        /// Kind of the offending value (`"number"`, `"boolean"`, `"null"`)
        found: String,
    },
}

impl SchemaNode {
    /// Create a tag node from a tag string.
    pub fn tag(tag: &str) -> Self {
        SchemaNode::Tag(TypeTag::parse(tag))
    }

    fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::String(tag) => SchemaNode::tag(tag),
            JsonValue::Array(_) => SchemaNode::ArrayMarker,
            JsonValue::Object(map) => SchemaNode::Nested(Schema::from_json_map(map)),
            other => SchemaNode::Malformed {
                found: json_kind(other).to_string(),
            },
        }
    }

    fn from_yaml(value: &YamlValue, path: &str) -> Result<Self, SchemaError> {
        match value {
            YamlValue::String(tag) => Ok(SchemaNode::tag(tag)),
            YamlValue::Sequence(_) => Ok(SchemaNode::ArrayMarker),
            YamlValue::Mapping(map) => Ok(SchemaNode::Nested(Schema::from_yaml_mapping(map, path)?)),
            YamlValue::Tagged(tagged) => SchemaNode::from_yaml(&tagged.value, path),
            other => Ok(SchemaNode::Malformed {
                found: yaml_kind(other).to_string(),
            }),
        }
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Ordered mapping from field name to [`SchemaNode`].
///
/// Schemas built through [`Schema::new`] or any of the parsers are never
/// empty at the top level. Nested schemas may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<(String, SchemaNode)>,
}

impl Schema {
    /// Create a schema from ordered entries.
    pub fn new(fields: Vec<(String, SchemaNode)>) -> Result<Self, InvalidSchemaError> {
        if fields.is_empty() {
            return Err(InvalidSchemaError::Empty);
        }
        if let Some(key) = first_duplicate(&fields) {
            return Err(InvalidSchemaError::DuplicateKey {
                key: key.to_string(),
            });
        }
        Ok(Self { fields })
    }

    /// Start building a schema entry by entry.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parse a schema from an already-decoded JSON value.
    pub fn from_json_value(value: &JsonValue) -> Result<Self, InvalidSchemaError> {
        match value {
            JsonValue::Object(map) if map.is_empty() => Err(InvalidSchemaError::Empty),
            JsonValue::Object(map) => Ok(Schema::from_json_map(map)),
            other => Err(InvalidSchemaError::NotAnObject {
                found: json_kind(other).to_string(),
            }),
        }
    }

    /// Parse a schema from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Schema::from_json_value(&value)?)
    }

    /// Parse a schema from an already-decoded YAML value.
    pub fn from_yaml_value(value: &YamlValue) -> Result<Self, SchemaError> {
        match value {
            YamlValue::Mapping(map) if map.is_empty() => Err(InvalidSchemaError::Empty.into()),
            YamlValue::Mapping(map) => Schema::from_yaml_mapping(map, ""),
            YamlValue::Tagged(tagged) => Schema::from_yaml_value(&tagged.value),
            other => Err(InvalidSchemaError::NotAnObject {
                found: yaml_kind(other).to_string(),
            }
            .into()),
        }
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SchemaError> {
        let value: YamlValue = serde_yaml::from_str(yaml)?;
        Schema::from_yaml_value(&value)
    }

    /// Load a schema from a file.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, everything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if is_yaml_path(path) {
            Schema::from_yaml_str(&content)
        } else {
            Schema::from_json_str(&content)
        }
    }

    fn from_json_map(map: &serde_json::Map<String, JsonValue>) -> Self {
        let fields = map
            .iter()
            .map(|(key, value)| (key.clone(), SchemaNode::from_json(value)))
            .collect();
        Self { fields }
    }

    fn from_yaml_mapping(map: &serde_yaml::Mapping, parent: &str) -> Result<Self, SchemaError> {
        let mut fields = Vec::with_capacity(map.len());
        for (key, value) in map {
            let key = yaml_key(key).ok_or_else(|| SchemaError::InvalidKey {
                path: parent.to_string(),
            })?;
            let path = join_path(parent, &key);
            let node = SchemaNode::from_yaml(value, &path)?;
            fields.push((key, node));
        }
        // `1` and `"1"` are distinct YAML keys but the same field name
        if let Some(key) = first_duplicate(&fields) {
            return Err(InvalidSchemaError::DuplicateKey {
                key: join_path(parent, key),
            }
            .into());
        }
        Ok(Self { fields })
    }

    /// Entries in insertion order.
    pub fn fields(&self) -> &[(String, SchemaNode)] {
        &self.fields
    }

    /// Look up a top-level entry by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, node)| node)
    }

    /// Number of entries at this level.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this level has no entries (only possible for nested schemas).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names at this level, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Total number of keys across all nesting levels.
    pub fn key_count(&self) -> usize {
        self.fields
            .iter()
            .map(|(_, node)| match node {
                SchemaNode::Nested(inner) => 1 + inner.key_count(),
                _ => 1,
            })
            .sum()
    }
}

/// Incremental builder for [`Schema`].
///
/// Adding the same name twice makes [`SchemaBuilder::build`] fail with
/// [`InvalidSchemaError::DuplicateKey`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, SchemaNode)>,
}

impl SchemaBuilder {
    /// Add a type-tag entry.
    pub fn tag(mut self, name: impl Into<String>, tag: &str) -> Self {
        self.fields.push((name.into(), SchemaNode::tag(tag)));
        self
    }

    /// Add an array-marker entry.
    pub fn array(mut self, name: impl Into<String>) -> Self {
        self.fields.push((name.into(), SchemaNode::ArrayMarker));
        self
    }

    /// Add a nested schema entry.
    pub fn nested(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push((name.into(), SchemaNode::Nested(schema)));
        self
    }

    /// Add an arbitrary node.
    pub fn node(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.push((name.into(), node));
        self
    }

    /// Finish the schema. Fails if no entries were added.
    pub fn build(self) -> Result<Schema, InvalidSchemaError> {
        Schema::new(self.fields)
    }
}

/// Join a parent path and a key with a dot.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Whether a schema file should be parsed as YAML (`.yaml` / `.yml`).
pub fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn first_duplicate(fields: &[(String, SchemaNode)]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(fields.len());
    fields
        .iter()
        .map(|(key, _)| key.as_str())
        .find(|key| !seen.insert(*key))
}

/// Name of a JSON value's kind.
fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn yaml_kind(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "boolean",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "array",
        YamlValue::Mapping(_) => "object",
        YamlValue::Tagged(tagged) => yaml_kind(&tagged.value),
    }
}

fn yaml_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Tagged(tagged) => yaml_key(&tagged.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_parse_type_tags() {
        assert_eq!(TypeTag::parse("number"), TypeTag::Number);
        assert_eq!(TypeTag::parse("string"), TypeTag::String);
        assert_eq!(TypeTag::parse("boolean"), TypeTag::Boolean);
        assert_eq!(TypeTag::parse("array"), TypeTag::Array);
        assert_eq!(TypeTag::parse("object"), TypeTag::Object);
        assert_eq!(
            TypeTag::parse("Number"),
            TypeTag::Unsupported("Number".to_string())
        );
        assert!(!TypeTag::parse("date").is_supported());
        assert_eq!(TypeTag::parse("date").to_string(), "date");
    }

    #[test]
    fn test_from_json_classifies_nodes() {
        let schema = Schema::from_json_value(&json!({
            "name": "string",
            "tags": ["ignored", 1, 2],
            "address": { "city": "string" },
            "bad": 42,
            "flag": true,
            "nothing": null
        }))
        .unwrap();

        assert_eq!(schema.get("name"), Some(&SchemaNode::Tag(TypeTag::String)));
        assert_eq!(schema.get("tags"), Some(&SchemaNode::ArrayMarker));
        assert!(matches!(schema.get("address"), Some(SchemaNode::Nested(_))));
        assert_eq!(
            schema.get("bad"),
            Some(&SchemaNode::Malformed {
                found: "number".to_string()
            })
        );
        assert_eq!(
            schema.get("flag"),
            Some(&SchemaNode::Malformed {
                found: "boolean".to_string()
            })
        );
        assert_eq!(
            schema.get("nothing"),
            Some(&SchemaNode::Malformed {
                found: "null".to_string()
            })
        );
    }

    #[test]
    fn test_from_json_preserves_insertion_order() {
        let schema = Schema::from_json_str(r#"{"zeta": "number", "alpha": "string", "mid": {}}"#)
            .unwrap();
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_invalid_top_level() {
        assert_eq!(
            Schema::from_json_value(&JsonValue::Null),
            Err(InvalidSchemaError::NotAnObject {
                found: "null".to_string()
            })
        );
        assert_eq!(
            Schema::from_json_value(&json!("x")),
            Err(InvalidSchemaError::NotAnObject {
                found: "string".to_string()
            })
        );
        assert_eq!(
            Schema::from_json_value(&json!([])),
            Err(InvalidSchemaError::NotAnObject {
                found: "array".to_string()
            })
        );
        assert_eq!(
            Schema::from_json_value(&json!({})),
            Err(InvalidSchemaError::Empty)
        );
        assert_eq!(Schema::new(vec![]), Err(InvalidSchemaError::Empty));
    }

    #[test]
    fn test_invalid_error_messages() {
        let err = Schema::from_json_value(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema: Schema cannot be empty");

        let err = Schema::from_json_value(&JsonValue::Null).unwrap_err();
        assert!(err.to_string().contains("must be a non-null object"));
    }

    #[test]
    fn test_nested_empty_mapping_allowed() {
        let schema = Schema::from_json_value(&json!({ "meta": {} })).unwrap();
        match schema.get("meta") {
            Some(SchemaNode::Nested(inner)) => assert!(inner.is_empty()),
            other => panic!("Expected nested schema, got {other:?}"),
        }
    }

    #[test]
    fn test_key_count() {
        let schema = Schema::from_json_value(&json!({
            "a": "number",
            "b": { "c": "string", "d": { "e": "boolean" } },
            "f": []
        }))
        .unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.key_count(), 6);
    }

    #[test]
    fn test_yaml_matches_json() {
        let yaml = r#"
name: string
age: number
tags: []
address:
  city: string
"#;
        let from_yaml = Schema::from_yaml_str(yaml).unwrap();
        let from_json = Schema::from_json_value(&json!({
            "name": "string",
            "age": "number",
            "tags": [],
            "address": { "city": "string" }
        }))
        .unwrap();
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_yaml_scalar_keys_and_malformed_values() {
        let schema = Schema::from_yaml_str("1: string\ntrue: 7\n").unwrap();
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["1", "true"]);
        assert_eq!(
            schema.get("true"),
            Some(&SchemaNode::Malformed {
                found: "number".to_string()
            })
        );
    }

    #[test]
    fn test_yaml_rejects_complex_keys() {
        let result = Schema::from_yaml_str("outer:\n  ? [a, b]\n  : string\n");
        match result {
            Err(SchemaError::InvalidKey { path }) => assert_eq!(path, "outer"),
            other => panic!("Expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn test_yaml_invalid_top_level() {
        assert!(matches!(
            Schema::from_yaml_str("{}"),
            Err(SchemaError::Invalid(InvalidSchemaError::Empty))
        ));
        assert!(matches!(
            Schema::from_yaml_str("just a string"),
            Err(SchemaError::Invalid(InvalidSchemaError::NotAnObject { .. }))
        ));
    }

    #[test]
    fn test_json_syntax_error() {
        assert!(matches!(
            Schema::from_json_str("{ not json"),
            Err(SchemaError::JsonError(_))
        ));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml_file, "id: number").unwrap();
        let schema = Schema::from_file(yaml_file.path()).unwrap();
        assert_eq!(schema.get("id"), Some(&SchemaNode::Tag(TypeTag::Number)));

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, r#"{{"id": "number"}}"#).unwrap();
        let schema = Schema::from_file(json_file.path()).unwrap();
        assert_eq!(schema.get("id"), Some(&SchemaNode::Tag(TypeTag::Number)));
    }

    #[test]
    fn test_from_missing_file() {
        let result = Schema::from_file("/nonexistent/schema.json");
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }

    #[test]
    fn test_builder() {
        let schema = Schema::builder()
            .tag("name", "string")
            .array("tags")
            .nested(
                "address",
                Schema::builder().tag("city", "string").build().unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(schema.key_count(), 4);
        assert_eq!(Schema::builder().build(), Err(InvalidSchemaError::Empty));
    }

    #[test]
    fn test_builder_rejects_duplicate_keys() {
        let result = Schema::builder()
            .tag("a", "number")
            .tag("a", "string")
            .build();
        assert_eq!(
            result,
            Err(InvalidSchemaError::DuplicateKey {
                key: "a".to_string()
            })
        );

        let result = Schema::new(vec![
            ("x".to_string(), SchemaNode::ArrayMarker),
            ("y".to_string(), SchemaNode::tag("boolean")),
            ("x".to_string(), SchemaNode::tag("number")),
        ]);
        assert!(matches!(result, Err(InvalidSchemaError::DuplicateKey { key }) if key == "x"));
    }

    #[test]
    fn test_same_key_allowed_at_different_levels() {
        let inner = Schema::builder().tag("id", "number").build().unwrap();
        let schema = Schema::builder()
            .tag("id", "string")
            .nested("child", inner)
            .build()
            .unwrap();
        assert_eq!(schema.key_count(), 3);
    }

    #[test]
    fn test_yaml_rejects_keys_colliding_after_stringify() {
        let result = Schema::from_yaml_str("outer:\n  1: string\n  \"1\": number\n");
        match result {
            Err(SchemaError::Invalid(InvalidSchemaError::DuplicateKey { key })) => {
                assert_eq!(key, "outer.1")
            }
            other => panic!("Expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn test_is_yaml_path() {
        assert!(is_yaml_path(Path::new("schema.yaml")));
        assert!(is_yaml_path(Path::new("dir/schema.yml")));
        assert!(!is_yaml_path(Path::new("schema.json")));
        assert!(!is_yaml_path(Path::new("schema")));
        assert!(!is_yaml_path(Path::new("-")));
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a"), "a");
        assert_eq!(join_path("a.b", "c"), "a.b.c");
    }
}
