//! Generation report and per-key diagnostics.

use schema_core::RandomValue;
use serde::Serialize;

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Unsupported type tag; the key was generated as null
    Warning,
    /// Malformed schema node; the key was set to null
    Error,
}

/// Notice about a single schema key, collected during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    /// Dotted key path, e.g. `address.city`
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result of one generation call.
///
/// Serializes as `{"size": .., "randomValues": {..}}`, plus a `diagnostics`
/// list when anything was reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Number of schema keys visited across all nesting levels
    pub size: usize,

    /// Generated values, shaped like the schema
    pub random_values: RandomValue,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Diagnostics at warning level.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warning)
    }

    /// Diagnostics at error level.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Look up a generated top-level value by key.
    pub fn get(&self, key: &str) -> Option<&RandomValue> {
        self.random_values.get(key)
    }
}
