//! Generated value representation.
//!
//! [`RandomValue`] mirrors the shape of a [`Schema`](crate::Schema): leaves
//! hold generated primitives, nested schemas become ordered objects.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A generated value.
///
/// Objects keep their entries in schema order, so they are stored as a
/// vector of pairs rather than a hash map.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RandomValue {
    /// Null value (unsupported tag or malformed node)
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// String value
    String(String),

    /// Array of values
    Array(Vec<RandomValue>),

    /// Ordered object of values
    Object(Vec<(String, RandomValue)>),
}

impl RandomValue {
    /// Create an empty object.
    pub fn empty_object() -> Self {
        Self::Object(Vec::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[RandomValue]> {
        match self {
            Self::Array(arr) => Some(arr.as_slice()),
            _ => None,
        }
    }

    /// Try to get this value as an ordered object.
    pub fn as_object(&self) -> Option<&[(String, RandomValue)]> {
        match self {
            Self::Object(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// Look up a key in an object value.
    ///
    /// Returns `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&RandomValue> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Object keys in order; empty for non-objects.
    pub fn keys(&self) -> Vec<&str> {
        self.as_object()
            .map(|entries| entries.iter().map(|(k, _)| k.as_str()).collect())
            .unwrap_or_default()
    }

}

impl Serialize for RandomValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
