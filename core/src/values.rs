//! Typed parse results.
//!
//! Parsing returns values instead of writing through caller-owned storage:
//! each matched option binds an [`OptionValue`] under its long name in an
//! [`OptionValues`] map. Both types serialize with [`serde`], so a parse
//! result can round-trip through JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Value bound to one option by a parse pass.
///
/// The variant follows the option's [`ArgKind`](crate::ArgKind): `Flag`
/// options bind `Bool`, the numeric kinds bind their parsed representation,
/// and `String` options bind an owned copy of the raw token. `Handle`
/// options bind nothing; their callback consumes the raw value.
///
/// # Examples
///
/// ```
/// use cmdparse_core::OptionValue;
///
/// let value = OptionValue::Int(42);
/// assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"Int":42}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OptionValue {
    /// Flag state.
    Bool(bool),
    /// Parsed integer.
    Int(i64),
    /// Parsed single-precision float.
    Float(f32),
    /// Parsed double-precision float.
    Double(f64),
    /// Owned copy of the raw token.
    String(String),
}

/// Parsed option bindings, keyed by long name.
///
/// Returned by [`parse_options`](crate::Context::parse_options). Every
/// registered `Flag` option is present (seeded `false` before scanning);
/// value-taking options appear only when a token bound them.
///
/// # Examples
///
/// ```
/// use cmdparse_core::{OptionValue, OptionValues};
///
/// let mut values = OptionValues::default();
/// values.insert("jobs", OptionValue::Int(4));
///
/// assert_eq!(values.get_int("jobs"), Some(4));
/// assert_eq!(values.get_bool("jobs"), None); // wrong type
/// assert!(!values.contains("verbose"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValues {
    values: HashMap<String, OptionValue>,
}

impl OptionValues {
    /// Creates an empty binding map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a binding, replacing any previous value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.insert(name.into(), value);
    }

    /// Returns the raw binding for `name`.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Returns the flag state bound to `name`, if it is a `Bool`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer bound to `name`, if it is an `Int`.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float bound to `name`, if it is a `Float`.
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            OptionValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the double bound to `name`, if it is a `Double`.
    pub fn get_double(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            OptionValue::Double(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string bound to `name`, if it is a `String`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            OptionValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Whether any binding exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.values.iter()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no bindings exist.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters_reject_wrong_variant() {
        let mut values = OptionValues::new();
        values.insert("level", OptionValue::Int(3));
        values.insert("ratio", OptionValue::Double(0.5));

        assert_eq!(values.get_int("level"), Some(3));
        assert_eq!(values.get_str("level"), None);
        assert_eq!(values.get_double("ratio"), Some(0.5));
        assert_eq!(values.get_float("ratio"), None);
    }

    #[test]
    fn test_insert_replaces() {
        let mut values = OptionValues::new();
        values.insert("verbose", OptionValue::Bool(false));
        values.insert("verbose", OptionValue::Bool(true));

        assert_eq!(values.len(), 1);
        assert_eq!(values.get_bool("verbose"), Some(true));
    }

    #[test]
    fn test_json_round_trip() {
        let mut values = OptionValues::new();
        values.insert("output", OptionValue::String("/tmp/snap".to_string()));
        values.insert("jobs", OptionValue::Int(8));
        values.insert("force", OptionValue::Bool(true));

        let json = serde_json::to_string(&values).unwrap();
        let restored: OptionValues = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, values);
    }
}
