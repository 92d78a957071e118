//! Field declarations.

use serde::{Deserialize, Serialize};

/// Storage kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A plain stored field.
    #[default]
    Scalar,
    /// A schemaless field; every sub-path below it counts as declared.
    Mixed,
    /// A computed field that is not stored.
    Virtual,
}

/// A declared field within a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field path, dotted for nested fields (`address.city`).
    pub name: String,
    /// Storage kind.
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldDef {
    /// Create a scalar field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar,
        }
    }

    /// Create a mixed (schemaless) field.
    pub fn mixed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Mixed,
        }
    }

    /// Create a virtual field.
    pub fn virtual_field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Virtual,
        }
    }

    /// Check if this field accepts arbitrary sub-paths.
    pub fn is_mixed(&self) -> bool {
        self.kind == FieldKind::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_constructors() {
        assert_eq!(FieldDef::new("name").kind, FieldKind::Scalar);
        assert!(FieldDef::mixed("meta").is_mixed());
        assert_eq!(FieldDef::virtual_field("full_name").kind, FieldKind::Virtual);
    }

    #[test]
    fn test_kind_defaults_to_scalar() {
        let field: FieldDef = serde_json::from_str(r#"{"name": "email"}"#).unwrap();
        assert_eq!(field, FieldDef::new("email"));

        let field: FieldDef =
            serde_json::from_str(r#"{"name": "extra", "kind": "mixed"}"#).unwrap();
        assert!(field.is_mixed());
    }
}
