//! Field schema - the bundled path oracle.

use super::field::{FieldDef, FieldKind};
use super::types::{PathKind, SchemaPaths};
use crate::error::Error;
use serde::Deserialize;
use std::collections::HashMap;

/// A set of declared fields that classifies paths for the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSchema {
    fields: HashMap<String, FieldDef>,
}

/// Accepted JSON entries: a bare field name or a full declaration.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldEntry {
    Name(String),
    Def(FieldDef),
}

impl FieldSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema of scalar fields from their names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::new(), |schema, name| schema.with_field(FieldDef::new(name)))
    }

    /// Parse a schema from a JSON array of names or `{ "name", "kind" }` objects.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(Error::InvalidSchema(
                "expected an array of field declarations".to_string(),
            ));
        }

        let entries: Vec<FieldEntry> = serde_json::from_value(value)?;
        let mut schema = Self::new();
        for entry in entries {
            let field = match entry {
                FieldEntry::Name(name) => FieldDef::new(name),
                FieldEntry::Def(def) => def,
            };
            if field.name.is_empty() {
                return Err(Error::InvalidSchema("field name is empty".to_string()));
            }
            schema = schema.with_field(field);
        }
        Ok(schema)
    }

    /// Add a field declaration, replacing any declaration with the same name.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Get a field declaration by exact path.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether some ancestor of `path` is a mixed field.
    fn has_mixed_parent(&self, path: &str) -> bool {
        path.match_indices('.')
            .any(|(idx, _)| self.get_field(&path[..idx]).is_some_and(FieldDef::is_mixed))
    }

    /// Whether `path` is a strict dotted prefix of a declared field.
    fn is_nested_parent(&self, path: &str) -> bool {
        self.fields.keys().any(|name| {
            name.len() > path.len()
                && name.starts_with(path)
                && name.as_bytes()[path.len()] == b'.'
        })
    }
}

impl SchemaPaths for FieldSchema {
    fn path_kind(&self, path: &str) -> PathKind {
        if path.is_empty() {
            return PathKind::AdhocOrUndefined;
        }

        if let Some(field) = self.get_field(path) {
            return match field.kind {
                FieldKind::Virtual => PathKind::Virtual,
                FieldKind::Scalar | FieldKind::Mixed => PathKind::Real,
            };
        }

        if self.has_mixed_parent(path) {
            PathKind::Real
        } else if self.is_nested_parent(path) {
            PathKind::Nested
        } else {
            PathKind::AdhocOrUndefined
        }
    }
}
