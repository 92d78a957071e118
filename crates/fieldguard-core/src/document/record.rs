//! Plain and wrapped record shapes.

use super::{Document, Fields};
use crate::error::Error;
use crate::security::PermissionSummary;
use serde_json::{Map, Value};

/// Key under which a wrapped record keeps its inner field mapping.
pub const WRAPPED_DOC_KEY: &str = "_doc";

/// A document that is its own field mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainRecord {
    fields: Fields,
}

impl PlainRecord {
    /// Create a record from a field mapping.
    pub fn new(fields: Fields) -> Self {
        Self { fields }
    }

    /// Consume the record, returning its field mapping.
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl From<Fields> for PlainRecord {
    fn from(fields: Fields) -> Self {
        Self::new(fields)
    }
}

impl Document for PlainRecord {
    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn replace_fields(&mut self, fields: Fields) {
        self.fields = fields;
    }

    fn attach_permissions(&mut self, field: &str, summary: PermissionSummary) {
        self.fields.insert(field.to_string(), summary.to_value());
    }
}

/// A host storage record wrapping an inner field mapping.
///
/// Host metadata (ids, version keys, state flags) lives next to the inner
/// mapping and is never touched by sanitization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedRecord {
    doc: Fields,
    meta: Fields,
    permissions: Option<PermissionSummary>,
}

impl WrappedRecord {
    /// Create a wrapped record from its inner mapping.
    pub fn new(doc: Fields) -> Self {
        Self {
            doc,
            meta: Map::new(),
            permissions: None,
        }
    }

    /// Set a metadata entry on the wrapper.
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// Wrapper metadata.
    pub fn meta(&self) -> &Fields {
        &self.meta
    }

    /// Attached permission summary, if any.
    pub fn permissions(&self) -> Option<&PermissionSummary> {
        self.permissions.as_ref()
    }

    /// Render as JSON: metadata, the inner mapping under `_doc`, and the
    /// permission summary (when attached) under `field`.
    pub fn to_value(&self, field: &str) -> Value {
        let mut out = self.meta.clone();
        out.insert(WRAPPED_DOC_KEY.to_string(), Value::Object(self.doc.clone()));
        if let Some(summary) = &self.permissions {
            out.insert(field.to_string(), summary.to_value());
        }
        Value::Object(out)
    }
}

impl Document for WrappedRecord {
    fn fields(&self) -> &Fields {
        &self.doc
    }

    fn replace_fields(&mut self, fields: Fields) {
        self.doc = fields;
    }

    fn attach_permissions(&mut self, _field: &str, summary: PermissionSummary) {
        self.permissions = Some(summary);
    }
}

/// A document of either shape, detected from JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Plain field mapping.
    Plain(PlainRecord),
    /// Wrapped storage record.
    Wrapped(WrappedRecord),
}

impl Record {
    /// Detect the shape of a JSON document.
    ///
    /// An object carrying an object under `_doc` is a wrapped record; any
    /// other object is plain. Non-objects are rejected.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidDocument(format!(
                    "expected an object, found {}",
                    json_type(&other)
                )))
            }
        };

        match map.shift_remove(WRAPPED_DOC_KEY) {
            Some(Value::Object(doc)) => Ok(Record::Wrapped(WrappedRecord {
                doc,
                meta: map,
                permissions: None,
            })),
            Some(other) => {
                map.insert(WRAPPED_DOC_KEY.to_string(), other);
                Ok(Record::Plain(PlainRecord::new(map)))
            }
            None => Ok(Record::Plain(PlainRecord::new(map))),
        }
    }

    /// Render back to JSON in the detected shape.
    pub fn to_value(&self, permissions_field: &str) -> Value {
        match self {
            Record::Plain(record) => Value::Object(record.fields.clone()),
            Record::Wrapped(record) => record.to_value(permissions_field),
        }
    }

    /// Check if this is a wrapped record.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Record::Wrapped(_))
    }
}

impl Document for Record {
    fn fields(&self) -> &Fields {
        match self {
            Record::Plain(record) => record.fields(),
            Record::Wrapped(record) => record.fields(),
        }
    }

    fn replace_fields(&mut self, fields: Fields) {
        match self {
            Record::Plain(record) => record.replace_fields(fields),
            Record::Wrapped(record) => record.replace_fields(fields),
        }
    }

    fn attach_permissions(&mut self, field: &str, summary: PermissionSummary) {
        match self {
            Record::Plain(record) => record.attach_permissions(field, summary),
            Record::Wrapped(record) => record.attach_permissions(field, summary),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
