//! Loading engine inputs from JSON files.

use fieldguard_core::document::Fields;
use fieldguard_core::{Documents, FieldSchema, PermissionTable, Record};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the command-line client.
#[derive(Debug, Error)]
pub enum CliError {
    /// File could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Engine input was rejected.
    #[error("{path}: {source}")]
    Input {
        /// Offending file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: fieldguard_core::Error,
    },

    /// Authorization failure.
    #[error(transparent)]
    Security(#[from] fieldguard_core::SecurityError),
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn input_error(path: &Path) -> impl FnOnce(fieldguard_core::Error) -> CliError + '_ {
    move |source| CliError::Input {
        path: path.to_path_buf(),
        source,
    }
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    serde_json::from_str(&read(path)?).map_err(|e| input_error(path)(e.into()))
}

/// Load a permission table.
pub fn load_table(path: &Path) -> Result<PermissionTable, CliError> {
    PermissionTable::from_json(&read(path)?).map_err(input_error(path))
}

/// Load a schema field list.
pub fn load_schema(path: &Path) -> Result<FieldSchema, CliError> {
    FieldSchema::from_json(&read(path)?).map_err(input_error(path))
}

/// Load a document, an array of documents, or `null`.
pub fn load_documents(path: &Path) -> Result<Documents<Record>, CliError> {
    match read_json(path)? {
        Value::Null => Ok(Documents::Single(None)),
        Value::Array(items) => {
            let records = items
                .into_iter()
                .map(Record::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map_err(input_error(path))?;
            Ok(Documents::Collection(records))
        }
        value => Record::from_value(value)
            .map(Documents::single)
            .map_err(input_error(path)),
    }
}

/// Load an update payload.
pub fn load_update(path: &Path) -> Result<Fields, CliError> {
    match read_json(path)? {
        Value::Object(update) => Ok(update),
        _ => Err(input_error(path)(fieldguard_core::Error::InvalidDocument(
            "update payload must be an object".to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn json_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_table() {
        let file = json_file(r#"{"defaults": {"read": ["name"], "find": true}}"#);
        let table = load_table(file.path()).unwrap();
        assert!(table.contains_level("defaults"));
    }

    #[test]
    fn test_load_table_reports_path() {
        let file = json_file("[]");
        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Input { .. }));
        assert!(err.to_string().contains("invalid permission table"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_schema(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_load_documents_shapes() {
        let single = json_file(r#"{"name": "Ada"}"#);
        assert!(matches!(
            load_documents(single.path()).unwrap(),
            Documents::Single(Some(_))
        ));

        let none = json_file("null");
        assert!(matches!(
            load_documents(none.path()).unwrap(),
            Documents::Single(None)
        ));

        let many = json_file(r#"[{"name": "Ada"}, {"_doc": {"name": "Grace"}}]"#);
        let Documents::Collection(records) = load_documents(many.path()).unwrap() else {
            panic!("expected a collection");
        };
        assert_eq!(records.len(), 2);
        assert!(records[1].is_wrapped());

        let bad = json_file("[1]");
        assert!(matches!(
            load_documents(bad.path()),
            Err(CliError::Input { .. })
        ));
    }

    #[test]
    fn test_load_update_requires_object() {
        let file = json_file(r#"["name"]"#);
        assert!(load_update(file.path()).is_err());

        let file = json_file(r#"{"$set": {"name": "x"}}"#);
        assert_eq!(load_update(file.path()).unwrap().len(), 1);
    }
}
