//! FieldGuard Core - field-level permission resolution and document sanitization.
//!
//! This crate decides, per action, which fields of a document a caller may
//! see or touch, and redacts documents down to that view.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod security;

pub use catalog::{FieldDef, FieldKind, FieldSchema, PathKind, SchemaPaths};
pub use config::EngineConfig;
pub use document::{Document, PlainRecord, Record, WrappedRecord};
pub use error::Error;

// Security exports
pub use security::{
    extract_update_paths, Action, ActionMap, AuthLevel, Documents, Grant, LevelSource,
    PermissionEngine, PermissionSummary, PermissionTable, Redacted, RequestOptions, Sanitized,
    SecurityError, SecurityResult,
};
