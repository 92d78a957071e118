//! Security module for FieldGuard.
//!
//! This module provides field-level access control:
//! - Permission level resolution (explicit overrides, computed levels, defaults)
//! - Authorized field sets per action, filtered against the schema
//! - Document and collection sanitization
//! - Update payload path extraction
//! - A post-find guard for host data layers
//!
//! # Security Model
//!
//! A [`PermissionEngine`] holds the permission table and schema oracle.
//! Each request carries [`RequestOptions`]; the engine resolves the levels
//! that apply, unions their grants, and redacts documents to what those
//! levels may read. Only a missing action permission is an error.
//!
//! # Example
//!
//! ```
//! use fieldguard_core::{
//!     ActionMap, Documents, FieldSchema, PermissionEngine, PermissionTable, PlainRecord,
//!     Redacted, RequestOptions, Sanitized,
//! };
//! use serde_json::json;
//!
//! let table = PermissionTable::new()
//!     .with_level("defaults", ActionMap::new().read(["name"]).find(true))
//!     .with_level("admin", ActionMap::new().read(["name", "email"]));
//! let engine = PermissionEngine::new(table, FieldSchema::from_names(["name", "email"]));
//!
//! let doc = json!({"name": "Ada", "email": "ada@example.com"});
//! let doc = PlainRecord::new(doc.as_object().unwrap().clone());
//!
//! let result = engine
//!     .guard_find(&RequestOptions::default(), Documents::single(doc))
//!     .unwrap();
//!
//! let Redacted::Single(Sanitized::Visible(doc)) = result else { unreachable!() };
//! assert!(!doc.into_fields().contains_key("email"));
//! ```

pub mod action;
pub mod authorizer;
pub mod engine;
pub mod error;
pub mod hook;
pub mod options;
pub mod resolver;
pub mod sanitizer;
pub mod table;
pub mod update;

// Re-export main types

// Error types
pub use error::{SecurityError, SecurityResult};

// Request types
pub use action::Action;
pub use options::{AuthLevel, RequestOptions};

// Table types
pub use table::{ActionMap, Grant, PermissionTable};

// Engine types
pub use authorizer::PermissionSummary;
pub use engine::{LevelSource, PermissionEngine};
pub use sanitizer::{Documents, Redacted, Sanitized};
pub use update::{extract_update_paths, extract_update_paths_with_prefix};
