//! Schema field catalog.
//!
//! The engine never inspects a host schema directly. It asks a
//! [`SchemaPaths`] oracle whether a field path is declared, and
//! [`FieldSchema`] is the bundled oracle built from field declarations.

mod field;
mod schema;
mod types;

pub use field::{FieldDef, FieldKind};
pub use schema::FieldSchema;
pub use types::{PathKind, SchemaPaths};
