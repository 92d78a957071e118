//! Document shapes the sanitizer operates on.
//!
//! Hosts hand the engine either a plain field mapping or a storage record
//! that wraps one. Both expose their fields through the [`Document`]
//! trait, so the sanitizer treats them uniformly and hands back the same
//! shape it was given.

mod pick;
mod record;

pub use pick::pick_paths;
pub use record::{PlainRecord, Record, WrappedRecord, WRAPPED_DOC_KEY};

use crate::security::PermissionSummary;
use serde_json::{Map, Value};

/// Field mapping of a document.
pub type Fields = Map<String, Value>;

/// Capability interface over document shapes.
pub trait Document {
    /// The document's field mapping.
    fn fields(&self) -> &Fields;

    /// Replace the document's field mapping in place.
    fn replace_fields(&mut self, fields: Fields);

    /// Attach a permission summary under the reserved `field`.
    fn attach_permissions(&mut self, field: &str, summary: PermissionSummary);
}
