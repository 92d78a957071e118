//! Field and action authorization.

use super::action::Action;
use super::engine::PermissionEngine;
use super::error::{SecurityError, SecurityResult};
use super::options::RequestOptions;
use crate::document::Fields;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Cross-action view of what a request may do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSummary {
    /// Readable field paths.
    pub read: Vec<String>,
    /// Writable field paths.
    pub write: Vec<String>,
    /// Whether documents may be removed.
    pub remove: bool,
    /// Whether documents may be queried.
    pub find: bool,
}

impl PermissionSummary {
    /// Render as a JSON object.
    pub fn to_value(&self) -> Value {
        json!({
            "read": self.read,
            "write": self.write,
            "remove": self.remove,
            "find": self.find,
        })
    }
}

impl PermissionEngine {
    /// Field paths the request is authorized for under `action`.
    ///
    /// The union of every resolved level's field list, restricted to paths
    /// the schema declares, in first-seen order without duplicates.
    pub fn authorized_fields(
        &self,
        options: &RequestOptions,
        action: Action,
        doc: Option<&Fields>,
    ) -> Vec<String> {
        let levels = self.resolve_levels(options, doc);

        let mut seen = HashSet::new();
        let mut fields = Vec::new();
        for grants in levels.iter().filter_map(|level| self.table.get(level)) {
            for path in grants.fields(action) {
                if self.paths.is_declared(path) && seen.insert(path.as_str()) {
                    fields.push(path.clone());
                }
            }
        }

        trace!(action = %action, fields = ?fields, "Authorized fields");
        fields
    }

    /// Whether any resolved level grants `action`.
    ///
    /// Flags are not checked against the schema; they name no fields.
    pub fn has_permission(
        &self,
        options: &RequestOptions,
        action: Action,
        doc: Option<&Fields>,
    ) -> bool {
        self.resolve_levels(options, doc)
            .iter()
            .any(|level| self.table.get(level).is_some_and(|grants| grants.allows(action)))
    }

    /// Require `action`, failing with [`SecurityError::PermissionDenied`].
    pub fn require_permission(
        &self,
        options: &RequestOptions,
        action: Action,
        doc: Option<&Fields>,
    ) -> SecurityResult<()> {
        if self.has_permission(options, action, doc) {
            Ok(())
        } else {
            debug!(action = %action, "Permission denied");
            Err(SecurityError::PermissionDenied { action })
        }
    }

    /// Summary of every action for the request.
    pub fn embed_permissions(
        &self,
        options: &RequestOptions,
        doc: Option<&Fields>,
    ) -> PermissionSummary {
        PermissionSummary {
            read: self.authorized_fields(options, Action::Read, doc),
            write: self.authorized_fields(options, Action::Write, doc),
            remove: self.has_permission(options, Action::Remove, doc),
            find: self.has_permission(options, Action::Find, doc),
        }
    }

    /// Paths touched by `update` that the request may not write.
    ///
    /// A granted path also covers everything nested below it, so a grant of
    /// `address` authorizes `address.city`. Rejecting the write is left to
    /// the caller.
    pub fn unauthorized_update_paths(
        &self,
        options: &RequestOptions,
        update: &Fields,
        doc: Option<&Fields>,
    ) -> Vec<String> {
        let writable = self.authorized_fields(options, Action::Write, doc);
        self.extract_update_paths(update)
            .into_iter()
            .filter(|path| !writable.iter().any(|granted| covers(granted, path)))
            .collect()
    }
}

fn covers(granted: &str, path: &str) -> bool {
    path == granted
        || (path.len() > granted.len()
            && path.starts_with(granted)
            && path.as_bytes()[granted.len()] == b'.')
}
