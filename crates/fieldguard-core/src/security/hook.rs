//! Post-find guard for host data layers.
//!
//! A data layer calls [`PermissionEngine::guard_find`] after loading
//! documents and returns its output to the caller in place of the raw
//! result.

use super::action::Action;
use super::engine::PermissionEngine;
use super::error::SecurityResult;
use super::options::RequestOptions;
use super::sanitizer::{Documents, Redacted};
use crate::document::Document;
use tracing::debug;

impl PermissionEngine {
    /// Authorize a find and redact its result.
    ///
    /// Requests with authorization disabled get their documents back
    /// untouched. Requests without the `find` permission fail before any
    /// document is inspected.
    pub fn guard_find<D: Document>(
        &self,
        options: &RequestOptions,
        docs: Documents<D>,
    ) -> SecurityResult<Redacted<D>> {
        if options.auth_is_disabled() {
            debug!("Authorization disabled, passing documents through");
            return Ok(docs.into());
        }

        self.require_permission(options, Action::Find, None)?;
        Ok(self.sanitize_many(options, docs))
    }
}
