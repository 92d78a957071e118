//! Permission level resolution.

use super::engine::PermissionEngine;
use super::options::RequestOptions;
use crate::document::Fields;
use std::collections::HashSet;
use tracing::trace;

impl PermissionEngine {
    /// Resolve the ordered set of levels that apply to a request.
    ///
    /// An explicit override replaces computed levels entirely. Without
    /// one, the level source computes levels from the auth payload; a
    /// request with no payload computes nothing. The defaults level is
    /// always appended, levels missing from the table are dropped, and
    /// duplicates keep their first position.
    pub fn resolve_levels(&self, options: &RequestOptions, doc: Option<&Fields>) -> Vec<String> {
        let computed = (&options.auth_payload, &self.level_source);
        let mut levels = match (options.explicit_levels(), computed) {
            (Some(explicit), _) => explicit.to_vec(),
            (None, (Some(payload), Some(source))) => source.auth_levels(payload, doc),
            (None, _) => Vec::new(),
        };
        levels.push(self.config.defaults_level.clone());

        let mut seen = HashSet::new();
        levels.retain(|level| self.table.contains_level(level) && seen.insert(level.clone()));

        trace!(levels = ?levels, "Resolved permission levels");
        levels
    }
}
