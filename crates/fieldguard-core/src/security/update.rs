//! Field paths touched by update payloads.

use super::engine::PermissionEngine;
use crate::config::DEFAULT_OPERATOR_PREFIX;
use crate::document::Fields;
use std::collections::HashSet;

/// Flatten an update payload into the field paths it touches.
///
/// Operator keys (`$set`, `$inc`, ...) expand to the keys of their nested
/// object; plain keys are paths themselves. Both kinds may appear in one
/// payload.
pub fn extract_update_paths(update: &Fields) -> Vec<String> {
    extract_update_paths_with_prefix(update, DEFAULT_OPERATOR_PREFIX)
}

/// [`extract_update_paths`] with a custom operator prefix.
///
/// An empty prefix disables operator expansion.
pub fn extract_update_paths_with_prefix(update: &Fields, prefix: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for (key, value) in update {
        let is_operator = !prefix.is_empty() && key.starts_with(prefix);
        if is_operator {
            // Operators with a non-object argument name no fields.
            for path in value.as_object().into_iter().flat_map(|fields| fields.keys()) {
                if seen.insert(path.as_str()) {
                    paths.push(path.clone());
                }
            }
        } else if seen.insert(key.as_str()) {
            paths.push(key.clone());
        }
    }

    paths
}

impl PermissionEngine {
    /// Flatten an update payload using the configured operator prefix.
    pub fn extract_update_paths(&self, update: &Fields) -> Vec<String> {
        extract_update_paths_with_prefix(update, &self.config.operator_prefix)
    }
}
