//! Authorizable actions.

use super::error::SecurityError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An operation a caller may be authorized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// See field values. Granted as a field list.
    Read,
    /// Modify field values. Granted as a field list.
    Write,
    /// Delete documents. Granted as a flag.
    Remove,
    /// Query documents at all. Granted as a flag.
    Find,
}

impl Action {
    /// All actions, in summary order.
    pub const ALL: [Action; 4] = [Action::Read, Action::Write, Action::Remove, Action::Find];

    /// Lowercase name used in permission tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
            Action::Remove => "remove",
            Action::Find => "find",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| SecurityError::UnknownAction(s.to_string()))
    }
}
