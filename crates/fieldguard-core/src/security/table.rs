//! Declarative permission table.
//!
//! A table maps level names to the grants each level carries:
//!
//! ```json
//! {
//!   "defaults": { "read": ["name"], "find": true },
//!   "admin":    { "read": ["name", "email"], "write": ["email"], "remove": true }
//! }
//! ```

use super::action::Action;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// What a level grants for a single action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grant {
    /// Permission to perform the action at all.
    Allowed(bool),
    /// Field paths the action covers.
    Fields(Vec<String>),
}

impl Grant {
    /// Whether the grant permits the action.
    ///
    /// A field list permits the action even when it is empty.
    pub fn is_granted(&self) -> bool {
        match self {
            Grant::Allowed(allowed) => *allowed,
            Grant::Fields(_) => true,
        }
    }

    /// Field paths granted. Flags carry none.
    pub fn fields(&self) -> &[String] {
        match self {
            Grant::Allowed(_) => &[],
            Grant::Fields(fields) => fields,
        }
    }
}

/// Grants of one level, keyed by action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionMap {
    grants: BTreeMap<Action, Grant>,
}

impl ActionMap {
    /// Create an action map granting nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grant for an action.
    pub fn grant(mut self, action: Action, grant: Grant) -> Self {
        self.grants.insert(action, grant);
        self
    }

    /// Grant read access to the given fields.
    pub fn read<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grant(Action::Read, Grant::Fields(collect_fields(fields)))
    }

    /// Grant write access to the given fields.
    pub fn write<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grant(Action::Write, Grant::Fields(collect_fields(fields)))
    }

    /// Set the remove flag.
    pub fn remove(self, allowed: bool) -> Self {
        self.grant(Action::Remove, Grant::Allowed(allowed))
    }

    /// Set the find flag.
    pub fn find(self, allowed: bool) -> Self {
        self.grant(Action::Find, Grant::Allowed(allowed))
    }

    /// Get the grant for an action.
    pub fn get(&self, action: Action) -> Option<&Grant> {
        self.grants.get(&action)
    }

    /// Whether this level permits the action.
    pub fn allows(&self, action: Action) -> bool {
        self.get(action).is_some_and(Grant::is_granted)
    }

    /// Field paths this level grants for the action.
    pub fn fields(&self, action: Action) -> &[String] {
        self.get(action).map(Grant::fields).unwrap_or(&[])
    }

    /// Check if no action is granted.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

fn collect_fields<I, S>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields.into_iter().map(Into::into).collect()
}

/// Mapping from level name to that level's grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTable {
    levels: HashMap<String, ActionMap>,
}

impl PermissionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let levels = value.as_object().ok_or_else(|| {
            Error::InvalidTable("expected an object keyed by level name".to_string())
        })?;

        if let Some((name, _)) = levels.iter().find(|(_, grants)| !grants.is_object()) {
            return Err(Error::InvalidTable(format!(
                "level '{}' must map actions to grants",
                name
            )));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Add or replace a level.
    pub fn with_level(mut self, name: impl Into<String>, grants: ActionMap) -> Self {
        self.levels.insert(name.into(), grants);
        self
    }

    /// Get the grants of a level.
    pub fn get(&self, level: &str) -> Option<&ActionMap> {
        self.levels.get(level)
    }

    /// Check if a level is declared.
    pub fn contains_level(&self, level: &str) -> bool {
        self.levels.contains_key(level)
    }

    /// Declared level names, sorted.
    pub fn level_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.levels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of declared levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if no levels are declared.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
