//! Per-request options.

use serde_json::Value;

/// Explicit authorization level for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthLevel {
    /// Authorization is switched off; documents pass through untouched.
    Disabled,
    /// Ordered level names that replace any computed levels.
    Levels(Vec<String>),
}

impl AuthLevel {
    /// Explicit level names, if authorization is enabled.
    pub fn levels(&self) -> Option<&[String]> {
        match self {
            AuthLevel::Disabled => None,
            AuthLevel::Levels(levels) => Some(levels),
        }
    }

    /// Whether this is a lone empty level name, which sets no override.
    fn is_blank(&self) -> bool {
        matches!(self, AuthLevel::Levels(levels) if levels.len() == 1 && levels[0].is_empty())
    }
}

impl From<&str> for AuthLevel {
    fn from(level: &str) -> Self {
        AuthLevel::Levels(vec![level.to_string()])
    }
}

impl From<String> for AuthLevel {
    fn from(level: String) -> Self {
        AuthLevel::Levels(vec![level])
    }
}

impl From<Vec<String>> for AuthLevel {
    fn from(levels: Vec<String>) -> Self {
        AuthLevel::Levels(levels)
    }
}

impl From<Vec<&str>> for AuthLevel {
    fn from(levels: Vec<&str>) -> Self {
        AuthLevel::Levels(levels.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AuthLevel {
    fn from(levels: &[&str]) -> Self {
        AuthLevel::Levels(levels.iter().map(|level| level.to_string()).collect())
    }
}

/// Options carried by a single request.
///
/// Options are built fluently and never shared mutably: every setter
/// returns a new value, so a base configuration can be reused across
/// requests without one request's level leaking into another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Explicit level override, or the disabled sentinel.
    pub auth_level: Option<AuthLevel>,
    /// Identity context handed to the level source.
    pub auth_payload: Option<Value>,
    /// Embed a permission summary into sanitized documents.
    pub permissions: bool,
}

impl RequestOptions {
    /// Create options with no override, no payload and no embedding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit auth level.
    ///
    /// A lone empty level name clears the override instead, so computed
    /// levels apply.
    pub fn with_auth_level(mut self, level: impl Into<AuthLevel>) -> Self {
        let level = level.into();
        self.auth_level = (!level.is_blank()).then_some(level);
        self
    }

    /// Return a copy of these options with the explicit auth level set.
    ///
    /// `self` is left untouched.
    pub fn set_auth_level(&self, level: impl Into<AuthLevel>) -> Self {
        self.clone().with_auth_level(level)
    }

    /// Disable authorization for this request.
    pub fn without_auth(mut self) -> Self {
        self.auth_level = Some(AuthLevel::Disabled);
        self
    }

    /// Set the identity payload used to compute levels.
    pub fn with_auth_payload(mut self, payload: Value) -> Self {
        self.auth_payload = Some(payload);
        self
    }

    /// Embed permission summaries into sanitized documents.
    pub fn with_permissions(mut self, embed: bool) -> Self {
        self.permissions = embed;
        self
    }

    /// Check if authorization is disabled.
    pub fn auth_is_disabled(&self) -> bool {
        matches!(self.auth_level, Some(AuthLevel::Disabled))
    }

    /// Explicit level names, when an override is set.
    pub fn explicit_levels(&self) -> Option<&[String]> {
        self.auth_level.as_ref().and_then(AuthLevel::levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let options = RequestOptions::new();
        assert!(!options.auth_is_disabled());
        assert!(options.explicit_levels().is_none());
        assert!(!options.permissions);
    }

    #[test]
    fn test_level_conversions() {
        let options = RequestOptions::new().with_auth_level("admin");
        assert_eq!(options.explicit_levels().unwrap(), ["admin"]);

        let options = RequestOptions::new().with_auth_level(vec!["owner", "admin"]);
        assert_eq!(options.explicit_levels().unwrap(), ["owner", "admin"]);

        let options = RequestOptions::new().with_auth_level(&["a", "b"][..]);
        assert_eq!(options.explicit_levels().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_override_is_still_an_override() {
        let options = RequestOptions::new().with_auth_level(Vec::<String>::new());
        assert_eq!(options.explicit_levels(), Some(&[][..]));
    }

    #[test]
    fn test_empty_level_name_sets_no_override() {
        let options = RequestOptions::new().with_auth_level("");
        assert!(options.auth_level.is_none());
        assert!(options.explicit_levels().is_none());

        let options = RequestOptions::new()
            .with_auth_level("admin")
            .with_auth_level(String::new());
        assert!(options.auth_level.is_none());

        let options = RequestOptions::new().with_auth_level(vec!["", "admin"]);
        assert_eq!(options.explicit_levels().unwrap(), ["", "admin"]);
    }

    #[test]
    fn test_disabled_sentinel() {
        let options = RequestOptions::new().without_auth();
        assert!(options.auth_is_disabled());
        assert!(options.explicit_levels().is_none());
    }

    #[test]
    fn test_set_auth_level_does_not_alias() {
        let base = RequestOptions::new()
            .with_auth_payload(json!({"user_id": 1}))
            .with_permissions(true);

        let admin = base.set_auth_level("admin");
        let owner = base.set_auth_level("owner");

        assert!(base.auth_level.is_none());
        assert_eq!(admin.explicit_levels().unwrap(), ["admin"]);
        assert_eq!(owner.explicit_levels().unwrap(), ["owner"]);
        assert_eq!(owner.auth_payload, base.auth_payload);
        assert!(owner.permissions);
    }
}
