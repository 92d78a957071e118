//! Engine configuration.

/// Level name every request is granted regardless of identity.
pub const DEFAULT_LEVEL: &str = "defaults";

/// Prefix marking operator keys in update payloads (`$set`, `$inc`, ...).
pub const DEFAULT_OPERATOR_PREFIX: &str = "$";

/// Reserved field the permission summary is embedded under.
pub const DEFAULT_PERMISSIONS_FIELD: &str = "permissions";

/// Configuration for a [`PermissionEngine`](crate::PermissionEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Name of the baseline level appended to every resolved level set.
    pub defaults_level: String,

    /// Prefix that marks operator keys in update payloads.
    pub operator_prefix: String,

    /// Field name the permission summary is attached under.
    pub permissions_field: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            defaults_level: DEFAULT_LEVEL.to_string(),
            operator_prefix: DEFAULT_OPERATOR_PREFIX.to_string(),
            permissions_field: DEFAULT_PERMISSIONS_FIELD.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the baseline level name.
    pub fn defaults_level(mut self, name: impl Into<String>) -> Self {
        self.defaults_level = name.into();
        self
    }

    /// Set the operator key prefix.
    pub fn operator_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.operator_prefix = prefix.into();
        self
    }

    /// Set the field the permission summary is embedded under.
    pub fn permissions_field(mut self, field: impl Into<String>) -> Self {
        self.permissions_field = field.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.defaults_level, "defaults");
        assert_eq!(config.operator_prefix, "$");
        assert_eq!(config.permissions_field, "permissions");
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .defaults_level("public")
            .operator_prefix("@")
            .permissions_field("_acl");

        assert_eq!(config.defaults_level, "public");
        assert_eq!(config.operator_prefix, "@");
        assert_eq!(config.permissions_field, "_acl");
    }
}
