//! The permission engine.

use super::table::PermissionTable;
use crate::catalog::SchemaPaths;
use crate::config::EngineConfig;
use crate::document::Fields;
use serde_json::Value;

/// Host capability computing permission levels from identity context.
///
/// Must be a fast, synchronous function of its inputs. Any asynchronous
/// identity lookup belongs before the engine is called.
pub trait LevelSource: Send + Sync {
    /// Level names for the given payload and (optional) document fields.
    fn auth_levels(&self, payload: &Value, doc: Option<&Fields>) -> Vec<String>;
}

impl<F> LevelSource for F
where
    F: Fn(&Value, Option<&Fields>) -> Vec<String> + Send + Sync,
{
    fn auth_levels(&self, payload: &Value, doc: Option<&Fields>) -> Vec<String> {
        self(payload, doc)
    }
}

/// Field-level permission engine.
///
/// Constructed once with the permission table and schema capabilities,
/// then shared read-only across requests. Every operation is a pure
/// function of the engine and its arguments, apart from sanitization
/// rewriting the fields of the document it is handed.
pub struct PermissionEngine {
    pub(super) table: PermissionTable,
    pub(super) paths: Box<dyn SchemaPaths>,
    pub(super) level_source: Option<Box<dyn LevelSource>>,
    pub(super) config: EngineConfig,
}

impl PermissionEngine {
    /// Create an engine over a table and a schema path oracle.
    pub fn new(table: PermissionTable, paths: impl SchemaPaths + 'static) -> Self {
        Self {
            table,
            paths: Box::new(paths),
            level_source: None,
            config: EngineConfig::default(),
        }
    }

    /// Compute levels from the auth payload when no override is given.
    pub fn with_level_source(mut self, source: impl LevelSource + 'static) -> Self {
        self.level_source = Some(Box::new(source));
        self
    }

    /// Replace the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// The permission table.
    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Check if a level source is configured.
    pub fn has_level_source(&self) -> bool {
        self.level_source.is_some()
    }
}

impl std::fmt::Debug for PermissionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionEngine")
            .field("table", &self.table)
            .field("level_source", &self.has_level_source())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldSchema;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable() {
        assert_send_sync::<PermissionEngine>();
    }

    #[test]
    fn test_builder() {
        let engine = PermissionEngine::new(PermissionTable::new(), FieldSchema::new())
            .with_config(EngineConfig::new().defaults_level("public"))
            .with_level_source(|_: &Value, _: Option<&Fields>| vec!["owner".to_string()]);

        assert!(engine.has_level_source());
        assert_eq!(engine.config().defaults_level, "public");
        assert!(engine.table().is_empty());
        assert!(format!("{:?}", engine).contains("PermissionEngine"));
    }
}
