//! Command execution against a configured engine.

use crate::formatter::{create_formatter, Formatter};
use crate::loader::{self, CliError};
use crate::{Args, Command};
use fieldguard_core::{Action, PathKind, PermissionEngine, Redacted, RequestOptions, Sanitized};
use serde_json::Value;
use tracing::debug;

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Formatted output; empty prints nothing.
    pub output: String,
    /// False when the command reports a denial.
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Engine, request options and formatter built from the command line.
pub struct Session {
    engine: PermissionEngine,
    options: RequestOptions,
    formatter: Box<dyn Formatter>,
}

impl Session {
    /// Load the table and schema named by `args`.
    ///
    /// Without a schema every path counts as declared.
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let table = loader::load_table(&args.table)?;
        let engine = match &args.schema {
            Some(path) => PermissionEngine::new(table, loader::load_schema(path)?),
            None => PermissionEngine::new(table, |_: &str| PathKind::Real),
        };

        let mut options = RequestOptions::new().with_permissions(args.permissions);
        if args.no_auth {
            options = options.without_auth();
        } else if !args.levels.is_empty() {
            options = options.with_auth_level(args.levels.clone());
        }

        Ok(Self {
            engine,
            options,
            formatter: create_formatter(args.format),
        })
    }

    /// Run a single command.
    pub fn execute(&self, command: &Command) -> Result<Outcome, CliError> {
        debug!(command = ?command, "Executing command");

        match command {
            Command::Levels => {
                let levels = self.engine.resolve_levels(&self.options, None);
                Ok(Outcome::ok(self.formatter.format_list(&levels)))
            }
            Command::Fields { action } => {
                let fields = self.engine.authorized_fields(&self.options, *action, None);
                Ok(Outcome::ok(self.formatter.format_list(&fields)))
            }
            Command::Check { action } => Ok(self.check(*action)),
            Command::Find { file } => {
                let docs = loader::load_documents(file)?;
                let redacted = self.engine.guard_find(&self.options, docs)?;
                let value = self.redacted_to_value(redacted);
                Ok(Outcome::ok(self.formatter.format_documents(&value)))
            }
            Command::UpdatePaths { file, check } => {
                let update = loader::load_update(file)?;
                if *check {
                    let denied = self
                        .engine
                        .unauthorized_update_paths(&self.options, &update, None);
                    Ok(Outcome {
                        output: self.formatter.format_list(&denied),
                        success: denied.is_empty(),
                    })
                } else {
                    let paths = self.engine.extract_update_paths(&update);
                    Ok(Outcome::ok(self.formatter.format_list(&paths)))
                }
            }
        }
    }

    fn check(&self, action: Action) -> Outcome {
        let allowed = self.options.auth_is_disabled()
            || self.engine.has_permission(&self.options, action, None);
        Outcome {
            output: self.formatter.format_check(action, allowed),
            success: allowed,
        }
    }

    fn redacted_to_value(&self, redacted: Redacted<fieldguard_core::Record>) -> Value {
        let field = &self.engine.config().permissions_field;
        match redacted {
            Redacted::Single(Sanitized::Visible(record)) => record.to_value(field),
            Redacted::Single(Sanitized::Denied) => Value::Null,
            Redacted::Collection(records) => {
                Value::Array(records.iter().map(|r| r.to_value(field)).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    const TABLE: &str = r#"{
        "defaults": {"read": ["name", "address.city"], "find": true},
        "admin": {"read": ["email"], "write": ["name", "address"], "remove": true}
    }"#;

    const SCHEMA: &str = r#"["name", "email", "address.city", "address.zip"]"#;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let fixture = Self {
                dir: TempDir::new().unwrap(),
            };
            fixture.write("table.json", TABLE);
            fixture.write("schema.json", SCHEMA);
            fixture
        }

        fn write(&self, name: &str, contents: &str) -> String {
            let path = self.dir.path().join(name);
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            path.to_string_lossy().into_owned()
        }

        fn path(&self, name: &str) -> String {
            self.dir.path().join(name).to_string_lossy().into_owned()
        }

        fn run(&self, extra: &[&str]) -> Outcome {
            let table = self.path("table.json");
            let schema = self.path("schema.json");
            let mut argv = vec![
                "fieldguard",
                "--table",
                table.as_str(),
                "--schema",
                schema.as_str(),
            ];
            argv.extend_from_slice(extra);

            let args = Args::try_parse_from(argv).unwrap();
            let session = Session::from_args(&args).unwrap();
            session.execute(&args.command).unwrap()
        }
    }

    #[test]
    fn test_levels() {
        let fixture = Fixture::new();
        assert_eq!(fixture.run(&["levels"]).output, "defaults");
        assert_eq!(
            fixture.run(&["-l", "admin", "-l", "ghost", "levels"]).output,
            "admin\ndefaults"
        );
    }

    #[test]
    fn test_fields() {
        let fixture = Fixture::new();
        let outcome = fixture.run(&["--level", "admin", "fields", "read"]);
        assert_eq!(outcome.output, "email\nname\naddress.city");
        assert!(outcome.success);

        // `address` is kept as the parent of declared dotted paths.
        let outcome = fixture.run(&["--level", "admin", "--format", "json", "fields", "write"]);
        assert_eq!(outcome.output, r#"["name","address"]"#);
    }

    #[test]
    fn test_check_sets_success() {
        let fixture = Fixture::new();
        let denied = fixture.run(&["check", "remove"]);
        assert_eq!(denied.output, "remove: denied");
        assert!(!denied.success);

        let allowed = fixture.run(&["-l", "admin", "check", "remove"]);
        assert!(allowed.success);

        let disabled = fixture.run(&["--no-auth", "check", "write"]);
        assert!(disabled.success);
    }

    #[test]
    fn test_find_redacts_documents() {
        let fixture = Fixture::new();
        let docs = fixture.write(
            "docs.json",
            r#"[
                {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "address": {"city": "London", "zip": "N1"}
                },
                {"ssn": "123"}
            ]"#,
        );

        let outcome = fixture.run(&["--format", "json", "find", &docs]);
        assert_eq!(
            outcome.output,
            r#"[{"name":"Ada","address":{"city":"London"}}]"#
        );
    }

    #[test]
    fn test_find_single_denied_prints_null() {
        let fixture = Fixture::new();
        let doc = fixture.write("doc.json", r#"{"ssn": "123"}"#);
        assert_eq!(fixture.run(&["find", &doc]).output, "null");
    }

    #[test]
    fn test_find_embeds_permissions() {
        let fixture = Fixture::new();
        let doc = fixture.write("doc.json", r#"{"name": "Ada"}"#);
        let outcome = fixture.run(&["--permissions", "--format", "json", "find", &doc]);
        let value: Value = serde_json::from_str(&outcome.output).unwrap();
        assert_eq!(value["permissions"]["find"], Value::Bool(true));
        assert_eq!(value["permissions"]["remove"], Value::Bool(false));
    }

    #[test]
    fn test_update_paths() {
        let fixture = Fixture::new();
        let update = fixture.write(
            "update.json",
            r#"{"$set": {"name": "Grace", "address.zip": "N2"}, "email": "g@example.com"}"#,
        );

        let outcome = fixture.run(&["update-paths", &update]);
        assert_eq!(outcome.output, "name\naddress.zip\nemail");

        // The `address` grant covers `address.zip`.
        let outcome = fixture.run(&["-l", "admin", "update-paths", "--check", &update]);
        assert_eq!(outcome.output, "email");
        assert!(!outcome.success);

        let outcome = fixture.run(&["update-paths", "--check", &update]);
        assert_eq!(outcome.output, "name\naddress.zip\nemail");
    }

    #[test]
    fn test_missing_table_fails() {
        let args = Args::try_parse_from(["fieldguard", "--table", "/nonexistent.json", "levels"])
            .unwrap();
        assert!(matches!(
            Session::from_args(&args),
            Err(CliError::Io { .. })
        ));
    }

    #[test]
    fn test_no_auth_conflicts_with_levels() {
        let result = Args::try_parse_from([
            "fieldguard",
            "-t",
            "t.json",
            "--no-auth",
            "-l",
            "admin",
            "levels",
        ]);
        assert!(result.is_err());
    }
}
