//! Output formatters for engine results.

use clap::ValueEnum;
use fieldguard_core::Action;
use serde_json::{json, Value};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One item per line
    Text,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format a list of level names or field paths.
    fn format_list(&self, items: &[String]) -> String;

    /// Format the outcome of a permission check.
    fn format_check(&self, action: Action, allowed: bool) -> String;

    /// Format redacted documents.
    fn format_documents(&self, documents: &Value) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Plain text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_list(&self, items: &[String]) -> String {
        items.join("\n")
    }

    fn format_check(&self, action: Action, allowed: bool) -> String {
        if allowed {
            format!("{}: allowed", action)
        } else {
            format!("{}: denied", action)
        }
    }

    fn format_documents(&self, documents: &Value) -> String {
        serde_json::to_string_pretty(documents).unwrap_or_else(|_| "null".to_string())
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_list(&self, items: &[String]) -> String {
        serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_check(&self, action: Action, allowed: bool) -> String {
        json!({
            "action": action.as_str(),
            "allowed": allowed
        })
        .to_string()
    }

    fn format_documents(&self, documents: &Value) -> String {
        documents.to_string()
    }
}
