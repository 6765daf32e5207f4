//! Export of entities to clipboard-ready text.
//!
//! [`formatter`] turns entities into plain-text lines, CSV rows or a JSON
//! array. [`clipboard`] is the sink the result is written to.

pub mod clipboard;
pub mod formatter;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use formatter::{format_as_csv, format_as_json, format_entities};

use crate::error::ExplorerResult;
use crate::model::Entity;

/// Output format for copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// text -> csv -> json -> text
    pub fn next(self) -> Self {
        match self {
            ExportFormat::Text => ExportFormat::Csv,
            ExportFormat::Csv => ExportFormat::Json,
            ExportFormat::Json => ExportFormat::Text,
        }
    }

    /// Render `entities` as one blob. Absent entries are skipped.
    pub fn render(self, entities: &[Option<&Entity>]) -> ExplorerResult<String> {
        match self {
            ExportFormat::Text => Ok(format_entities(entities).collect::<Vec<_>>().join("\n")),
            ExportFormat::Csv => Ok(format_as_csv(entities).join("\n")),
            ExportFormat::Json => format_as_json(entities),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected text, csv or json)")),
        }
    }
}
