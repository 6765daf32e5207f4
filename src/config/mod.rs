//! Configuration for the drawing explorer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/dwg-explorer/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Only `ExplorerOptions` reaches the explorer core; everything else is
//! consumed by startup and the terminal front end.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::explorer::{ExplorerOptions, DEFAULT_PAGE_SIZE};
use crate::export::ExportFormat;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_THEME: &str = "Blueprint";

/// Where the external DWG converter is expected when nothing else is configured
pub fn default_converter_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files\ODA\ODAFileConverter 26.4.0\ODAFileConverter.exe")
    } else {
        PathBuf::from("/usr/local/bin/ODAFileConverter")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Blueprint", "Terminal", "Paper", "Dracula"
    pub theme: String,

    /// Cursor wraps from the last list item to the first and back
    pub wrap_navigation: bool,

    /// Items moved by PageUp / PageDown
    pub page_size: usize,

    /// Initial copy format
    pub export_format: ExportFormat,

    /// External DWG to DXF converter executable
    pub converter_path: PathBuf,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            wrap_navigation: false,
            page_size: DEFAULT_PAGE_SIZE,
            export_format: ExportFormat::Text,
            converter_path: default_converter_path(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure, every key optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub wrap_navigation: Option<bool>,
    pub page_size: Option<usize>,
    pub export_format: Option<String>,
    pub converter_path: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Get the config file path: ~/.config/dwg-explorer/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("dwg-explorer").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse a config file. A missing file is not an error.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("DWG_EXPLORER_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Wrap: env > file > default (unparseable env values are ignored)
        let wrap_navigation = env("DWG_EXPLORER_WRAP")
            .and_then(|v| parse_bool(&v))
            .or(file.wrap_navigation)
            .unwrap_or(defaults.wrap_navigation);

        // Page size: file > default, never zero
        let page_size = file
            .page_size
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        // Export format: env > file > default
        let export_format = env("DWG_EXPLORER_FORMAT")
            .and_then(|v| v.parse().ok())
            .or_else(|| file.export_format.and_then(|v| v.parse().ok()))
            .unwrap_or(defaults.export_format);

        // Converter: env > file > platform default
        let converter_path = env("ODA_CONVERTER_PATH")
            .filter(|v| !v.is_empty())
            .or(file.converter_path)
            .map(PathBuf::from)
            .unwrap_or(defaults.converter_path);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            wrap_navigation,
            page_size,
            export_format,
            converter_path,
            logging,
        }
    }

    /// The subset of settings the explorer core takes
    pub fn explorer_options(&self) -> ExplorerOptions {
        ExplorerOptions {
            page_size: self.page_size,
            wrap_navigation: self.wrap_navigation,
            export_format: self.export_format,
        }
    }
}
