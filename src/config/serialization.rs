//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use std::path::Path;

use super::Config;

impl Config {
    /// Render the effective configuration as a commented config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# dwg-explorer configuration

# Theme: Blueprint, Terminal, Paper, Dracula
theme = "{theme}"

# Wrap the list cursor from the last item to the first (and back)
wrap_navigation = {wrap}

# Items moved by PageUp / PageDown
page_size = {page_size}

# Initial copy format: text, csv, json (cycle with 'f' in the TUI)
export_format = "{format}"

# ODA File Converter executable (ODA_CONVERTER_PATH env var overrides)
converter_path = {converter:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI buffer)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            wrap = self.wrap_navigation,
            page_size = self.page_size,
            format = self.export_format,
            converter = self.converter_path.display().to_string(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to the default config path
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };
        self.save_to(&path)
    }

    /// Save current configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml())
    }
}
