// CLI module - command-line argument parsing and handlers
//
// `dwg-explorer [SNAPSHOT]` opens the explorer. Flags override the
// effective configuration for this run only.
//
// Subcommands for configuration management:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{Config, VERSION};
use crate::export::ExportFormat;

/// Terminal explorer for CAD drawing data
#[derive(Parser, Debug)]
#[command(name = "dwg-explorer")]
#[command(version = VERSION)]
#[command(about = "Browse layers and entities of a CAD drawing", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Drawing snapshot (.json) or drawing file; omit for sample data
    pub snapshot: Option<PathBuf>,

    /// Initial copy format: text, csv, json
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Wrap list navigation at the ends
    #[arg(long)]
    pub wrap: bool,

    /// Color theme: Blueprint, Terminal, Paper, Dracula
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of env/file/default config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.export_format = format;
        }
        if self.wrap {
            config.wrap_navigation = true;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Parse arguments and run any subcommand.
/// Returns `None` when a subcommand was handled (exit after).
pub fn handle_cli() -> Result<Option<Cli>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show()?;
            } else if reset {
                handle_config_reset()?;
            } else {
                println!("Usage: dwg-explorer config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            Ok(None)
        }
        None => Ok(Some(cli)),
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default()
        .save()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_snapshot_and_flags() {
        let cli = Cli::try_parse_from([
            "dwg-explorer",
            "plan.json",
            "--format",
            "csv",
            "--wrap",
            "--theme",
            "Paper",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.snapshot, Some(PathBuf::from("plan.json")));
        assert_eq!(cli.format, Some(ExportFormat::Csv));
        assert!(cli.wrap);
        assert_eq!(cli.theme.as_deref(), Some("Paper"));
    }

    #[test]
    fn overrides_only_touch_given_flags() {
        let cli = Cli::try_parse_from(["dwg-explorer", "--format", "json"]).unwrap();
        let mut config = Config::default();
        config.wrap_navigation = true;
        config.theme = "Dracula".to_string();

        cli.apply_overrides(&mut config);

        assert_eq!(config.export_format, ExportFormat::Json);
        assert!(config.wrap_navigation);
        assert_eq!(config.theme, "Dracula");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["dwg-explorer", "--format", "xml"]).is_err());
    }

    #[test]
    fn config_subcommand_parses() {
        let cli = Cli::try_parse_from(["dwg-explorer", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, show: false, reset: false })
        ));
    }
}
