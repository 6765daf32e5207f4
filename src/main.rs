// DWG Explorer - terminal browser for CAD drawing data
//
// Loads a drawing snapshot (layers and their entities) and lets the user
// filter layers, drill into entities, inspect their properties and copy
// them to the clipboard as text, CSV or JSON.
//
// Architecture:
// - Producer: loads the snapshot off the UI thread, sends it once over mpsc
// - Explorer: all navigation, selection and export state (no terminal types)
// - TUI (ratatui): draws explorer state, maps keys to explorer actions
// - Logging: tracing into an in-memory buffer, optionally JSON files

mod cli;
mod config;
mod error;
mod explorer;
mod export;
mod logging;
mod model;
mod producer;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::export::SystemClipboard;
use crate::theme::Theme;
use crate::tui::app::App;

/// Install the tracing subscriber.
///
/// Logs always go to the TUI buffer (stdout would garble the alternate
/// screen). File logging adds a JSON layer; the returned guard must live
/// until exit so buffered lines are flushed.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_logging(
    logging: &LoggingConfig,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("dwg_explorer={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let tui_layer = TuiLogLayer::new(log_buffer.clone());

    if !logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(tui_layer)
            .init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        tracing_subscriber::registry()
            .with(filter)
            .with(tui_layer)
            .init();
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --path)
    let Some(cli) = cli::handle_cli()? else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config);

    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config.logging, &log_buffer);

    tracing::debug!(
        theme = %config.theme,
        format = %config.export_format,
        wrap = config.wrap_navigation,
        "Configuration loaded"
    );

    // One snapshot, one message
    let (snapshot_tx, snapshot_rx) = mpsc::channel(1);
    let source = producer::source_for(cli.snapshot.as_deref(), &config.converter_path);
    let origin = source.describe();
    let producer_handle = producer::spawn_producer(source, snapshot_tx);

    let app = App::new(
        config.explorer_options(),
        Theme::by_name(&config.theme),
        log_buffer,
        Box::new(SystemClipboard),
        origin,
    );

    tracing::info!("Starting TUI");
    if let Err(e) = tui::run_tui(app, snapshot_rx).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    // The producer has either reported already or is no longer wanted
    drop(producer_handle);

    tracing::info!("Shutdown complete");
    Ok(())
}
