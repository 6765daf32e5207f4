// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, the snapshot producer)
// - Rendering the UI from explorer state

pub mod app;
pub mod components;
pub mod keymap;
pub mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::producer::SnapshotMessage;

/// Run the TUI until the user quits.
///
/// The terminal is restored even when the event loop fails.
pub async fn run_tui(
    mut app: App,
    mut snapshot_rx: mpsc::Receiver<SnapshotMessage>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut snapshot_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input, a redraw tick and the one-shot snapshot
/// channel, whichever is ready first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    snapshot_rx: &mut mpsc::Receiver<SnapshotMessage>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        if let Some(action) = keymap::map_key(key, app.explorer.focus()) {
                            app.apply(action);
                        }
                    }
                }
            } => {}

            // Expire toasts and pick up new log lines
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Producer sends once, then the channel closes and this arm is disabled
            Some(message) = snapshot_rx.recv() => {
                app.on_snapshot(message);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
