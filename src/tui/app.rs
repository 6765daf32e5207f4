// TUI application state
//
// Wraps the explorer core with the pieces that only exist on screen: the
// theme, the load state of the snapshot, toasts and the quit flag. Key
// actions from the keymap are applied here one at a time.

use chrono::Utc;

use super::components::toast::Toast;
use super::keymap::Action;
use crate::explorer::{Explorer, ExplorerOptions, NavKey, Pane};
use crate::export::ClipboardSink;
use crate::logging::{LogBuffer, LogEntry};
use crate::producer::SnapshotMessage;
use crate::theme::Theme;

/// Warnings older than this no longer show in the status bar
const PROBLEM_TTL_SECS: i64 = 8;

/// Where the snapshot currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading(String),
    Ready,
    Failed(String),
}

pub struct App {
    pub explorer: Explorer,
    pub theme: Theme,
    pub load_state: LoadState,
    pub toast: Option<Toast>,
    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(
        options: ExplorerOptions,
        theme: Theme,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardSink>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            explorer: Explorer::new(options),
            theme,
            load_state: LoadState::Loading(origin.into()),
            toast: None,
            log_buffer,
            should_quit: false,
            clipboard,
        }
    }

    /// Apply the producer's one message
    pub fn on_snapshot(&mut self, message: SnapshotMessage) {
        match message {
            SnapshotMessage::Loaded(data) => {
                self.explorer.replace_dataset(data);
                self.load_state = LoadState::Ready;
            }
            SnapshotMessage::Failed(reason) => {
                self.load_state = LoadState::Failed(reason);
            }
        }
    }

    /// Drop the toast once it has been shown long enough
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Most recent warning or error that is still fresh
    pub fn recent_problem(&self) -> Option<LogEntry> {
        self.log_buffer
            .latest_problem()
            .filter(|e| (Utc::now() - e.timestamp).num_seconds() < PROBLEM_TTL_SECS)
    }

    /// Apply one action. A rejected action is logged and shown as a toast.
    pub fn apply(&mut self, action: Action) {
        if let Err(err) = self.dispatch(action) {
            tracing::warn!(?action, error = %err, "Action rejected");
            self.toast = Some(Toast::new(err.to_string()));
        }
    }

    fn dispatch(&mut self, action: Action) -> crate::error::ExplorerResult<()> {
        let explorer = &mut self.explorer;
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => {
                explorer.focus_next();
            }
            Action::FocusPrev => {
                explorer.focus_prev();
            }
            Action::FocusSearch => explorer.focus_search(),
            Action::Navigate(NavKey::Down) if explorer.focus() == Pane::Search => {
                explorer.activate()?;
            }
            Action::Navigate(key) => {
                explorer.navigate(key);
            }
            Action::Activate => explorer.activate()?,
            Action::Back => explorer.back(),
            Action::ToggleHelp => explorer.toggle_help(),
            Action::ToggleLayer => {
                if explorer.focus() == Pane::Layers {
                    explorer.toggle_current_layer()?;
                }
            }
            Action::ShowCategory(category) => explorer.show_category(category)?,
            Action::ToggleSelection => {
                if explorer.focus() == Pane::Entities {
                    explorer.toggle_current_selection()?;
                }
            }
            Action::SelectAll => {
                if explorer.focus() == Pane::Entities {
                    explorer.select_all_items()?;
                }
            }
            Action::SelectNone => explorer.select_none(),
            Action::CycleFormat => {
                let format = explorer.cycle_export_format();
                self.toast = Some(Toast::new(format!("Copy format: {format}")));
            }
            Action::Copy => self.copy(),
            Action::InsertChar(c) => explorer.push_query_char(c),
            Action::DeleteChar => explorer.pop_query_char(),
        }
        Ok(())
    }

    fn copy(&mut self) {
        let message = match self.explorer.copy_selected_items(self.clipboard.as_mut()) {
            Ok(0) => "Nothing to copy".to_string(),
            Ok(1) => "1 item copied to clipboard".to_string(),
            Ok(n) => format!("{n} items copied to clipboard"),
            Err(err) => {
                let message = err.to_string();
                tracing::error!("{:#}", anyhow::Error::from(err));
                message
            }
        };
        self.toast = Some(Toast::new(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::clipboard::MemoryClipboard;
    use crate::producer::sample_drawing;

    fn loaded_app(clipboard: MemoryClipboard) -> App {
        let mut app = App::new(
            ExplorerOptions::default(),
            Theme::default(),
            LogBuffer::new(),
            Box::new(clipboard),
            "sample data",
        );
        app.on_snapshot(SnapshotMessage::Loaded(sample_drawing()));
        app
    }

    fn toast_text(app: &App) -> Option<&str> {
        app.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn starts_loading_then_ready() {
        let mut app = App::new(
            ExplorerOptions::default(),
            Theme::default(),
            LogBuffer::new(),
            Box::new(MemoryClipboard::new()),
            "plan.json",
        );
        assert_eq!(app.load_state, LoadState::Loading("plan.json".to_string()));
        assert!(!app.explorer.has_data());

        app.on_snapshot(SnapshotMessage::Loaded(sample_drawing()));
        assert_eq!(app.load_state, LoadState::Ready);
        assert!(app.explorer.has_data());
    }

    #[test]
    fn failed_load_keeps_explorer_empty() {
        let mut app = App::new(
            ExplorerOptions::default(),
            Theme::default(),
            LogBuffer::new(),
            Box::new(MemoryClipboard::new()),
            "plan.dwg",
        );
        app.on_snapshot(SnapshotMessage::Failed("converter missing".to_string()));
        assert_eq!(app.load_state, LoadState::Failed("converter missing".to_string()));

        // Actions against an empty explorer are rejected, not fatal
        app.apply(Action::Activate);
        app.apply(Action::ShowCategory("block"));
        assert!(!app.should_quit);
    }

    #[test]
    fn typing_filters_layers() {
        let mut app = loaded_app(MemoryClipboard::new());
        for c in "wall".chars() {
            app.apply(Action::InsertChar(c));
        }
        assert_eq!(app.explorer.query(), "wall");
        assert_eq!(app.explorer.visible_layers().len(), 1);

        app.apply(Action::DeleteChar);
        assert_eq!(app.explorer.query(), "wal");
    }

    #[test]
    fn drill_down_and_copy_one_item() {
        let mut app = loaded_app(MemoryClipboard::new());
        app.apply(Action::Navigate(NavKey::Down)); // search -> layers
        assert_eq!(app.explorer.focus(), Pane::Layers);

        app.apply(Action::Activate);
        assert_eq!(app.explorer.focus(), Pane::Entities);

        app.apply(Action::Copy);
        assert_eq!(toast_text(&app), Some("1 item copied to clipboard"));
    }

    #[test]
    fn copy_selection_reports_count() {
        let mut app = loaded_app(MemoryClipboard::new());
        app.apply(Action::FocusNext);
        app.apply(Action::ShowCategory("block"));
        app.apply(Action::SelectAll);
        app.apply(Action::Copy);
        assert_eq!(toast_text(&app), Some("3 items copied to clipboard"));
    }

    #[test]
    fn copy_failure_shows_toast() {
        let mut app = loaded_app(MemoryClipboard::failing("no display"));
        app.apply(Action::FocusNext);
        app.apply(Action::Activate);
        app.apply(Action::Copy);
        assert_eq!(toast_text(&app), Some("failed to copy 1 entity as text"));
    }

    #[test]
    fn cycle_format_announces_new_format() {
        let mut app = loaded_app(MemoryClipboard::new());
        app.apply(Action::CycleFormat);
        assert_eq!(toast_text(&app), Some("Copy format: csv"));
    }

    #[test]
    fn visibility_toggle_only_on_layers_pane() {
        let mut app = loaded_app(MemoryClipboard::new());
        app.apply(Action::ToggleLayer); // search focused, ignored
        assert!(app.explorer.visible_layers()[0].is_on);

        app.apply(Action::FocusNext);
        app.apply(Action::ToggleLayer);
        assert!(!app.explorer.visible_layers()[0].is_on);
    }

    #[test]
    fn selection_keys_only_on_entities_pane() {
        let mut app = loaded_app(MemoryClipboard::new());
        app.apply(Action::FocusNext);
        app.apply(Action::Activate);
        app.apply(Action::Back);
        assert_eq!(app.explorer.focus(), Pane::Layers);

        app.apply(Action::ToggleSelection);
        app.apply(Action::SelectAll);
        assert_eq!(app.explorer.selection().selected_count(), 0);

        app.apply(Action::FocusNext);
        assert_eq!(app.explorer.focus(), Pane::Entities);
        app.apply(Action::ToggleSelection);
        assert_eq!(app.explorer.selection().selected_count(), 1);
        app.apply(Action::SelectAll);
        assert_eq!(app.explorer.selection().selected_count(), 2);
    }

    #[test]
    fn rejected_action_shows_toast() {
        let mut app = App::new(
            ExplorerOptions::default(),
            Theme::default(),
            LogBuffer::new(),
            Box::new(MemoryClipboard::new()),
            "plan.json",
        );
        app.apply(Action::FocusNext);
        app.apply(Action::Activate);
        assert_eq!(toast_text(&app), Some("no drawing data loaded"));
    }

    #[test]
    fn activate_with_empty_filter_shows_toast() {
        let mut app = loaded_app(MemoryClipboard::new());
        for c in "zzz".chars() {
            app.apply(Action::InsertChar(c));
        }
        app.apply(Action::FocusNext);
        app.apply(Action::Activate);
        assert_eq!(
            toast_text(&app),
            Some("index 0 is out of range for a list of 0 items")
        );
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = loaded_app(MemoryClipboard::new());
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
