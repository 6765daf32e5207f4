// Key mapping
//
// Translates crossterm key events into explorer actions. The explorer core
// never sees crossterm types. Mapping depends on the focused pane: while
// the search bar has focus printable characters edit the query.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::explorer::{NavKey, Pane};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    FocusSearch,
    Navigate(NavKey),
    Activate,
    Back,
    ToggleHelp,
    ToggleLayer,
    /// List every entity of a category ("block" or "text")
    ShowCategory(&'static str),
    ToggleSelection,
    SelectAll,
    SelectNone,
    CycleFormat,
    Copy,
    InsertChar(char),
    DeleteChar,
}

/// Map a key event for the given focus. `None` means the key is ignored.
pub fn map_key(key: KeyEvent, focus: Pane) -> Option<Action> {
    // Some terminals (Windows) also report releases
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    // Keys that mean the same thing everywhere
    match key.code {
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Enter => return Some(Action::Activate),
        KeyCode::Esc => return Some(Action::Back),
        KeyCode::F(1) => return Some(Action::ToggleHelp),
        KeyCode::Up => return Some(Action::Navigate(NavKey::Up)),
        KeyCode::Down => return Some(Action::Navigate(NavKey::Down)),
        KeyCode::PageUp => return Some(Action::Navigate(NavKey::PageUp)),
        KeyCode::PageDown => return Some(Action::Navigate(NavKey::PageDown)),
        _ => {}
    }

    if focus == Pane::Search {
        return match key.code {
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            KeyCode::Backspace => Some(Action::DeleteChar),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Home => Some(Action::Navigate(NavKey::Home)),
        KeyCode::End => Some(Action::Navigate(NavKey::End)),
        KeyCode::Char('k') => Some(Action::Navigate(NavKey::Up)),
        KeyCode::Char('j') => Some(Action::Navigate(NavKey::Down)),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Char('v') => Some(Action::ToggleLayer),
        KeyCode::Char('b') => Some(Action::ShowCategory("block")),
        KeyCode::Char('t') => Some(Action::ShowCategory("text")),
        KeyCode::Char(' ') => Some(Action::ToggleSelection),
        KeyCode::Char('a') => Some(Action::SelectAll),
        KeyCode::Char('n') => Some(Action::SelectNone),
        KeyCode::Char('f') => Some(Action::CycleFormat),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
        _ => None,
    }
}
