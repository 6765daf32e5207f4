// Theme support for the TUI
//
// Provides color palettes selectable from the config file. "Terminal" uses
// the terminal's ANSI palette, the other themes use true color (RGB).

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,
    pub highlight: Color,
    pub selection_bg: Color,
    pub status_bar: Color,

    // Detail pane
    pub label: Color,
    pub value: Color,

    // Layer state markers
    pub layer_on: Color,
    pub layer_off: Color,
    pub layer_frozen: Color,

    pub error: Color,
}

impl Theme {
    /// Load theme by name, unknown names fall back to Blueprint
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "terminal" | "auto" => Self::terminal(),
            "paper" => Self::paper(),
            "dracula" => Self::dracula(),
            _ => Self::blueprint(),
        }
    }

    /// Deep blue background with cyan linework, like a plotted sheet
    pub fn blueprint() -> Self {
        Self {
            name: "Blueprint",
            background: Color::Rgb(0x0b, 0x1e, 0x3b),
            foreground: Color::Rgb(0xe6, 0xf0, 0xff),
            muted: Color::Rgb(0x6d, 0x86, 0xa8),
            title: Color::Rgb(0x7f, 0xdb, 0xff),
            border: Color::Rgb(0x3a, 0x5a, 0x85),
            border_focused: Color::Rgb(0x7f, 0xdb, 0xff),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(0xff, 0xd1, 0x66),
            selection_bg: Color::Rgb(0x1d, 0x3f, 0x6e),
            status_bar: Color::Rgb(0x7f, 0xdb, 0xff),
            label: Color::Rgb(0x5e, 0xe0, 0x9b),
            value: Color::Rgb(0xe6, 0xf0, 0xff),
            layer_on: Color::Rgb(0x5e, 0xe0, 0x9b),
            layer_off: Color::Rgb(0x6d, 0x86, 0xa8),
            layer_frozen: Color::Rgb(0x9a, 0xc8, 0xff),
            error: Color::Rgb(0xff, 0x6b, 0x6b),
        }
    }

    /// Terminal theme - uses the terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "Terminal",
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::White,
            border_focused: Color::Cyan,
            border_type: BorderType::Plain,
            highlight: Color::Yellow,
            selection_bg: Color::DarkGray,
            status_bar: Color::Green,
            label: Color::Green,
            value: Color::Reset,
            layer_on: Color::Green,
            layer_off: Color::DarkGray,
            layer_frozen: Color::Blue,
            error: Color::Red,
        }
    }

    /// Light theme for bright terminals
    pub fn paper() -> Self {
        Self {
            name: "Paper",
            background: Color::Rgb(0xfa, 0xf8, 0xf2),
            foreground: Color::Rgb(0x2b, 0x2b, 0x2b),
            muted: Color::Rgb(0x8a, 0x8a, 0x8a),
            title: Color::Rgb(0x1f, 0x5f, 0xa8),
            border: Color::Rgb(0xc8, 0xc4, 0xb8),
            border_focused: Color::Rgb(0x1f, 0x5f, 0xa8),
            border_type: BorderType::Plain,
            highlight: Color::Rgb(0xb3, 0x5c, 0x00),
            selection_bg: Color::Rgb(0xe4, 0xe0, 0xd4),
            status_bar: Color::Rgb(0x2e, 0x7d, 0x32),
            label: Color::Rgb(0x2e, 0x7d, 0x32),
            value: Color::Rgb(0x2b, 0x2b, 0x2b),
            layer_on: Color::Rgb(0x2e, 0x7d, 0x32),
            layer_off: Color::Rgb(0x8a, 0x8a, 0x8a),
            layer_frozen: Color::Rgb(0x1f, 0x5f, 0xa8),
            error: Color::Rgb(0xc6, 0x28, 0x28),
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "Dracula",
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4),     // comment
            title: Color::Rgb(0x8b, 0xe9, 0xfd),     // cyan
            border: Color::Rgb(0x62, 0x72, 0xa4),    // comment
            border_focused: Color::Rgb(0xbd, 0x93, 0xf9), // purple
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            selection_bg: Color::Rgb(0x44, 0x47, 0x5a),
            status_bar: Color::Rgb(0x50, 0xfa, 0x7b), // green
            label: Color::Rgb(0x50, 0xfa, 0x7b),
            value: Color::Rgb(0xf8, 0xf8, 0xf2),
            layer_on: Color::Rgb(0x50, 0xfa, 0x7b),
            layer_off: Color::Rgb(0x62, 0x72, 0xa4),
            layer_frozen: Color::Rgb(0x8b, 0xe9, 0xfd),
            error: Color::Rgb(0xff, 0x55, 0x55),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::blueprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(Theme::by_name("DRACULA").name, "Dracula");
        assert_eq!(Theme::by_name("paper").name, "Paper");
        assert_eq!(Theme::by_name("auto").name, "Terminal");
        assert_eq!(Theme::by_name("no-such-theme").name, "Blueprint");
    }

    #[test]
    fn every_listed_name_resolves_to_itself() {
        for name in ["Blueprint", "Terminal", "Paper", "Dracula"] {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }
}
