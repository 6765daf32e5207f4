// Components module - one render function per screen region
//
// - Title bar: app name, drawing version, breadcrumb trail
// - Search bar: query input
// - Layers / entities lists: cursor derived from the explorer's navigators
// - Detail pane: fields of the layer or entity under the cursor
// - Status bar: focus, copy format, selection, load state, recent problems
// - Help overlay and toast: drawn on top of everything else
//
// Components read `App` and never mutate it.

pub mod detail_pane;
pub mod entities_list;
pub mod help_overlay;
pub mod layers_list;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Bordered block whose border color follows focus
pub fn panel_block<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    let border_color = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(title)
}

/// Cut `line` to `max_width` display columns, ending in an ellipsis if cut
pub fn truncate_to_width(line: &str, max_width: usize) -> String {
    if line.width() <= max_width {
        return line.to_string();
    }

    let target = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(truncate_to_width("Walls", 10), "Walls");
    }

    #[test]
    fn long_lines_end_in_ellipsis() {
        let cut = truncate_to_width("DOOR_SINGLE at (100.0, 0.0)", 10);
        assert_eq!(cut, "DOOR_SING…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        // Each CJK character takes two columns
        let cut = truncate_to_width("平面図レイヤー", 7);
        assert_eq!(cut, "平面図…");
        assert!(cut.width() <= 7);
    }
}
