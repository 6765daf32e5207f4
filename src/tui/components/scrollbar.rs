//! Scrollbar for list panes
//!
//! Lists scroll through ratatui's `ListState`; after the list is drawn its
//! offset is handed here so the scrollbar matches what is on screen.

use ratatui::{
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Vertical scrollbar on the right border of `area`.
///
/// Nothing is drawn when all `total` rows fit in `viewport`.
pub fn render_list_scrollbar(
    f: &mut Frame,
    area: Rect,
    total: usize,
    viewport: usize,
    offset: usize,
) {
    if total <= viewport {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));

    let content_length = total.saturating_sub(viewport);
    let mut state = ScrollbarState::new(content_length).position(offset.min(content_length));

    f.render_stateful_widget(scrollbar, area, &mut state);
}
