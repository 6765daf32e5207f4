// Entities list
//
// Rows of the active category (a layer's entities, or every block / text).
// Selected entities carry a check mark.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::scrollbar::render_list_scrollbar;
use super::{panel_block, truncate_to_width};
use crate::explorer::{list_label, Pane};
use crate::tui::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let explorer = &app.explorer;
    let focused = explorer.focus() == Pane::Entities;
    let rows = explorer.active_entities();
    let cursor = explorer.entity_cursor();
    let selection = explorer.selection();

    let label_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(handle, entity)| {
            let mark = if selection.is_selected(&handle.id()) {
                Span::styled("✓ ", Style::default().fg(theme.highlight))
            } else {
                Span::raw("  ")
            };
            let label = truncate_to_width(&list_label(entity), label_width);
            ListItem::new(Line::from(vec![
                mark,
                Span::styled(label, Style::default().fg(theme.foreground)),
            ]))
        })
        .collect();

    let category = if selection.category.is_empty() {
        "none"
    } else {
        selection.category.as_str()
    };
    let title = if rows.is_empty() {
        format!(" Entities [{category}] ")
    } else {
        format!(
            " Entities [{category}] ({}/{}) ",
            cursor.index() + 1,
            rows.len()
        )
    };

    let highlight = if focused {
        Style::default()
            .bg(theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(panel_block(title, focused, theme))
        .highlight_style(highlight);

    let mut state =
        ListState::default().with_selected((!cursor.is_empty()).then_some(cursor.index()));
    f.render_stateful_widget(list, area, &mut state);

    let viewport = area.height.saturating_sub(2) as usize;
    render_list_scrollbar(f, area, rows.len(), viewport, state.offset());
}
