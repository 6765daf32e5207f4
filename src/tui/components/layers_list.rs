// Layers list
//
// One row per layer passing the search filter. The row marker shows the
// layer state: ● on, ○ off, ❄ frozen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::scrollbar::render_list_scrollbar;
use super::{panel_block, truncate_to_width};
use crate::explorer::Pane;
use crate::model::Layer;
use crate::theme::Theme;
use crate::tui::app::App;

fn marker(layer: &Layer, theme: &Theme) -> Span<'static> {
    if layer.is_frozen {
        Span::styled("❄ ", Style::default().fg(theme.layer_frozen))
    } else if layer.is_on {
        Span::styled("● ", Style::default().fg(theme.layer_on))
    } else {
        Span::styled("○ ", Style::default().fg(theme.layer_off))
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let explorer = &app.explorer;
    let focused = explorer.focus() == Pane::Layers;
    let layers = explorer.visible_layers();
    let cursor = explorer.layer_cursor();

    // Marker takes two columns, borders two more
    let name_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = layers
        .iter()
        .map(|layer| {
            let label = format!("{} ({})", layer.name, layer.entities.len());
            let text_style = if layer.is_on {
                Style::default().fg(theme.foreground)
            } else {
                Style::default().fg(theme.muted)
            };
            ListItem::new(Line::from(vec![
                marker(layer, theme),
                Span::styled(truncate_to_width(&label, name_width), text_style),
            ]))
        })
        .collect();

    let title = if layers.is_empty() {
        " Layers ".to_string()
    } else {
        format!(" Layers ({}/{}) ", cursor.index() + 1, layers.len())
    };

    let highlight = if focused {
        Style::default()
            .bg(theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(items)
        .block(panel_block(title, focused, theme))
        .highlight_style(highlight);

    let mut state =
        ListState::default().with_selected((!cursor.is_empty()).then_some(cursor.index()));
    f.render_stateful_widget(list, area, &mut state);

    let viewport = area.height.saturating_sub(2) as usize;
    render_list_scrollbar(f, area, layers.len(), viewport, state.offset());
}
