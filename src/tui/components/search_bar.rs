// Search bar
//
// Shows the layer query. When focused a block cursor follows the text;
// when empty and unfocused a hint lists the filter directives.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel_block;
use crate::explorer::Pane;
use crate::tui::app::App;

const HINT: &str = "name, on:true, on:false, frozen:true, frozen:false";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.explorer.focus() == Pane::Search;
    let query = app.explorer.query();

    let line = if query.is_empty() && !focused {
        Line::from(Span::styled(HINT, Style::default().fg(theme.muted)))
    } else {
        let mut spans = vec![Span::styled(query, Style::default().fg(theme.foreground))];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(theme.highlight)));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).block(panel_block(" Search ".to_string(), focused, theme));
    f.render_widget(paragraph, area);
}
