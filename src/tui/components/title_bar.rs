// Title bar component
//
// App name, drawing version once loaded, and the breadcrumb trail.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let explorer = &app.explorer;

    let mut spans = vec![Span::styled(
        " DWG Explorer",
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(data) = explorer.data() {
        spans.push(Span::styled(
            format!(" │ {}", data.version),
            Style::default().fg(theme.muted),
        ));
    }

    let trail = explorer.breadcrumb();
    if !trail.segments().is_empty() {
        spans.push(Span::styled(
            format!(" │ {}", trail.breadcrumb()),
            Style::default().fg(theme.highlight),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(" ? help ").right_aligned()),
    );

    f.render_widget(title, area);
}
