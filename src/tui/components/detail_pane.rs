// Detail pane
//
// Renders the explorer's `DetailPane` with labels and values in separate
// colors. Long values wrap rather than scroll.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::panel_block;
use crate::explorer::DetailLine;
use crate::theme::Theme;
use crate::tui::app::{App, LoadState};

fn detail_line<'a>(line: &'a DetailLine, theme: &Theme) -> Line<'a> {
    let label = Style::default().fg(theme.label);
    let value = Style::default().fg(theme.value);
    match line {
        DetailLine::Field(name, v) => Line::from(vec![
            Span::styled(format!("{name}: "), label),
            Span::styled(v.as_str(), value),
        ]),
        DetailLine::Section(name) => Line::from(Span::styled(format!("{name}:"), label)),
        DetailLine::Entry(tag, v) => Line::from(vec![
            Span::styled(format!("  {tag}: "), label),
            Span::styled(v.as_str(), value),
        ]),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let detail = app.explorer.detail();

    let mut lines: Vec<Line> = Vec::with_capacity(detail.lines.len() + 2);
    if let Some(title) = &detail.title {
        lines.push(Line::from(Span::styled(
            title.as_str(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
    }
    lines.extend(detail.lines.iter().map(|l| detail_line(l, theme)));

    if detail.is_empty() {
        let placeholder = match &app.load_state {
            LoadState::Loading(origin) => format!("Loading {origin}..."),
            LoadState::Failed(_) => "No drawing loaded".to_string(),
            LoadState::Ready => String::new(),
        };
        lines.push(Line::from(Span::styled(
            placeholder,
            Style::default().fg(theme.muted),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(panel_block(" Details ".to_string(), false, theme));

    f.render_widget(paragraph, area);
}
