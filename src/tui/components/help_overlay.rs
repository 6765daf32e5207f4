// Help overlay
//
// Key binding and search syntax reference, centered over the main layout.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::explorer::help::{KEY_BINDINGS, QUERY_SYNTAX};
use crate::tui::app::App;

const KEY_COLUMN: usize = 28;

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.label);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let row = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{key:<KEY_COLUMN$}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let mut lines = vec![Line::from(Span::styled(" Keys", header_style))];
    lines.extend(KEY_BINDINGS.iter().map(|&(k, d)| row(k, d)));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(" Search", header_style)));
    lines.extend(QUERY_SYNTAX.iter().map(|&(k, d)| row(k, d)));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(" Theme: ", desc_style),
        Span::styled(theme.name, key_style),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(84, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
