// Status bar component
//
// Focus, copy format and selection count on the left. Load failures and
// recent warnings take over the rest of the line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, LoadState};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let explorer = &app.explorer;

    let summary = format!(
        " {} │ copy: {} │ selected: {}",
        explorer.focus(),
        explorer.export_format(),
        explorer.selection().selected_count(),
    );
    let mut spans = vec![Span::styled(summary, Style::default().fg(theme.status_bar))];

    let problem = match &app.load_state {
        LoadState::Failed(reason) => Some(format!("Load failed: {reason}")),
        LoadState::Loading(origin) => {
            spans.push(Span::styled(
                format!(" │ loading {origin}"),
                Style::default().fg(theme.muted),
            ));
            None
        }
        LoadState::Ready => app
            .recent_problem()
            .map(|e| format!("{}: {}", e.level.as_str(), e.message)),
    };
    if let Some(problem) = problem {
        spans.push(Span::styled(
            format!(" │ {problem}"),
            Style::default().fg(theme.error),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}
