// Screen layout
//
// ┌ title / breadcrumb ──────────────────────────────┐
// ├ search ──────────────────────────────────────────┤
// ├ layers ──────┬ entities ──────┬ details ─────────┤
// │              │                │                  │
// └──────────────┴────────────────┴──────────────────┘
//   status
//
// Everything is rebuilt from `App` on every frame.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::App;
use super::components::{
    detail_pane, entities_list, help_overlay, layers_list, search_bar, status_bar, title_bar,
};
use crate::explorer::Pane;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // search
            Constraint::Min(6),    // lists + details
            Constraint::Length(2), // status
        ])
        .split(area);

    title_bar::render(f, rows[0], app);
    search_bar::render(f, rows[1], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(37),
            Constraint::Percentage(35),
        ])
        .split(rows[2]);

    layers_list::render(f, columns[0], app);
    entities_list::render(f, columns[1], app);
    detail_pane::render(f, columns[2], app);

    status_bar::render(f, rows[3], app);

    if app.explorer.focus() == Pane::Help {
        help_overlay::render(f, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
