//! Dashboard main renderer

use super::components::{footer, header, info_panel, logs, table};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Top-level dashboard layout: header, table, info/logs row, footer.
///
/// Shared with mouse handling so header clicks resolve against the same
/// rects the renderer draws into.
pub fn main_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area)
}

/// The area the token table occupies for a given terminal size.
pub fn table_area(area: Rect) -> Rect {
    main_chunks(area)[1]
}

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let chunks = main_chunks(f.area());

    header::render_header(f, chunks[0], state);
    table::render_token_table(f, chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[2]);

    info_panel::render_info_panel(f, content_chunks[0], state);
    logs::render_logs_panel(f, content_chunks[1], state);
    footer::render_footer(f, chunks[3]);
}
