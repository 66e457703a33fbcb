//! Dashboard main renderer

use super::components::{charts, footer, header, logs, status, summary};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(25),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[1]);

    summary::render_summary_panel(f, content_chunks[0], state);
    // Charts only exist for a successful load; no partial rendering otherwise
    match state.view().snapshot() {
        Some(snapshot) => charts::render_charts_section(f, content_chunks[1], &snapshot.charts),
        None => status::render_status_panel(f, content_chunks[1], state),
    }
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3]);
}
