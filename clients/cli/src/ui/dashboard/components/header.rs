//! Dashboard header component
//!
//! Renders the title and a load-status gauge

use super::super::state::DashboardState;
use crate::dashboard::ViewState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!("EMPLOYEE DASHBOARD v{}", env!("CARGO_PKG_VERSION"));
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = status_gauge(state);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}

/// Label, colour and fill for the status gauge.
fn status_gauge(state: &DashboardState) -> (String, Color, u16) {
    match state.view() {
        ViewState::Loading => {
            // Loops every 20 ticks while the fetch is in flight
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("LOADING - Fetching employees (load #{})", state.generation()),
                Color::LightBlue,
                progress,
            )
        }
        ViewState::Ready(snapshot) => {
            let text = match &state.last_loaded_at {
                Some(at) => format!(
                    "READY - {} employees (updated {})",
                    snapshot.total_employees, at
                ),
                None => format!("READY - {} employees", snapshot.total_employees),
            };
            (text, Color::LightGreen, 100)
        }
        ViewState::Failed(message) => (format!("ERROR - {}", message), Color::LightRed, 100),
    }
}
