//! Dashboard summary panel component
//!
//! Renders the total employee count and session information

use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use crate::dashboard::ViewState;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_summary_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut summary_lines = Vec::new();

    let (total_text, total_color) = match state.view() {
        ViewState::Ready(snapshot) => (snapshot.total_employees.to_string(), Color::White),
        ViewState::Loading => ("...".to_string(), Color::DarkGray),
        ViewState::Failed(_) => ("-".to_string(), Color::LightRed),
    };
    summary_lines.push(Line::from(vec![Span::styled(
        "Total Employees",
        Style::default().fg(Color::Gray),
    )]));
    summary_lines.push(Line::from(vec![Span::styled(
        total_text,
        Style::default()
            .fg(total_color)
            .add_modifier(Modifier::BOLD),
    )]));
    summary_lines.push(Line::from(""));

    if let Some(snapshot) = state.view().snapshot() {
        summary_lines.push(Line::from(vec![
            Span::styled("Departments: ", Style::default().fg(Color::Gray)),
            Span::styled(
                snapshot.stats.department_distribution.len().to_string(),
                Style::default().fg(Color::LightYellow),
            ),
        ]));
    }

    summary_lines.push(Line::from(vec![Span::styled(
        format!("API: {}", state.api_url),
        Style::default().fg(Color::LightBlue),
    )]));
    summary_lines.push(Line::from(vec![Span::styled(
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::Cyan),
    )]));
    summary_lines.push(Line::from(vec![Span::styled(
        format!("Uptime: {}", format_uptime(state.start_time.elapsed().as_secs())),
        Style::default().fg(Color::LightGreen),
    )]));

    let block = Block::default()
        .title("SUMMARY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(summary_lines)
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
