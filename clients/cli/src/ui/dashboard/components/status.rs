//! Placeholder panel shown instead of the charts while loading or after a failure

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render_status_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let view = state.view();
    let (lines, color) = if let Some(message) = view.error_message() {
        (
            vec![
                Line::from(message.to_string()),
                Line::from(""),
                Line::from("Press [R] to retry"),
            ],
            Color::LightRed,
        )
    } else if view.is_loading() {
        (
            vec![Line::from(format!(
                "{} Loading dashboard data...",
                SPINNER[state.tick % SPINNER.len()]
            ))],
            Color::LightBlue,
        )
    } else {
        // Ready views draw the charts instead of this panel
        return;
    };

    let block = Block::default()
        .title("DASHBOARD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
