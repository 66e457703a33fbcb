//! Dashboard logs panel component
//!
//! Renders the activity log, newest entries first

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_worker_color};
use crate::events::EventType;
use crate::logging::LogLevel;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Borders plus one line of padding on each side
    let log_count = (area.height.saturating_sub(4) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match (event.event_type, event.log_level) {
                (EventType::Success, _) => "✅",
                (EventType::Error, LogLevel::Warn) => "⚠️",
                (EventType::Error, _) => "❌",
                (EventType::Refresh, _) => "🔄",
            };
            let msg_color = match event.event_type {
                EventType::Error => Color::LightRed,
                _ => get_worker_color(&event.worker),
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("[{}] ", event.worker),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(msg_color)),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Starting up...")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(
        log_paragraph.block(logs_block).wrap(Wrap { trim: true }),
        area,
    );
}
