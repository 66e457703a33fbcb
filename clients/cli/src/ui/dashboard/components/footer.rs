//! Dashboard footer component
//!
//! Renders the key bindings

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const FOOTER_TEXT: &str = "[Q] Quit | [R] Reload | Employee Dashboard";

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
