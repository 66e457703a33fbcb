//! Dashboard chart components
//!
//! Draws the three chart specs of a loaded snapshot. The department share is
//! drawn as labelled proportional bars since the terminal has no pie widget.

use super::super::utils::{format_amount, parse_hex_color};
use crate::charts::{ChartSpec, DashboardCharts, LegendPosition};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, Padding,
    Paragraph,
};

pub fn render_charts_section(f: &mut Frame, area: Rect, charts: &DashboardCharts) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_department_chart(f, rows[0], &charts.department);
    render_salary_chart(f, bottom[0], &charts.salary);
    render_payroll_chart(f, bottom[1], &charts.payroll);
}

fn chart_block(spec: &ChartSpec) -> Block<'static> {
    Block::default()
        .title(spec.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn series_color(spec: &ChartSpec, index: usize) -> Color {
    if spec.colors.is_empty() {
        return Color::White;
    }
    parse_hex_color(&spec.colors[index % spec.colors.len()])
}

/// One line per department: label, proportional bar, count and share.
pub fn render_department_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let block = chart_block(spec).padding(Padding::horizontal(1));
    let total = spec.total();

    if total == 0.0 {
        let empty = Paragraph::new("No employees")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let label_width = spec.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    // Room left after borders, padding, label and the "  999 (100.0%)" suffix
    let bar_space = (area.width as usize).saturating_sub(label_width + 22).max(1);

    let lines: Vec<Line> = spec
        .points()
        .enumerate()
        .map(|(index, (label, value))| {
            let share = value / total;
            let filled = ((share * bar_space as f64).round() as usize).max(1);
            Line::from(vec![
                Span::styled(
                    format!("{:<width$} ", label, width = label_width),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(series_color(spec, index)),
                ),
                Span::styled(
                    format!(" {} ({:.1}%)", value as u64, share * 100.0),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_salary_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let color = series_color(spec, 0);
    let bars: Vec<Bar> = spec
        .points()
        .map(|(label, value)| {
            Bar::default()
                .value(value as u64)
                .label(Line::from(label.to_string()))
                .text_value(format!("{}", value as u64))
                .style(Style::default().fg(color))
        })
        .collect();

    // Slots left over after borders and gaps, shared by the four buckets
    let inner_width = area.width.saturating_sub(2);
    let bar_count = bars.len().max(1) as u16;
    let bar_width = (inner_width.saturating_sub(bar_count) / bar_count).clamp(1, 12);

    let mut chart = BarChart::default()
        .block(chart_block(spec))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );

    // Whole-number ticks need at least one unit of headroom
    if spec.y_axis.as_ref().and_then(|axis| axis.step_size).is_some() {
        chart = chart.max((spec.max_value() as u64).max(1));
    }

    f.render_widget(chart, area);
}

pub fn render_payroll_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let color = series_color(spec, 0);
    let points: Vec<(f64, f64)> = spec
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| (index as f64, *value))
        .collect();

    let begin_at_zero = spec.y_axis.as_ref().is_none_or(|axis| axis.begin_at_zero);
    let max = spec.max_value().max(1.0) * 1.1;
    let min = if begin_at_zero {
        0.0
    } else {
        spec.values.iter().copied().fold(max, f64::min)
    };

    let dataset = Dataset::default()
        .name(spec.series_label.clone().unwrap_or_default())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, (spec.labels.len().max(2) - 1) as f64])
        .labels(spec.labels.clone());

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([min, max])
        .labels(vec![
            format_amount(min),
            format_amount((min + max) / 2.0),
            format_amount(max),
        ]);

    let legend_position = match spec.legend {
        LegendPosition::Top => Some(ratatui::widgets::LegendPosition::Top),
        LegendPosition::Right => Some(ratatui::widgets::LegendPosition::Right),
        LegendPosition::Hidden => None,
    };

    let chart = Chart::new(vec![dataset])
        .block(chart_block(spec))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend_position);

    f.render_widget(chart, area);
}
