//! Dashboard utility functions
//!
//! Helpers shared across dashboard components

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity entry based on who produced it
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Loader => Color::Cyan,
        Worker::Dashboard => Color::LightGreen,
    }
}

/// Parse a `#RRGGBB` chart colour, falling back to white.
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::White;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Format an amount with thousands separators and no decimals.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Human-readable uptime, e.g. `1h 2m 3s`.
pub fn format_uptime(secs: u64) -> String {
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#36A2EB"), Color::Rgb(0x36, 0xA2, 0xEB));
        assert_eq!(parse_hex_color("nope"), Color::White);
        assert_eq!(parse_hex_color("#GGGGGG"), Color::White);
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2024-02-15 09:30:12"), "02-15 09:30");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(155_000.0), "155,000");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(65), "1m 5s");
        assert_eq!(format_uptime(3723), "1h 2m 3s");
        assert_eq!(format_uptime(90061), "1d 1h 1m");
    }
}
