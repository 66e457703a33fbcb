use log::LevelFilter;
use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Install a stderr logger for headless runs.
///
/// The TUI never calls this: writing to stderr would tear the alternate screen.
pub fn init_headless_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(get_rust_log_level().into())
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}
