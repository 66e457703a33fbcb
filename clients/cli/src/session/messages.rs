//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    /// Session messages go to stderr so `summary --json` keeps stdout clean.
    pub fn print(&self) {
        eprintln!("{}", self.render());
    }
}

pub fn print_session_starting(mode: &str, api_url: &str) {
    SessionMessage::info(format!("Starting {} mode against {}", mode, api_url)).print();
}

pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

pub fn print_session_exit_success() {
    SessionMessage::success("Employee dashboard exited successfully").print();
}
