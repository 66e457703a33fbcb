//! Console messages for one-shot commands
//!
//! `set-api-url`, `reset-config` and `summary` report through these helpers so
//! every command prints the same tagged, coloured prefix.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Success,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m[INFO]\x1b[0m",
            MessageKind::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            MessageKind::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Render a tagged line; `details` follows the title after a tab when present.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", kind.tag(), title)
    } else {
        format!("{} {}\t {}", kind.tag(), title, details)
    }
}

pub fn print_message(kind: MessageKind, title: &str, details: &str) {
    match kind {
        MessageKind::Error => {
            eprintln!("{}", format_message(kind, title, details))
        }
        _ => println!("{}", format_message(kind, title, details)),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Info,
            $title,
            &format!($($details)*),
        )
    };
}

/// Errors print on stderr; the details argument is optional.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Error,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Success,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_details() {
        assert_eq!(
            format_message(MessageKind::Success, "Config cleared", ""),
            "\x1b[1;32m[SUCCESS]\x1b[0m Config cleared"
        );
    }

    #[test]
    fn test_format_with_details() {
        let line = format_message(MessageKind::Info, "API URL", "http://localhost:5000/api");
        assert!(line.starts_with("\x1b[1;33m[INFO]\x1b[0m API URL\t"));
        assert!(line.ends_with("http://localhost:5000/api"));
    }
}
