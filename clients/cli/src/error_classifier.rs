use crate::employees::error::FetchError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match error {
            // Non-critical: rate limiting, temporary server issues
            FetchError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            FetchError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: auth, malformed payloads
            FetchError::Http { status, .. } if *status == 401 => LogLevel::Error,
            FetchError::Http { status, .. } if *status == 403 => LogLevel::Error,
            FetchError::MalformedResponse(_) => LogLevel::Error,

            // Network issues - usually temporary
            FetchError::Timeout(_) => LogLevel::Warn,
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn http(status: u16) -> FetchError {
        FetchError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_fetch_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(401)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Warn);
        assert_eq!(
            classifier.classify_fetch_error(&FetchError::MalformedResponse("x".into())),
            LogLevel::Error
        );
        assert_eq!(
            classifier.classify_fetch_error(&FetchError::Timeout(Duration::from_secs(1))),
            LogLevel::Warn
        );
    }
}
