use crate::market::error::MarketError;
use log::LevelFilter;

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

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &MarketError) -> LogLevel {
        match error {
            // Non-critical: rate limiting and temporary server issues
            MarketError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            MarketError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: auth problems, malformed responses
            MarketError::Http { status, .. } if *status == 401 => LogLevel::Error,
            MarketError::Http { status, .. } if *status == 403 => LogLevel::Error,
            MarketError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    /// Heartbeat failures never block anything, so they log at warning.
    pub fn classify_heartbeat_error(&self, _error: &MarketError) -> LogLevel {
        LogLevel::Warn
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

    #[test]
    fn test_rate_limit_is_debug() {
        let classifier = ErrorClassifier::new();
        let error = MarketError::Http {
            status: 429,
            message: "too many requests".to_string(),
        };
        assert_eq!(classifier.classify_fetch_error(&error), LogLevel::Debug);
    }

    #[test]
    fn test_server_error_is_warn() {
        let classifier = ErrorClassifier::new();
        let error = MarketError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(classifier.classify_fetch_error(&error), LogLevel::Warn);
    }

    #[test]
    fn test_decode_failure_is_error() {
        let classifier = ErrorClassifier::new();
        let decode = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&MarketError::Decode(decode)),
            LogLevel::Error
        );
    }
}
