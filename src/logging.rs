//! Display filtering for worker events
//!
//! The activity log honors `RUST_LOG` the way a normal logger would: events
//! below the configured threshold stay out of the panel. Only directives
//! that apply to this crate are considered.

use crate::error_classifier::LogLevel;
use std::env;

/// Display threshold derived from a `RUST_LOG`-style directive list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayFilter {
    threshold: LogLevel,
}

impl DisplayFilter {
    /// Reads the threshold from the `RUST_LOG` environment variable.
    pub fn from_env() -> Self {
        let rust_log = env::var("RUST_LOG").unwrap_or_default();
        Self::from_directives(&rust_log)
    }

    /// Parses a comma-separated directive list. A directive is either a bare
    /// level (`debug`) or module-qualified (`tokendash=debug`); directives
    /// naming other crates are ignored. The last applicable one wins, and an
    /// empty or unparseable list falls back to `info`.
    pub fn from_directives(directives: &str) -> Self {
        let mut threshold = LogLevel::Info;
        for directive in directives.split(',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }
            let (target, level) = match directive.split_once('=') {
                Some((target, level)) => (Some(target), level),
                None => (None, directive),
            };
            let applies = match target {
                None => true,
                Some(t) => t == "tokendash" || t.starts_with("tokendash::"),
            };
            if !applies {
                continue;
            }
            if let Some(level) = parse_level(level) {
                threshold = level;
            }
        }
        Self { threshold }
    }

    pub fn allows(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }
}

fn parse_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_applies_globally() {
        let filter = DisplayFilter::from_directives("debug");
        assert!(filter.allows(LogLevel::Debug));
        assert!(!filter.allows(LogLevel::Trace));
    }

    #[test]
    fn test_crate_directive_applies() {
        let filter = DisplayFilter::from_directives("tokendash=trace");
        assert!(filter.allows(LogLevel::Trace));

        let filter = DisplayFilter::from_directives("tokendash::workers=debug");
        assert!(filter.allows(LogLevel::Debug));
    }

    #[test]
    // A directive naming another crate must not change this crate's threshold.
    fn test_foreign_directive_is_ignored() {
        let filter = DisplayFilter::from_directives("hyper=trace");
        assert!(!filter.allows(LogLevel::Debug));
        assert!(filter.allows(LogLevel::Info));
    }

    #[test]
    fn test_last_applicable_directive_wins() {
        let filter = DisplayFilter::from_directives("debug,tokendash=error");
        assert!(!filter.allows(LogLevel::Warn));
        assert!(filter.allows(LogLevel::Error));
    }

    #[test]
    fn test_empty_and_garbage_default_to_info() {
        assert!(!DisplayFilter::from_directives("").allows(LogLevel::Debug));
        assert!(DisplayFilter::from_directives("").allows(LogLevel::Info));
        assert_eq!(
            DisplayFilter::from_directives("verbose"),
            DisplayFilter::from_directives("")
        );
    }
}
