//! Dashboard utility functions
//!
//! Contains formatting helpers used across dashboard components

use crate::events::Worker;
use crate::token::Trend;
use ratatui::prelude::Color;

/// Block ramp used to draw inline sparklines, lowest to highest.
const SPARK_RAMP: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::SnapshotFetcher => Color::Cyan,
        Worker::Heartbeat => Color::Green,
    }
}

/// Scale-suffix formatting for large magnitudes: billions, millions and
/// thousands collapse to B/M/K, always with exactly two decimals.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

/// Prices are never magnitude-scaled, only fixed to two decimals.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Sparkline line color from the window trend. The equal case is Down, so
/// a flat window renders red.
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
    }
}

/// Renders a price history as a fixed-width string of block characters.
///
/// The history is resampled to `width` points and normalized over its own
/// min/max range. A flat or single-sample history draws at the lowest level.
pub fn sparkline_text(history: &[f64], width: usize) -> String {
    if history.is_empty() || width == 0 {
        return " ".repeat(width);
    }

    let min = history.iter().copied().fold(f64::INFINITY, f64::min);
    let max = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    (0..width)
        .map(|i| {
            let sample_index = if width == 1 {
                0
            } else {
                i * (history.len() - 1) / (width - 1)
            };
            let sample = history[sample_index];
            let level = if range > 0.0 {
                (((sample - min) / range) * (SPARK_RAMP.len() - 1) as f64).round() as usize
            } else {
                0
            };
            SPARK_RAMP[level.min(SPARK_RAMP.len() - 1)]
        })
        .collect()
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - next refresh will retry".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out - next refresh will retry".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - next refresh will retry".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // The fixed scale-suffix rule: B at 1e9, M at 1e6, K at 1e3, plain below.
    fn test_format_magnitude_suffixes() {
        assert_eq!(format_magnitude(999.0), "999.00");
        assert_eq!(format_magnitude(1_500.0), "1.50K");
        assert_eq!(format_magnitude(2_500_000.0), "2.50M");
        assert_eq!(format_magnitude(3_100_000_000.0), "3.10B");
    }

    #[test]
    fn test_format_magnitude_boundaries() {
        assert_eq!(format_magnitude(1_000.0), "1.00K");
        assert_eq!(format_magnitude(1_000_000.0), "1.00M");
        assert_eq!(format_magnitude(1_000_000_000.0), "1.00B");
        assert_eq!(format_magnitude(0.0), "0.00");
    }

    #[test]
    fn test_format_price_never_scales() {
        assert_eq!(format_price(43000.5), "$43000.50");
        assert_eq!(format_price(0.1), "$0.10");
    }

    #[test]
    fn test_trend_colors() {
        assert_eq!(trend_color(Trend::Up), Color::Green);
        assert_eq!(trend_color(Trend::Down), Color::Red);
    }

    #[test]
    fn test_sparkline_text_width_and_extremes() {
        let text = sparkline_text(&[1.0, 2.0, 3.0, 4.0], 8);
        assert_eq!(text.chars().count(), 8);
        assert_eq!(text.chars().next().unwrap(), '▁');
        assert_eq!(text.chars().last().unwrap(), '█');
    }

    #[test]
    fn test_sparkline_text_flat_history() {
        let text = sparkline_text(&[5.0, 5.0, 5.0], 4);
        assert_eq!(text, "▁▁▁▁");
    }

    #[test]
    fn test_sparkline_text_empty_history() {
        assert_eq!(sparkline_text(&[], 4), "    ");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-23 14:05:09"),
            "08-23 14:05"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
