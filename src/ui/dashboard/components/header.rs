//! Dashboard header component
//!
//! Renders the title and refresh gauge

use super::super::state::{DashboardState, FetchingState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("TOKENDASH v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an in-flight fetch takes priority, then the countdown to
    // the next scheduled refresh.
    let (progress_text, gauge_color, progress_percent) = match state.fetching_state() {
        FetchingState::Active { .. } => {
            // Animated gauge - loops every 20 ticks for smooth animation
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "REFRESHING - Fetching market data".to_string(),
                Color::LightGreen,
                progress,
            )
        }
        FetchingState::Timeout => (
            "REFRESHING - Source is slow to respond".to_string(),
            Color::LightYellow,
            100,
        ),
        FetchingState::Idle => {
            let (elapsed_secs, interval_secs) = state.refresh_progress();
            let remaining_secs = interval_secs.saturating_sub(elapsed_secs);
            let progress = if interval_secs > 0 {
                ((elapsed_secs as f64 / interval_secs as f64) * 100.0) as u16
            } else {
                100
            };
            let display_text = if remaining_secs > 0 {
                format!("WAITING - Next refresh in {}s", remaining_secs)
            } else {
                "WAITING - Refresh due".to_string()
            };
            (display_text, Color::LightBlue, progress.min(100))
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
