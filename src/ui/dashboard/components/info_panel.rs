//! Dashboard info panel component
//!
//! Renders source and session information

use crate::environment::Environment;

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render info panel with source and session details.
pub fn render_info_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut info_lines = Vec::new();

    info_lines.push(Line::from(vec![Span::styled(
        format!("Source: {}", state.source_name),
        Style::default().fg(Color::LightBlue),
    )]));

    // Environment with color coding
    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Custom { api_url: _ } => Color::Yellow,
    };
    info_lines.push(Line::from(vec![Span::styled(
        format!("Env: {}", state.environment),
        Style::default().fg(env_color),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Currency: {}", state.vs_currency.to_uppercase()),
        Style::default().fg(Color::LightMagenta),
    )]));

    // Version info
    let version = env!("CARGO_PKG_VERSION");
    info_lines.push(Line::from(vec![Span::styled(
        format!("Version: {}", version),
        Style::default().fg(Color::Cyan),
    )]));

    // Uptime with better formatting
    let uptime = state.start_time.elapsed();
    let uptime_string = if uptime.as_secs() >= 3600 {
        format!(
            "Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    info_lines.push(Line::from(vec![Span::styled(
        uptime_string,
        Style::default().fg(Color::LightGreen),
    )]));

    info_lines.push(Line::from(vec![Span::styled(
        format!("Tokens: {}", state.tokens.len()),
        Style::default().fg(Color::LightYellow),
    )]));

    let refresh_text = match state.last_refresh() {
        Some(at) => format!("Last refresh: {}s ago", at.elapsed().as_secs()),
        None => "Last refresh: never".to_string(),
    };
    info_lines.push(Line::from(vec![Span::styled(
        refresh_text,
        Style::default().fg(Color::LightCyan),
    )]));

    let info_block = Block::default()
        .title("SESSION INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
