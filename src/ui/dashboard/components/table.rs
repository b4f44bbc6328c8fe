//! Token table component
//!
//! Renders the sortable market table and resolves header clicks back to
//! sort columns.

use super::super::state::{DashboardState, FetchingState};
use super::super::utils::{format_magnitude, format_price, sparkline_text, trend_color};
use crate::consts::cli_consts::ui::SPARKLINE_WIDTH;
use crate::sort::{SortColumn, SortDirection};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

/// Table columns in display order. The sparkline column is not sortable.
pub const COLUMNS: [(Option<SortColumn>, &str); 7] = [
    (Some(SortColumn::Rank), "#"),
    (Some(SortColumn::Name), "NAME"),
    (Some(SortColumn::Price), "PRICE"),
    (Some(SortColumn::MarketCap), "MKT CAP"),
    (Some(SortColumn::Fdv), "FDV"),
    (Some(SortColumn::Volume), "VOL 24H"),
    (None, "7D"),
];

fn column_constraints() -> [Constraint; 7] {
    [
        Constraint::Length(4),
        Constraint::Fill(2),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(SPARKLINE_WIDTH as u16 + 1),
    ]
}

/// Splits the table's inner area into per-column rects, mirroring the
/// widths the Table widget computes for the same constraints.
fn column_rects(table_area: Rect) -> Vec<Rect> {
    let inner = table_area.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    });
    Layout::horizontal(column_constraints())
        .flex(Flex::Start)
        .spacing(1)
        .split(inner)
        .to_vec()
}

/// Resolves a click position to the sortable column under the header row,
/// if any. `table_area` is the bordered area the table was rendered into.
pub fn header_column_at(table_area: Rect, x: u16, y: u16) -> Option<SortColumn> {
    let inner = table_area.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    });
    // The header is the first row inside the block.
    if y != inner.y {
        return None;
    }
    for (rect, (column, _)) in column_rects(table_area).iter().zip(COLUMNS.iter()) {
        if x >= rect.x && x < rect.x + rect.width {
            return *column;
        }
    }
    None
}

fn header_cell(state: &DashboardState, column: Option<SortColumn>, label: &str) -> Cell<'static> {
    let (text, style) = match column {
        Some(col) if col == state.sort.column => {
            let marker = match state.sort.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            (
                format!("{} {}", label, marker),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
        }
        _ => (
            label.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };
    Cell::from(text).style(style)
}

/// Render the sorted token table.
pub fn render_token_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(
        COLUMNS
            .iter()
            .map(|(column, label)| header_cell(state, *column, label)),
    )
    .height(1);

    let rows: Vec<Row> = state
        .tokens
        .iter()
        .map(|token| {
            let rank = token
                .rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            let spark = Span::styled(
                sparkline_text(&token.price_history, SPARKLINE_WIDTH),
                Style::default().fg(trend_color(token.trend())),
            );
            Row::new(vec![
                Cell::from(rank).style(Style::default().fg(Color::DarkGray)),
                Cell::from(format!("{} ({})", token.name, token.symbol.to_uppercase()))
                    .style(Style::default().fg(Color::White)),
                Cell::from(format_price(token.price)),
                Cell::from(format_magnitude(token.market_cap)),
                Cell::from(format_magnitude(token.fdv)),
                Cell::from(format_magnitude(token.volume_24h)),
                Cell::from(spark),
            ])
        })
        .collect();

    let title = match state.fetching_state() {
        FetchingState::Idle if state.tokens.is_empty() => "MARKET - no data",
        FetchingState::Idle => "MARKET",
        FetchingState::Active { .. } => "MARKET - refreshing...",
        FetchingState::Timeout => "MARKET - still fetching...",
    };

    let table = Table::new(rows, column_constraints())
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Clicking inside the header row resolves to the column under the
    // cursor; the sparkline header is not sortable.
    fn test_header_hit_resolves_columns() {
        let area = Rect::new(0, 0, 100, 20);
        let rects = column_rects(area);

        assert_eq!(
            header_column_at(area, rects[0].x, 1),
            Some(SortColumn::Rank)
        );
        assert_eq!(
            header_column_at(area, rects[3].x, 1),
            Some(SortColumn::MarketCap)
        );
        assert_eq!(header_column_at(area, rects[6].x, 1), None);
    }

    #[test]
    // Clicks below the header row never resolve to a column.
    fn test_click_outside_header_row_misses() {
        let area = Rect::new(0, 0, 100, 20);
        let rects = column_rects(area);

        assert_eq!(header_column_at(area, rects[0].x, 2), None);
        assert_eq!(header_column_at(area, rects[0].x, 0), None);
    }

    #[test]
    // Every sortable column is reachable through the hit test.
    fn test_all_sortable_columns_reachable() {
        let area = Rect::new(0, 0, 120, 20);
        let rects = column_rects(area);

        for (rect, (column, _)) in rects.iter().zip(COLUMNS.iter()) {
            assert_eq!(header_column_at(area, rect.x, 1), *column);
        }
    }
}
