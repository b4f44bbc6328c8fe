//! Snapshot sort engine
//!
//! Orders a snapshot by a user-selected column and direction. The sort is
//! stable, so equal keys keep the relative order the source returned.

use crate::token::TokenRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sortable table columns. Rank only carries data for the market API variant;
/// backend snapshots sort it as all-equal-to-zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortColumn {
    Rank,
    Name,
    Price,
    MarketCap,
    Fdv,
    Volume,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current sort column and direction. Lives in the dashboard state and is
/// passed into the sort engine explicitly; only header activation mutates it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::MarketCap,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    /// Applies a header activation: the active column toggles direction, a
    /// different column becomes active descending.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.column = column;
            self.direction = SortDirection::Desc;
        }
    }

    /// Builds a sort state from configured keys, falling back to the default
    /// (market cap, descending) when either key is unrecognized.
    pub fn from_keys(column: &str, direction: &str) -> Self {
        match (
            SortColumn::from_str(column),
            SortDirection::from_str(direction),
        ) {
            (Ok(column), Ok(direction)) => Self { column, direction },
            _ => Self::default(),
        }
    }
}

/// Compares two records by the ascending notion of one column.
///
/// Missing optional numeric fields compare as 0 so the order stays total;
/// floats go through `total_cmp` for the same reason.
fn compare(column: SortColumn, a: &TokenRecord, b: &TokenRecord) -> Ordering {
    match column {
        SortColumn::Rank => a.rank.unwrap_or(0).cmp(&b.rank.unwrap_or(0)),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Price => a.price.total_cmp(&b.price),
        SortColumn::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        SortColumn::Fdv => a.fdv.total_cmp(&b.fdv),
        SortColumn::Volume => a.volume_24h.total_cmp(&b.volume_24h),
    }
}

/// Sorts a snapshot in place. `None` means an unrecognized column key reached
/// the engine; that is a stable no-op, not an error.
pub fn sort_snapshot(
    tokens: &mut [TokenRecord],
    column: Option<SortColumn>,
    direction: SortDirection,
) {
    let Some(column) = column else {
        return;
    };
    tokens.sort_by(|a, b| {
        let ordering = compare(column, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
