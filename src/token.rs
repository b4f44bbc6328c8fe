//! Token Record
//!
//! This abstracts over the two market data shapes consumed by the dashboard:
//! * MarketTicker (returned by the public market API, array with ranks)
//! * TokenData (returned by the token backend, keyed collection without ranks)

use serde::Deserialize;

/// Price trend over the sparkline window, decided by the first and last samples.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

/// One token as the dashboard sees it, regardless of which source produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    /// Source-side identifier, unique within a snapshot.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Ticker symbol; display casing may differ from the identifier.
    pub symbol: String,
    /// Current unit price in the reference currency.
    pub price: f64,
    pub market_cap: f64,
    /// Fully diluted valuation. Absent in the source payload is normalized to 0.
    pub fdv: f64,
    pub volume_24h: f64,
    /// Decentralized-venue share of volume, backend variant only.
    pub dex_volume: Option<f64>,
    /// Centralized-venue share of volume, backend variant only.
    pub cex_volume: Option<f64>,
    /// 7-day sparkline samples, oldest first.
    pub price_history: Vec<f64>,
    /// Market cap rank. Only the market API variant carries this.
    pub rank: Option<u32>,
    /// Icon URL. Only the market API variant carries this.
    pub image: Option<String>,
    pub decimals: Option<u8>,
    pub total_supply: Option<u128>,
    /// Unix timestamp of the source's last update, backend variant only.
    pub last_updated: Option<i64>,
}

impl TokenRecord {
    /// Trend over the sparkline window. Up requires the last sample to be
    /// strictly greater than the first; the equal case is Down.
    pub fn trend(&self) -> Trend {
        match (self.price_history.first(), self.price_history.last()) {
            (Some(first), Some(last)) if first < last => Trend::Up,
            _ => Trend::Down,
        }
    }
}

/// One entry of the market API's `coins/markets` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketTicker {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub sparkline_in_7d: Option<SparklineIn7d>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SparklineIn7d {
    pub price: Vec<f64>,
}

impl From<MarketTicker> for TokenRecord {
    fn from(ticker: MarketTicker) -> Self {
        TokenRecord {
            id: ticker.id,
            name: ticker.name,
            symbol: ticker.symbol,
            price: ticker.current_price.unwrap_or_default(),
            market_cap: ticker.market_cap.unwrap_or_default(),
            fdv: ticker.fully_diluted_valuation.unwrap_or_default(),
            volume_24h: ticker.total_volume.unwrap_or_default(),
            dex_volume: None,
            cex_volume: None,
            price_history: ticker.sparkline_in_7d.map(|s| s.price).unwrap_or_default(),
            rank: ticker.market_cap_rank,
            image: ticker.image,
            decimals: None,
            total_supply: None,
            last_updated: None,
        }
    }
}

/// One value of the token backend's keyed collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    pub fdv: f64,
    pub dex_volume: f64,
    pub decimals: u8,
    pub cex_volume: f64,
    pub market_cap: f64,
    pub name: String,
    pub last_updated: i64,
    pub price_history: Vec<f64>,
    pub volume_24h: f64,
    pub total_supply: u128,
    pub price: f64,
    pub symbol: String,
}

impl TokenData {
    /// Unifies a keyed backend entry into a TokenRecord. Backend snapshots
    /// carry no rank; the rank column is meaningless for this variant.
    pub fn into_record(self, id: String) -> TokenRecord {
        TokenRecord {
            id,
            name: self.name,
            symbol: self.symbol,
            price: self.price,
            market_cap: self.market_cap,
            fdv: self.fdv,
            volume_24h: self.volume_24h,
            dex_volume: Some(self.dex_volume),
            cex_volume: Some(self.cex_volume),
            price_history: self.price_history,
            rank: None,
            image: None,
            decimals: Some(self.decimals),
            total_supply: Some(self.total_supply),
            last_updated: Some(self.last_updated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_history(history: Vec<f64>) -> TokenRecord {
        TokenRecord {
            id: "test".to_string(),
            name: "Test".to_string(),
            symbol: "tst".to_string(),
            price: 1.0,
            market_cap: 1.0,
            fdv: 0.0,
            volume_24h: 0.0,
            dex_volume: None,
            cex_volume: None,
            price_history: history,
            rank: None,
            image: None,
            decimals: None,
            total_supply: None,
            last_updated: None,
        }
    }

    #[test]
    // Rising window is an upward trend.
    fn test_trend_up_for_rising_history() {
        assert_eq!(record_with_history(vec![1.0, 2.0, 3.0]).trend(), Trend::Up);
    }

    #[test]
    // Falling window is a downward trend.
    fn test_trend_down_for_falling_history() {
        assert_eq!(
            record_with_history(vec![3.0, 2.0, 1.0]).trend(),
            Trend::Down
        );
    }

    #[test]
    // Equal endpoints resolve to Down: the check is strict less-than.
    fn test_trend_down_for_flat_history() {
        assert_eq!(
            record_with_history(vec![5.0, 5.0, 5.0]).trend(),
            Trend::Down
        );
    }

    #[test]
    fn test_trend_down_for_empty_history() {
        assert_eq!(record_with_history(vec![]).trend(), Trend::Down);
    }

    #[test]
    // A null fully_diluted_valuation in the API payload becomes 0, never an error.
    fn test_market_ticker_missing_fdv_becomes_zero() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://example.com/btc.png",
            "current_price": 43000.5,
            "market_cap": 850000000000.0,
            "market_cap_rank": 1,
            "fully_diluted_valuation": null,
            "total_volume": 21000000000.0,
            "sparkline_in_7d": { "price": [42000.0, 43000.5] }
        }"#;
        let ticker: MarketTicker = serde_json::from_str(json).unwrap();
        let record = TokenRecord::from(ticker);
        assert_eq!(record.fdv, 0.0);
        assert_eq!(record.rank, Some(1));
        assert_eq!(record.price_history, vec![42000.0, 43000.5]);
    }

    #[test]
    // Backend entries unify into the same record shape, without rank.
    fn test_token_data_into_record() {
        let json = r#"{
            "fdv": 1000.0,
            "dexVolume": 10.0,
            "decimals": 8,
            "cexVolume": 20.0,
            "marketCap": 900.0,
            "name": "Example",
            "lastUpdated": 1700000000,
            "priceHistory": [1.0, 1.1],
            "volume24h": 30.0,
            "totalSupply": 21000000,
            "price": 4.2,
            "symbol": "exm"
        }"#;
        let data: TokenData = serde_json::from_str(json).unwrap();
        let record = data.into_record("example".to_string());
        assert_eq!(record.id, "example");
        assert_eq!(record.rank, None);
        assert_eq!(record.dex_volume, Some(10.0));
        assert_eq!(record.cex_volume, Some(20.0));
        assert_eq!(record.total_supply, Some(21_000_000));
    }
}
