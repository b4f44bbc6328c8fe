use crate::environment::Environment;
use crate::market::error::MarketError;
use crate::token::TokenRecord;

pub(crate) mod backend;
pub(crate) mod coingecko;
pub mod error;

pub use backend::BackendClient;
pub use coingecko::CoinGeckoClient;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// A source of token market snapshots.
///
/// Both observed variants implement this: the public market API (array with
/// ranks) and the token backend (keyed collection without ranks). The
/// dashboard pipeline only needs `fetch_snapshot`; `get_token` is exposed for
/// other consumers of the source.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MarketDataSource: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetches one complete point-in-time snapshot of token records.
    async fn fetch_snapshot(&self) -> Result<Vec<TokenRecord>, MarketError>;

    /// Looks up a single token by identifier.
    async fn get_token(&self, id: &str) -> Result<Option<TokenRecord>, MarketError>;

    /// Liveness probe. Returns the source's status text.
    async fn heartbeat(&self) -> Result<String, MarketError>;
}
