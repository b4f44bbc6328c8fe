//! Market API client
//!
//! A client for the public market data API, serving ranked top-N snapshots
//! with embedded 7-day sparkline samples.

use crate::consts::cli_consts::market;
use crate::environment::Environment;
use crate::market::MarketDataSource;
use crate::market::error::MarketError;
use crate::token::{MarketTicker, TokenRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("tokendash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    client: Client,
    environment: Environment,
    vs_currency: String,
}

#[derive(Debug, Deserialize)]
struct PingResponse {
    gecko_says: String,
}

impl CoinGeckoClient {
    pub fn new(environment: Environment, vs_currency: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(market::http_timeout())
                .timeout(market::http_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            vs_currency,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, MarketError> {
        if !response.status().is_success() {
            return Err(MarketError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, MarketError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .query(query)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    fn markets_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", market::ORDER.to_string()),
            ("per_page", market::PAGE_SIZE.to_string()),
            ("page", market::PAGE.to_string()),
            ("sparkline", "true".to_string()),
        ]
    }
}

#[async_trait::async_trait]
impl MarketDataSource for CoinGeckoClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Fetches the top-N assets by market cap, with 7-day sparklines. The
    /// response order is the implicit rank order; each record also carries an
    /// explicit rank field.
    async fn fetch_snapshot(&self) -> Result<Vec<TokenRecord>, MarketError> {
        let tickers: Vec<MarketTicker> =
            self.get_request("coins/markets", &self.markets_query()).await?;
        Ok(tickers.into_iter().map(TokenRecord::from).collect())
    }

    /// Looks up one asset through the same markets endpoint, filtered by id.
    async fn get_token(&self, id: &str) -> Result<Option<TokenRecord>, MarketError> {
        let mut query = self.markets_query();
        query.push(("ids", id.to_string()));
        let tickers: Vec<MarketTicker> = self.get_request("coins/markets", &query).await?;
        Ok(tickers.into_iter().next().map(TokenRecord::from))
    }

    async fn heartbeat(&self) -> Result<String, MarketError> {
        let ping: PingResponse = self.get_request("ping", &[]).await?;
        Ok(ping.gecko_says)
    }
}

#[cfg(test)]
/// These are ignored by default since they require network access to run.
mod live_market_tests {
    use super::*;

    fn client() -> CoinGeckoClient {
        CoinGeckoClient::new(Environment::Production, "usd".to_string())
    }

    #[tokio::test]
    #[ignore] // This test requires network access to the market API.
    /// Should return a full top-N snapshot with sparkline data.
    async fn test_fetch_snapshot() {
        match client().fetch_snapshot().await {
            Ok(tokens) => {
                assert_eq!(tokens.len(), market::PAGE_SIZE as usize);
                assert!(tokens.iter().all(|t| !t.price_history.is_empty()));
            }
            Err(e) => panic!("Failed to fetch snapshot: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires network access to the market API.
    /// Should return a single token for a known identifier.
    async fn test_get_token() {
        match client().get_token("bitcoin").await {
            Ok(Some(token)) => assert_eq!(token.id, "bitcoin"),
            Ok(None) => panic!("bitcoin missing from market data"),
            Err(e) => panic!("Failed to get token: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires network access to the market API.
    /// Should answer the liveness probe.
    async fn test_heartbeat() {
        let says = client().heartbeat().await.expect("heartbeat failed");
        assert!(!says.is_empty());
    }
}
