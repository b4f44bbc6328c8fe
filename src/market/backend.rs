//! Token backend client
//!
//! A client for the token-data backend service. The backend exposes three
//! query operations: the full keyed snapshot, a single-token lookup, and a
//! heartbeat probe. One call, one snapshot; no retries, no pagination.

use crate::consts::cli_consts::market;
use crate::environment::Environment;
use crate::market::MarketDataSource;
use crate::market::error::MarketError;
use crate::token::{TokenData, TokenRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("tokendash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(market::http_timeout())
                .timeout(market::http_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment: Environment::Custom {
                api_url: base_url.clone(),
            },
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, MarketError> {
        if !response.status().is_success() {
            return Err(MarketError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, MarketError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl MarketDataSource for BackendClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Fetches the full keyed collection of (identifier, token data) pairs.
    async fn fetch_snapshot(&self) -> Result<Vec<TokenRecord>, MarketError> {
        let pairs: Vec<(String, TokenData)> = self.get_request("tokens").await?;
        Ok(pairs
            .into_iter()
            .map(|(id, data)| data.into_record(id))
            .collect())
    }

    /// Looks up one token; the backend answers 404 for unknown identifiers.
    async fn get_token(&self, id: &str) -> Result<Option<TokenRecord>, MarketError> {
        let endpoint = format!("tokens/{}", urlencoding::encode(id));
        match self.get_request::<TokenData>(&endpoint).await {
            Ok(data) => Ok(Some(data.into_record(id.to_string()))),
            Err(MarketError::Http { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn heartbeat(&self) -> Result<String, MarketError> {
        let url = self.build_url("heartbeat");
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.text().await?)
    }
}
