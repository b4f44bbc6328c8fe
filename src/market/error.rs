//! Error handling for the market data module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MarketError {
    pub async fn from_response(response: reqwest::Response) -> MarketError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        MarketError::Http { status, message }
    }
}
