//! High-level client — `YadioClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::analytics::Analytics;
use crate::domain::history::client::History;
use crate::domain::market::client::Market;
use crate::domain::rates::client::Rates;
use crate::error::SdkError;
use crate::http::YadioHttp;
use crate::shared::Fetched;

// Re-export sub-client types for convenience.
pub use crate::domain::analytics::client::Analytics as AnalyticsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::market::client::Market as MarketClient;
pub use crate::domain::rates::client::Rates as RatesClient;

/// The primary entry point for the Yadio SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.rates()`, `client.history()`, etc. Holds no mutable state; every
/// call goes straight to the API.
#[derive(Debug, Clone)]
pub struct YadioClient {
    pub(crate) http: YadioHttp,
}

impl YadioClient {
    pub fn builder() -> YadioClientBuilder {
        YadioClientBuilder::default()
    }

    /// Client against [`DEFAULT_API_URL`](crate::network::DEFAULT_API_URL).
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn market(&self) -> Market<'_> {
        Market { client: self }
    }

    pub fn analytics(&self) -> Analytics<'_, Self> {
        Analytics::new(self)
    }

    /// Low-level HTTP client, for endpoints without a typed wrapper.
    pub fn http(&self) -> &YadioHttp {
        &self.http
    }

    /// API status string (`"ok"` when operational).
    ///
    /// A successful response without a `status` field is a missing-data error.
    pub async fn ping(&self) -> Result<Fetched<String>, SdkError> {
        self.http
            .ping()
            .await
            .try_map(|resp| resp.status().map(str::to_string))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct YadioClientBuilder {
    base_url: String,
}

impl Default for YadioClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl YadioClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> Result<YadioClient, SdkError> {
        Ok(YadioClient {
            http: YadioHttp::new(&self.base_url)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_public_api() {
        let client = YadioClient::new().unwrap();
        assert_eq!(client.http().base_url(), "https://api.yadio.io");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = YadioClient::builder()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_invalid_input_fails_before_request() {
        let client = YadioClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        tokio_test::block_on(async {
            assert!(matches!(
                client.rates().convert(f64::NAN, "btc", "usd").await,
                Err(SdkError::Validation(_))
            ));
            assert!(matches!(
                client.history().today(0.0, "usd").await,
                Err(SdkError::Validation(_))
            ));
            assert!(matches!(
                client.analytics().volatility(25, "usd", None).await,
                Err(SdkError::Validation(_))
            ));
            assert!(matches!(
                client.analytics().volatility(6, "usd", Some("Not/AZone")).await,
                Err(SdkError::Validation(_))
            ));
        });
    }
}
