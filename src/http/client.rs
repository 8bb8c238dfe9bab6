//! Low-level HTTP client — `YadioHttp`.
//!
//! One method per API endpoint. Each returns a [`Fetched`] wire payload:
//! transport failures are logged and folded into `Fetched::TransportError`
//! here, at the accessor boundary. Input validation happens one layer up.

use crate::domain::history::PriceSample;
use crate::domain::rates::wire::{ConvertResponse, ExRatesResponse, PingResponse, RateResponse};
use crate::error::{HttpError, SdkError};
use crate::http::endpoint::Endpoint;
use crate::shared::{CurrencyCode, Fetched, MarketSide};

use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Low-level HTTP client for the Yadio REST API.
#[derive(Debug, Clone)]
pub struct YadioHttp {
    base_url: String,
    client: Client,
}

impl YadioHttp {
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().map_err(HttpError::from)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Rates ────────────────────────────────────────────────────────────

    pub async fn exrates(&self, currency: &CurrencyCode) -> Fetched<ExRatesResponse> {
        self.fetch(Endpoint::ExRates { currency }).await
    }

    pub async fn convert(
        &self,
        amount: f64,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Fetched<ConvertResponse> {
        self.fetch(Endpoint::Convert { amount, from, to }).await
    }

    pub async fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Fetched<RateResponse> {
        self.fetch(Endpoint::Rate { from, to }).await
    }

    pub async fn currencies(&self) -> Fetched<serde_json::Value> {
        self.fetch(Endpoint::Currencies).await.non_null()
    }

    pub async fn exchanges(&self) -> Fetched<serde_json::Value> {
        self.fetch(Endpoint::Exchanges).await.non_null()
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn today(&self, hours: f64, currency: &CurrencyCode) -> Fetched<Vec<PriceSample>> {
        self.fetch(Endpoint::Today { hours, currency })
            .await
            .non_empty()
    }

    pub async fn hist(&self, days: f64, currency: &CurrencyCode) -> Fetched<Vec<PriceSample>> {
        self.fetch(Endpoint::Hist { days, currency })
            .await
            .non_empty()
    }

    pub async fn compare(&self, days: f64, currency: &CurrencyCode) -> Fetched<serde_json::Value> {
        self.fetch(Endpoint::Compare { days, currency })
            .await
            .non_null()
    }

    // ── Market ───────────────────────────────────────────────────────────

    pub async fn market_ads(
        &self,
        currency: &CurrencyCode,
        side: MarketSide,
        limit: u32,
    ) -> Fetched<serde_json::Value> {
        self.fetch(Endpoint::MarketAds {
            currency,
            side,
            limit,
        })
        .await
        .non_null()
    }

    pub async fn market_stats(
        &self,
        currency: &CurrencyCode,
        side: MarketSide,
    ) -> Fetched<serde_json::Value> {
        self.fetch(Endpoint::MarketStats { currency, side })
            .await
            .non_null()
    }

    // ── Status ───────────────────────────────────────────────────────────

    pub async fn ping(&self) -> Fetched<PingResponse> {
        self.fetch(Endpoint::Ping).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Fetched<T> {
        let url = match endpoint.path() {
            Ok(path) => format!("{}{}", self.base_url, path),
            Err(e) => return Fetched::from_result(&self.base_url, Err(e)),
        };
        let result = self.get(&url).await;
        Fetched::from_result(&url, result)
    }

    /// GET `url` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
