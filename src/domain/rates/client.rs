//! Rates sub-client — exchange rates, conversion, catalogue endpoints.

use crate::client::YadioClient;
use crate::domain::rates::wire::{ConvertResponse, ExRatesResponse, RateResponse};
use crate::error::SdkError;
use crate::shared::{CurrencyCode, Fetched};

/// Sub-client for rate and conversion operations.
pub struct Rates<'a> {
    pub(crate) client: &'a YadioClient,
}

impl<'a> Rates<'a> {
    /// Exchange-rate table quoted against `currency`.
    pub async fn exrates(&self, currency: &str) -> Result<Fetched<ExRatesResponse>, SdkError> {
        let currency = CurrencyCode::new(currency)?;
        Ok(self.client.http.exrates(&currency).await)
    }

    /// Convert `amount` of `from` into `to`.
    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<Fetched<ConvertResponse>, SdkError> {
        if !amount.is_finite() {
            return Err(SdkError::Validation(
                "The 'amount' parameter must be a number.".to_string(),
            ));
        }
        let from = CurrencyCode::new(from)?;
        let to = CurrencyCode::new(to)?;
        Ok(self.client.http.convert(amount, &from, &to).await)
    }

    pub async fn rate(&self, from: &str, to: &str) -> Result<Fetched<RateResponse>, SdkError> {
        let from = CurrencyCode::new(from)?;
        let to = CurrencyCode::new(to)?;
        Ok(self.client.http.rate(&from, &to).await)
    }

    /// Supported currencies, as returned by the backend.
    pub async fn currencies(&self) -> Fetched<serde_json::Value> {
        self.client.http.currencies().await
    }

    /// Supported exchanges, as returned by the backend.
    pub async fn exchanges(&self) -> Fetched<serde_json::Value> {
        self.client.http.exchanges().await
    }
}
