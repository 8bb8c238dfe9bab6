//! History sub-client — trailing-window price queries.

use crate::client::YadioClient;
use crate::domain::history::PriceSample;
use crate::error::SdkError;
use crate::shared::{validate_window, CurrencyCode, Fetched};

/// Sub-client for price history operations.
pub struct History<'a> {
    pub(crate) client: &'a YadioClient,
}

impl<'a> History<'a> {
    /// Samples for the last `hours` hours, oldest first.
    pub async fn today(
        &self,
        hours: f64,
        currency: &str,
    ) -> Result<Fetched<Vec<PriceSample>>, SdkError> {
        let hours = validate_window(hours, "hours")?;
        let currency = CurrencyCode::new(currency)?;
        Ok(self.client.http.today(hours, &currency).await)
    }

    /// Samples for the last `days` days, oldest first.
    pub async fn hist(
        &self,
        days: f64,
        currency: &str,
    ) -> Result<Fetched<Vec<PriceSample>>, SdkError> {
        let days = validate_window(days, "days")?;
        let currency = CurrencyCode::new(currency)?;
        Ok(self.client.http.hist(days, &currency).await)
    }

    /// Rate comparison over the last `days` days.
    pub async fn compare(
        &self,
        days: f64,
        currency: &str,
    ) -> Result<Fetched<serde_json::Value>, SdkError> {
        let days = validate_window(days, "days")?;
        let currency = CurrencyCode::new(currency)?;
        Ok(self.client.http.compare(days, &currency).await)
    }
}
