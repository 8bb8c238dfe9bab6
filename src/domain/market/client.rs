//! Market sub-client — P2P ads and stats.

use crate::client::YadioClient;
use crate::error::SdkError;
use crate::shared::{CurrencyCode, Fetched, MarketSide};

pub struct Market<'a> {
    pub(crate) client: &'a YadioClient,
}

impl<'a> Market<'a> {
    /// Up to `limit` P2P ads for `currency` on `side`.
    pub async fn ads(
        &self,
        currency: &str,
        side: MarketSide,
        limit: u32,
    ) -> Result<Fetched<serde_json::Value>, SdkError> {
        let currency = CurrencyCode::new(currency)?;
        Ok(self.client.http.market_ads(&currency, side, limit).await)
    }

    pub async fn stats(
        &self,
        currency: &str,
        side: MarketSide,
    ) -> Result<Fetched<serde_json::Value>, SdkError> {
        let currency = CurrencyCode::new(currency)?;
        Ok(self.client.http.market_stats(&currency, side).await)
    }
}
