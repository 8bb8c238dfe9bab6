//! Where the analytics engine gets its raw data from.

use crate::domain::history::PriceSample;
use crate::domain::rates::ConvertResponse;
use crate::error::SdkError;
use crate::shared::Fetched;

/// The two endpoint calls the analytics engine depends on.
///
/// `YadioClient` implements this against the live API. `Err` is reserved for
/// input validation; transport problems come back as [`Fetched`] variants.
#[allow(async_fn_in_trait)]
pub trait RateSource {
    /// Samples for the trailing `hours` hours, oldest first.
    async fn today(
        &self,
        hours: f64,
        currency: &str,
    ) -> Result<Fetched<Vec<PriceSample>>, SdkError>;

    async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<Fetched<ConvertResponse>, SdkError>;
}

#[cfg(feature = "http")]
impl RateSource for crate::client::YadioClient {
    async fn today(
        &self,
        hours: f64,
        currency: &str,
    ) -> Result<Fetched<Vec<PriceSample>>, SdkError> {
        self.history().today(hours, currency).await
    }

    async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<Fetched<ConvertResponse>, SdkError> {
        self.rates().convert(amount, from, to).await
    }
}
