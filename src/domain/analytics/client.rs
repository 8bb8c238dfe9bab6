//! Analytics sub-client — midnight price, daily variation, extremes, volatility.
//!
//! Every operation comes in two forms: one that reads the wall clock (in an
//! optional IANA timezone, local time otherwise) and an `_at` form that takes
//! `now` explicitly.

use super::{
    highest, lowest, opening_sample, relative_change, round_fraction, signed_change, RateSource,
    REFERENCE_ASSET, VOLATILITY_HOURS,
};
use crate::domain::history::PriceSample;
use crate::error::SdkError;
use crate::shared::clock;
use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

/// Sub-client for derived analytics.
pub struct Analytics<'a, S: RateSource> {
    pub(crate) source: &'a S,
}

impl<'a, S: RateSource> Analytics<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    // ── Midnight price ───────────────────────────────────────────────────

    /// Price at the start of the current day in `timezone`.
    ///
    /// `None` if the window query produced no data or held no on-the-hour
    /// sample.
    pub async fn midnight_price(
        &self,
        currency: &str,
        timezone: Option<&str>,
    ) -> Result<Option<Decimal>, SdkError> {
        let now = clock::now_in(timezone)?;
        self.midnight_price_at(currency, now).await
    }

    pub async fn midnight_price_at(
        &self,
        currency: &str,
        now: NaiveDateTime,
    ) -> Result<Option<Decimal>, SdkError> {
        let hours = f64::from(now.hour() + 1);
        let Some(samples) = self.source.today(hours, currency).await?.data() else {
            return Ok(None);
        };
        Ok(opening_sample(&samples)?.map(|s| s.price))
    }

    // ── Daily variation ──────────────────────────────────────────────────

    /// Change of the current BTC rate relative to the midnight price, as an
    /// unrounded fraction (`0.01` is +1%).
    pub async fn daily_price_var(
        &self,
        currency: &str,
        timezone: Option<&str>,
    ) -> Result<Decimal, SdkError> {
        let now = clock::now_in(timezone)?;
        self.daily_price_var_at(currency, now).await
    }

    pub async fn daily_price_var_at(
        &self,
        currency: &str,
        now: NaiveDateTime,
    ) -> Result<Decimal, SdkError> {
        let current = self
            .source
            .convert(1.0, REFERENCE_ASSET, currency)
            .await?
            .data()
            .ok_or_else(|| {
                SdkError::MissingData("could not fetch the current exchange rate".to_string())
            })?
            .rate()?;

        let opening = self
            .midnight_price_at(currency, now)
            .await?
            .filter(|price| !price.is_zero())
            .ok_or_else(|| {
                SdkError::MissingData("could not fetch the opening exchange rate".to_string())
            })?;

        relative_change(current, opening)
    }

    // ── Extremes ─────────────────────────────────────────────────────────

    /// Lowest-priced sample of the last `hours` hours.
    pub async fn min_price(
        &self,
        hours: f64,
        currency: &str,
    ) -> Result<Option<PriceSample>, SdkError> {
        let samples = self.source.today(hours, currency).await?.data();
        Ok(samples.and_then(|s| lowest(&s).cloned()))
    }

    /// Highest-priced sample of the last `hours` hours.
    pub async fn max_price(
        &self,
        hours: f64,
        currency: &str,
    ) -> Result<Option<PriceSample>, SdkError> {
        let samples = self.source.today(hours, currency).await?.data();
        Ok(samples.and_then(|s| highest(&s).cloned()))
    }

    // ── Volatility ───────────────────────────────────────────────────────

    /// Signed move between the window's low and high, rounded to 5 places.
    ///
    /// Positive when the high is the more recent extreme, negative when the
    /// low is. `hours` must be within `1..=24`.
    pub async fn volatility(
        &self,
        hours: u32,
        currency: &str,
        timezone: Option<&str>,
    ) -> Result<Option<Decimal>, SdkError> {
        check_volatility_hours(hours)?;
        let now = clock::now_in(timezone)?;
        self.volatility_at(hours, currency, now).await
    }

    pub async fn volatility_at(
        &self,
        hours: u32,
        currency: &str,
        now: NaiveDateTime,
    ) -> Result<Option<Decimal>, SdkError> {
        check_volatility_hours(hours)?;

        let low = self.min_price(f64::from(hours), currency).await?;
        let high = self.max_price(f64::from(hours), currency).await?;
        let (Some(low), Some(high)) = (low, high) else {
            return Ok(None);
        };

        let change = signed_change(&low, &high, now)?;
        Ok(Some(round_fraction(change)))
    }
}

fn check_volatility_hours(hours: u32) -> Result<(), SdkError> {
    if VOLATILITY_HOURS.contains(&hours) {
        Ok(())
    } else {
        Err(SdkError::Validation(format!(
            "Hours must be between 1 and 24, got {}",
            hours
        )))
    }
}
