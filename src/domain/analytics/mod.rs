//! Analytics domain — reductions over price samples.
//!
//! The functions here are pure: they take samples that were already fetched
//! and a fixed `now`. [`client::Analytics`] wires them to a [`RateSource`].

pub mod client;
pub mod source;

pub use client::Analytics;
pub use source::RateSource;

use crate::domain::history::PriceSample;
use crate::error::SdkError;
use chrono::{NaiveDateTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

/// Asset the daily variation is quoted from.
pub const REFERENCE_ASSET: &str = "BTC";

/// Decimal places of a volatility figure.
pub const VOLATILITY_DP: u32 = 5;

/// Accepted window for volatility, in hours.
pub const VOLATILITY_HOURS: std::ops::RangeInclusive<u32> = 1..=24;

/// The last on-the-hour sample in the window.
///
/// The backend buckets samples by hour, so the latest `hh:00` sample is the
/// closest available stand-in for the opening price. Every sample time is
/// parsed; one malformed time fails the whole call.
pub fn opening_sample(samples: &[PriceSample]) -> Result<Option<&PriceSample>, SdkError> {
    let mut opening = None;
    for sample in samples {
        if sample.clock_time()?.minute() == 0 {
            opening = Some(sample);
        }
    }
    Ok(opening)
}

/// Lowest-priced sample; the earliest one wins ties.
pub fn lowest(samples: &[PriceSample]) -> Option<&PriceSample> {
    samples
        .iter()
        .reduce(|best, s| if s.price < best.price { s } else { best })
}

/// Highest-priced sample; the earliest one wins ties.
pub fn highest(samples: &[PriceSample]) -> Option<&PriceSample> {
    samples
        .iter()
        .reduce(|best, s| if s.price > best.price { s } else { best })
}

/// Signed relative move between the two extremes, oriented in time.
///
/// If the high came after the low the price rose into the more recent
/// extreme: `(high - low) / low`. Otherwise it fell: `(low - high) / high`.
/// Unrounded.
pub fn signed_change(
    low: &PriceSample,
    high: &PriceSample,
    now: NaiveDateTime,
) -> Result<Decimal, SdkError> {
    let low_at = low.anchored_before(now)?;
    let high_at = high.anchored_before(now)?;

    let (delta, base) = if high_at > low_at {
        (high.price - low.price, low.price)
    } else {
        (low.price - high.price, high.price)
    };

    tracing::debug!(
        low_at = %low_at,
        high_at = %high_at,
        rising = high_at > low_at,
        "volatility extremes"
    );

    delta
        .checked_div(base)
        .ok_or_else(|| SdkError::MissingData("reference price is zero".to_string()))
}

/// `current / opening - 1`, unrounded.
pub fn relative_change(current: Decimal, opening: Decimal) -> Result<Decimal, SdkError> {
    current
        .checked_div(opening)
        .map(|ratio| ratio - Decimal::ONE)
        .ok_or_else(|| SdkError::MissingData("opening exchange rate is zero".to_string()))
}

/// Round to [`VOLATILITY_DP`] places, ties to even.
pub fn round_fraction(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(VOLATILITY_DP, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn sample(time: &str, price: i64) -> PriceSample {
        PriceSample::new(time, Decimal::from(price))
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_opening_sample_picks_last_on_the_hour() {
        let samples = vec![
            sample("12:00 AM", 10),
            sample("12:30 AM", 11),
            sample("01:00 AM", 12),
            sample("01:15 AM", 13),
        ];
        assert_eq!(opening_sample(&samples).unwrap().unwrap().price, Decimal::from(12));
    }

    #[test]
    fn test_opening_sample_none_without_hourly_sample() {
        let samples = vec![sample("12:05 AM", 10), sample("12:35 AM", 11)];
        assert!(opening_sample(&samples).unwrap().is_none());
        assert!(opening_sample(&[]).unwrap().is_none());
    }

    #[test]
    fn test_opening_sample_bad_time_fails() {
        let samples = vec![sample("12:00 AM", 10), sample("25:99", 11)];
        assert!(matches!(opening_sample(&samples), Err(SdkError::TimeParse { .. })));
    }

    #[test]
    fn test_extremes() {
        let samples = vec![
            sample("08:00 AM", 100),
            sample("09:00 AM", 90),
            sample("10:00 AM", 110),
        ];
        assert_eq!(lowest(&samples).unwrap().time, "09:00 AM");
        assert_eq!(highest(&samples).unwrap().time, "10:00 AM");
        assert!(lowest(&[]).is_none());
    }

    #[test]
    fn test_extremes_tie_break_first_wins() {
        let samples = vec![
            sample("08:00 AM", 90),
            sample("09:00 AM", 120),
            sample("10:00 AM", 90),
            sample("11:00 AM", 120),
        ];
        assert_eq!(lowest(&samples).unwrap().time, "08:00 AM");
        assert_eq!(highest(&samples).unwrap().time, "09:00 AM");
    }

    #[test]
    fn test_signed_change_rising() {
        let change = signed_change(&sample("09:00 AM", 90), &sample("10:00 AM", 110), at(10, 30))
            .unwrap();
        assert_eq!(round_fraction(change), dec("0.22222"));
    }

    #[test]
    fn test_signed_change_falling() {
        let change = signed_change(&sample("10:00 AM", 90), &sample("09:00 AM", 110), at(10, 30))
            .unwrap();
        assert_eq!(round_fraction(change), dec("-0.18182"));
    }

    #[test]
    fn test_signed_change_across_midnight() {
        // 11:45 PM is yesterday, so the 12:15 AM high is the more recent extreme.
        let change = signed_change(&sample("11:45 PM", 100), &sample("12:15 AM", 105), at(0, 30))
            .unwrap();
        assert_eq!(change, dec("0.05"));
    }

    #[test]
    fn test_signed_change_zero_base() {
        let err = signed_change(&sample("09:00 AM", 0), &sample("10:00 AM", 5), at(11, 0));
        assert!(matches!(err, Err(SdkError::MissingData(_))));
    }

    #[test]
    fn test_relative_change() {
        assert_eq!(relative_change(dec("110"), dec("100")).unwrap(), dec("0.1"));
        assert_eq!(relative_change(dec("95"), dec("100")).unwrap(), dec("-0.05"));
        assert!(relative_change(dec("1"), Decimal::ZERO).is_err());
    }

    #[test]
    fn test_round_fraction_ties_to_even() {
        assert_eq!(round_fraction(dec("0.123455")), dec("0.12346"));
        assert_eq!(round_fraction(dec("0.123445")), dec("0.12344"));
        assert_eq!(round_fraction(dec("-0.181818")), dec("-0.18182"));
    }

    #[test]
    fn test_round_fraction_idempotent() {
        let once = round_fraction(dec("0.2222222"));
        assert_eq!(round_fraction(once), once);
        assert_eq!(round_fraction(dec("0.12345")), dec("0.12345"));
    }
}
