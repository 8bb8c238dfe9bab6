//! History domain — time-stamped price samples over trailing windows.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SdkError;
use crate::shared::clock;
use crate::shared::serde_util::decimal_number;
use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single time-stamped price observation.
///
/// `time` is kept exactly as the backend sent it; it is only parsed when a
/// computation needs it, and a malformed value is then a hard error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Wall-clock time in 12-hour format, e.g. `"03:00 PM"`.
    pub time: String,
    #[serde(deserialize_with = "decimal_number::deserialize")]
    pub price: Decimal,
}

impl PriceSample {
    pub fn new(time: impl Into<String>, price: Decimal) -> Self {
        Self {
            time: time.into(),
            price,
        }
    }

    pub fn clock_time(&self) -> Result<NaiveTime, SdkError> {
        clock::parse_clock_time(&self.time)
    }

    /// Calendar position of this sample in a window ending at `now`.
    pub fn anchored_before(&self, now: NaiveDateTime) -> Result<NaiveDateTime, SdkError> {
        clock::anchor_before(&self.time, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_sample_deserialize() {
        let json = r#"[{"time": "08:00 AM", "price": 100}, {"time": "09:15 PM", "price": 90.5}]"#;
        let samples: Vec<PriceSample> = serde_json::from_str(json).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].price, Decimal::from(100));
        assert_eq!(samples[1].price, Decimal::new(905, 1));
        assert_eq!(samples[1].clock_time().unwrap().hour(), 21);
    }

    #[test]
    fn test_sample_bad_time_is_error() {
        let sample = PriceSample::new("noon", Decimal::ONE);
        assert!(matches!(sample.clock_time(), Err(SdkError::TimeParse { .. })));
    }
}
