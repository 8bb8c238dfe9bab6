//! Wire types for rate, conversion and status responses (REST).

use crate::error::SdkError;
use crate::shared::serde_util::decimal_number;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Echo of the conversion/rate request parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestEcho {
    #[serde(default, deserialize_with = "decimal_number::option::deserialize")]
    pub amount: Option<Decimal>,
    pub from: String,
    pub to: String,
}

/// REST response for `/convert/{amount}/{from}/{to}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertResponse {
    #[serde(default)]
    pub request: Option<RequestEcho>,
    #[serde(default, deserialize_with = "decimal_number::option::deserialize")]
    pub result: Option<Decimal>,
    #[serde(default, deserialize_with = "decimal_number::option::deserialize")]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl ConvertResponse {
    /// The conversion rate; absent means the response is unusable.
    pub fn rate(&self) -> Result<Decimal, SdkError> {
        self.rate
            .ok_or_else(|| SdkError::MissingData("conversion response has no 'rate'".to_string()))
    }
}

/// REST response for `/rate/{from}/{to}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateResponse {
    #[serde(default)]
    pub request: Option<RequestEcho>,
    #[serde(default, deserialize_with = "decimal_number::option::deserialize")]
    pub rate: Option<Decimal>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl RateResponse {
    pub fn rate(&self) -> Result<Decimal, SdkError> {
        self.rate
            .ok_or_else(|| SdkError::MissingData("rate response has no 'rate'".to_string()))
    }
}

/// REST response for `/exrates/{currency}`.
///
/// The rate table is keyed by the base currency code, next to `base` and
/// `timestamp`: `{"USD": {"ARS": 870.5, ...}, "base": "USD", "timestamp": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExRatesResponse {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(flatten)]
    pub tables: BTreeMap<String, serde_json::Value>,
}

impl ExRatesResponse {
    /// Rates quoted against `base`, skipping entries that are not numeric.
    pub fn rates_for(&self, base: &str) -> Result<BTreeMap<String, Decimal>, SdkError> {
        let table = self
            .tables
            .get(base)
            .and_then(|v| v.as_object())
            .ok_or_else(|| SdkError::MissingData(format!("no rate table for {}", base)))?;

        Ok(table
            .iter()
            .filter_map(|(code, value)| {
                let rate: Decimal = serde_json::from_value::<DecimalValue>(value.clone())
                    .ok()?
                    .0;
                Some((code.clone(), rate))
            })
            .collect())
    }
}

#[derive(Deserialize)]
struct DecimalValue(#[serde(deserialize_with = "decimal_number::deserialize")] Decimal);

/// REST response for `/ping`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PingResponse {
    #[serde(default)]
    pub status: Option<String>,
}

impl PingResponse {
    pub fn status(&self) -> Result<&str, SdkError> {
        self.status
            .as_deref()
            .ok_or_else(|| SdkError::MissingData("ping response has no 'status'".to_string()))
    }
}
