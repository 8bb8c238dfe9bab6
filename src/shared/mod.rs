//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod clock;
pub mod fetched;
pub mod serde_util;

pub use fetched::Fetched;

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CurrencyCode ────────────────────────────────────────────────────────────

/// Upper-cased currency code (e.g. `"BTC"`, `"USD"`).
///
/// Input is case-insensitive; the stored form is always upper case, which is
/// what the backend expects in paths and query strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalize and validate a currency code.
    ///
    /// Codes are substituted into URL paths, so only ASCII alphanumerics are
    /// accepted.
    pub fn new(code: &str) -> Result<Self, SdkError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(SdkError::Validation(
                "currency code must not be empty".to_string(),
            ));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SdkError::Validation(format!(
                "invalid currency code: {}",
                code
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CurrencyCode::new(&s).map_err(serde::de::Error::custom)
    }
}

// ─── MarketSide ──────────────────────────────────────────────────────────────

/// P2P market side for ads and stats queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSide {
    Buy,
    Sell,
}

impl MarketSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for MarketSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MarketSide {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(SdkError::Validation(format!(
                "market side must be 'buy' or 'sell', got '{}'",
                other
            ))),
        }
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Validate a trailing window length (hours or days).
pub fn validate_window(value: f64, unit: &str) -> Result<f64, SdkError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SdkError::Validation(format!(
            "{} must be a positive number, got {}",
            unit, value
        )));
    }
    Ok(value)
}

/// Render a number as a float literal for a path segment (`3` → `"3.0"`).
///
/// The backend routes on float segments, so integral values keep their `.0`.
pub fn float_segment(value: f64) -> String {
    format!("{:?}", value)
}
