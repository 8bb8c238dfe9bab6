//! Path templates for every Yadio endpoint.

use crate::error::HttpError;
use crate::shared::{float_segment, CurrencyCode, MarketSide};
use serde::Serialize;

/// One remote endpoint with its parameters.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    ExRates {
        currency: &'a CurrencyCode,
    },
    Convert {
        amount: f64,
        from: &'a CurrencyCode,
        to: &'a CurrencyCode,
    },
    Rate {
        from: &'a CurrencyCode,
        to: &'a CurrencyCode,
    },
    Currencies,
    Exchanges,
    Today {
        hours: f64,
        currency: &'a CurrencyCode,
    },
    Hist {
        days: f64,
        currency: &'a CurrencyCode,
    },
    Compare {
        days: f64,
        currency: &'a CurrencyCode,
    },
    MarketAds {
        currency: &'a CurrencyCode,
        side: MarketSide,
        limit: u32,
    },
    MarketStats {
        currency: &'a CurrencyCode,
        side: MarketSide,
    },
    Ping,
}

#[derive(Serialize)]
struct MarketQuery<'a> {
    currency: &'a str,
    side: MarketSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl Endpoint<'_> {
    /// Path plus query string, relative to the API base URL.
    pub fn path(&self) -> Result<String, HttpError> {
        let path = match *self {
            Self::ExRates { currency } => format!("/exrates/{}", currency),
            Self::Convert { amount, from, to } => {
                format!("/convert/{}/{}/{}", float_segment(amount), from, to)
            }
            Self::Rate { from, to } => format!("/rate/{}/{}", from, to),
            Self::Currencies => "/currencies".to_string(),
            Self::Exchanges => "/exchanges".to_string(),
            Self::Today { hours, currency } => {
                format!("/today/{}/{}", float_segment(hours), currency)
            }
            Self::Hist { days, currency } => {
                format!("/hist/{}/{}", float_segment(days), currency)
            }
            Self::Compare { days, currency } => {
                format!("/compare/{}/{}", float_segment(days), currency)
            }
            Self::MarketAds {
                currency,
                side,
                limit,
            } => {
                let query = serde_urlencoded::to_string(MarketQuery {
                    currency: currency.as_str(),
                    side,
                    limit: Some(limit),
                })?;
                format!("/market/ads?{}", query)
            }
            Self::MarketStats { currency, side } => {
                let query = serde_urlencoded::to_string(MarketQuery {
                    currency: currency.as_str(),
                    side,
                    limit: None,
                })?;
                format!("/market/stats?{}", query)
            }
            Self::Ping => "/ping".to_string(),
        };
        Ok(path)
    }
}
