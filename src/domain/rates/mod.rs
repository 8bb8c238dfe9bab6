//! Rates domain — exchange-rate tables, conversions, supported currencies.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{ConvertResponse, ExRatesResponse, PingResponse, RateResponse, RequestEcho};
