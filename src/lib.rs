//! # Yadio SDK
//!
//! A Rust client for the Yadio exchange-rate API with derived price analytics.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, wire/domain types, pure analytics (always available)
//! 2. **HTTP API** — `YadioHttp`, one method per endpoint, failures folded into `Fetched`
//! 3. **High-Level Client** — `YadioClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yadio::prelude::*;
//!
//! let client = YadioClient::builder()
//!     .base_url("https://api.yadio.io")
//!     .build()?;
//!
//! let samples = client.history().today(6.0, "brl").await?;
//! let volatility = client.analytics().volatility(6, "brl", Some("America/Sao_Paulo")).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, clock helpers and the `Fetched` outcome type.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client and endpoint paths.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `YadioClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CurrencyCode, Fetched, MarketSide};

    // Domain types
    pub use crate::domain::analytics::{Analytics, RateSource};
    pub use crate::domain::history::PriceSample;
    pub use crate::domain::rates::{
        ConvertResponse, ExRatesResponse, PingResponse, RateResponse, RequestEcho,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AnalyticsClient, HistoryClient, MarketClient, RatesClient, YadioClient,
        YadioClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::YadioHttp;
}
