//! P2P market domain — advertised offers and aggregate statistics.

#[cfg(feature = "http")]
pub mod client;
