//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and pure logic
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `client.rs` — Sub-client with the HTTP-backed operations

pub mod analytics;
pub mod history;
pub mod market;
pub mod rates;
