//! HTTP client layer — `YadioHttp` and endpoint path templates.

pub mod client;
pub mod endpoint;

pub use client::YadioHttp;
pub use endpoint::Endpoint;
