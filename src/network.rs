//! Network URL constants for the Yadio SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.yadio.io";
