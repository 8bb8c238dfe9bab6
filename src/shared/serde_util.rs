//! Custom serde helpers for backend wire formats.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// A price as the backend sends it: usually a JSON number, sometimes a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    fn into_decimal(self) -> Result<Decimal, String> {
        let text = match self {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s.trim().to_string(),
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| format!("Invalid decimal '{}': {}", text, e))
    }
}

/// Deserializes a JSON number or numeric string into `Decimal`.
///
/// Numbers go through their textual form so `67000.12` stays exactly
/// `67000.12` instead of picking up binary float noise.
pub mod decimal_number {
    use super::RawNumber;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNumber::deserialize(deserializer)?
            .into_decimal()
            .map_err(serde::de::Error::custom)
    }

    /// Optional variant; `null` and a missing field both map to `None`.
    pub mod option {
        use super::RawNumber;
        use rust_decimal::Decimal;
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<RawNumber>::deserialize(deserializer)?
                .map(RawNumber::into_decimal)
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}
