//! Outcome of a single endpoint call.

use std::fmt;

/// What an endpoint call produced.
///
/// Transport problems (connection errors, non-2xx statuses, undecodable bodies)
/// never surface as `Err`; they arrive here as [`Fetched::TransportError`] so
/// callers can decide whether missing data is actionable.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// A decoded, non-empty payload.
    Data(T),
    /// The request succeeded but carried no data.
    Empty,
    /// The request failed; the detail has already been logged.
    TransportError(String),
}

impl<T> Fetched<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Collapse to `Option`, treating both `Empty` and `TransportError` as absence.
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Empty | Self::TransportError(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Empty | Self::TransportError(_) => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Fetched<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Data(data) => Fetched::Data(f(data)),
            Self::Empty => Fetched::Empty,
            Self::TransportError(detail) => Fetched::TransportError(detail),
        }
    }

    /// Like [`Fetched::map`] for fallible conversions; only the conversion error
    /// escapes as `Err`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Fetched<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Self::Data(data) => Fetched::Data(f(data)?),
            Self::Empty => Fetched::Empty,
            Self::TransportError(detail) => Fetched::TransportError(detail),
        })
    }

    /// Fold a transport result, logging the failure as a diagnostic.
    pub fn from_result<E: fmt::Display>(url: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(e) => {
                tracing::warn!(url = url, error = %e, "Yadio request failed");
                Self::TransportError(e.to_string())
            }
        }
    }
}

impl<T> Fetched<Vec<T>> {
    /// Downgrade an empty sequence to [`Fetched::Empty`].
    pub fn non_empty(self) -> Self {
        match self {
            Self::Data(items) if items.is_empty() => Self::Empty,
            other => other,
        }
    }
}

impl Fetched<serde_json::Value> {
    /// Downgrade `null`, `[]` and `{}` payloads to [`Fetched::Empty`].
    pub fn non_null(self) -> Self {
        match self {
            Self::Data(serde_json::Value::Null) => Self::Empty,
            Self::Data(serde_json::Value::Array(items)) if items.is_empty() => Self::Empty,
            Self::Data(serde_json::Value::Object(map)) if map.is_empty() => Self::Empty,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_result_keeps_detail() {
        let ok: Fetched<u32> = Fetched::from_result("u", Ok::<_, String>(7));
        assert_eq!(ok, Fetched::Data(7));

        let err: Fetched<u32> = Fetched::from_result("u", Err("connection refused"));
        assert_eq!(err, Fetched::TransportError("connection refused".to_string()));
        assert_eq!(err.data(), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(Fetched::Data(Vec::<u8>::new()).non_empty(), Fetched::Empty);
        assert_eq!(Fetched::Data(vec![1]).non_empty(), Fetched::Data(vec![1]));
    }

    #[test]
    fn test_non_null() {
        assert_eq!(Fetched::Data(json!(null)).non_null(), Fetched::Empty);
        assert_eq!(Fetched::Data(json!([])).non_null(), Fetched::Empty);
        assert_eq!(Fetched::Data(json!({})).non_null(), Fetched::Empty);
        assert!(Fetched::Data(json!(["USD"])).non_null().is_data());
    }

    #[test]
    fn test_try_map_passes_through_absence() {
        let empty: Fetched<u32> = Fetched::Empty;
        let mapped: Result<Fetched<u32>, String> = empty.try_map(|v| Ok(v + 1));
        assert_eq!(mapped.unwrap(), Fetched::Empty);

        let data = Fetched::Data(1u32);
        let failed: Result<Fetched<u32>, String> = data.try_map(|_| Err("bad".to_string()));
        assert_eq!(failed.unwrap_err(), "bad");
    }
}
