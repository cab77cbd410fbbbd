//! Response envelope used by every backend endpoint.
//!
//! The backend wraps payloads as `{code, data?, message?}`. A `code` of `0`
//! means success; any other value is an application-level failure even when
//! the HTTP status is 200.

use crate::nullable::or_default;
use serde::{Deserialize, Serialize};

/// Envelope code that marks a successful response.
pub const SUCCESS_CODE: i64 = 0;

/// Standard backend response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application status code, `0` on success
    pub code: i64,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable message, usually present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Build a success envelope around `data`
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data: Some(data),
            message: None,
        }
    }

    /// Build a failure envelope
    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Message to surface for a failed envelope.
    pub fn failure_message(&self) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => format!("request failed with code {}", self.code),
        }
    }
}

/// One page of records as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,

    /// Total number of records matching the query
    #[serde(default, deserialize_with = "or_default")]
    pub total: u64,

    /// Page the server actually served (1-indexed)
    #[serde(default = "default_current")]
    pub current: u32,

    /// Page size the server used
    #[serde(default, deserialize_with = "or_default")]
    pub size: u32,
}

fn default_current() -> u32 {
    1
}

impl<T> PageData<T> {
    /// Create a page payload
    pub fn new(records: Vec<T>, total: u64, current: u32, size: u32) -> Self {
        Self {
            records,
            total,
            current,
            size,
        }
    }

    /// An empty first page
    pub fn empty(size: u32) -> Self {
        Self::new(Vec::new(), 0, 1, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let env: Envelope<u32> = serde_json::from_str(r#"{"code":0,"data":7}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, Some(7));
    }

    #[test]
    fn test_envelope_failure_message() {
        let env: Envelope<u32> =
            serde_json::from_str(r#"{"code":40001,"message":"task not found"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.failure_message(), "task not found");

        let env: Envelope<u32> = serde_json::from_str(r#"{"code":500,"message":"  "}"#).unwrap();
        assert_eq!(env.failure_message(), "request failed with code 500");
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Envelope<T> {
        serde_json::from_str(body).unwrap()
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn test_envelope_payload_without_default() {
        let env: Envelope<Counter> = decode(r#"{"code":0,"data":{"value":4}}"#);
        assert_eq!(env.data, Some(Counter { value: 4 }));

        let env: Envelope<Counter> = decode(r#"{"code":3,"message":"denied"}"#);
        assert!(env.data.is_none());

        let env: Envelope<Counter> = decode(r#"{"code":0,"data":null}"#);
        assert!(env.data.is_none());
    }

    #[test]
    fn test_page_data_null_counters() {
        let page: PageData<u32> =
            serde_json::from_str(r#"{"records":[1],"total":null,"size":null}"#).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.size, 0);
    }

    #[test]
    fn test_page_data_defaults() {
        let page: PageData<u32> = serde_json::from_str(r#"{"total":3}"#).unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.current, 1);
        assert_eq!(page.total, 3);
    }
}
