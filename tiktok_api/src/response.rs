//! The value returned for every API call.

use std::ops::Index;

use serde_json::Value;

use crate::request::Method;

/// Describes the request that produced a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostics {
    pub method: Method,
    pub url: String,
    pub graph_version: String,
    pub status: u16,
}

/// Decoded response plus pagination and diagnostic details.
///
/// The body is returned whatever the HTTP status: callers look for TikTok's
/// `error` envelope themselves.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// Decoded JSON body, `Value::Null` when the body was not valid JSON.
    pub body: Value,
    /// `data.cursor` from the body when `data.has_more` was set.
    pub cursor_next: Option<Value>,
    pub debug: Diagnostics,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.debug.status
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }

    /// Whether the body could be decoded as JSON.
    pub fn is_decoded(&self) -> bool {
        !self.body.is_null()
    }
}

impl Index<&str> for ApiResponse {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.body[key]
    }
}
