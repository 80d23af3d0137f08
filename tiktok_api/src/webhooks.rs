//! Inbound webhook payloads.
//!
//! The body is kept as received. Signatures are not verified and no schema
//! is enforced; [`WebhookPayload::event`] is a best-effort view.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw webhook request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookPayload {
    raw: String,
}

/// Common envelope fields of a webhook event. Missing fields are `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    pub client_key: Option<String>,
    pub event: Option<String>,
    /// Unix seconds, kept as sent since it may arrive as a number or a string.
    pub create_time: Option<Value>,
    pub user_openid: Option<String>,
    /// Event-specific details, usually a JSON document encoded as a string.
    pub content: Option<String>,
}

impl WebhookPayload {
    /// Reads the whole body from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(Self { raw })
    }

    /// Wraps a body that was already read. Invalid UTF-8 is replaced.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            raw: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The body decoded as JSON, or `None` when it is not valid JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.raw)
            .map_err(|e| tracing::warn!("Failed to decode webhook payload: {}", e))
            .ok()
    }

    pub fn event(&self) -> Option<WebhookEvent> {
        serde_json::from_str(&self.raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORIZATION_REMOVED: &str = r#"{
        "client_key": "bwo2m45353a6k85",
        "event": "authorization.removed",
        "create_time": 1615338610,
        "user_openid": "act.example12345Example12345Example",
        "content": "{\"reason\": 1}"
    }"#;

    #[test]
    fn reads_raw_body() {
        let payload = WebhookPayload::from_reader(AUTHORIZATION_REMOVED.as_bytes()).unwrap();
        assert_eq!(payload.raw(), AUTHORIZATION_REMOVED);
    }

    #[test]
    fn decodes_json() {
        let payload = WebhookPayload::from_bytes(AUTHORIZATION_REMOVED.as_bytes());
        let json = payload.json().unwrap();
        assert_eq!(json["event"], "authorization.removed");
        assert_eq!(json["create_time"], 1615338610);
    }

    #[test]
    fn typed_event_view() {
        let payload = WebhookPayload::from_bytes(AUTHORIZATION_REMOVED.as_bytes());
        let event = payload.event().unwrap();
        assert_eq!(event.event.as_deref(), Some("authorization.removed"));
        assert_eq!(event.content.as_deref(), Some(r#"{"reason": 1}"#));
        assert_eq!(event.create_time, Some(Value::from(1615338610)));
    }

    #[test]
    fn string_create_time_keeps_event() {
        let payload = WebhookPayload::from_bytes(
            br#"{"event":"authorization.removed","create_time":"1615338610","user_openid":"act.1"}"#,
        );
        let event = payload.event().unwrap();
        assert_eq!(event.event.as_deref(), Some("authorization.removed"));
        assert_eq!(event.create_time, Some(Value::from("1615338610")));
        assert_eq!(event.user_openid.as_deref(), Some("act.1"));
    }

    #[test]
    fn invalid_json_is_none() {
        let payload = WebhookPayload::from_bytes(b"client_key=abc");
        assert_eq!(payload.raw(), "client_key=abc");
        assert!(payload.json().is_none());
        assert!(payload.event().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = WebhookPayload::from_bytes(br#"{"event":"video.publish.completed","extra":[1,2]}"#);
        let event = payload.event().unwrap();
        assert_eq!(event.event.as_deref(), Some("video.publish.completed"));
        assert!(event.client_key.is_none());
    }
}
