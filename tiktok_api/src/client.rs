//! HTTP client facade for the TikTok Open API.

use std::sync::Mutex;

use serde_json::Value;

use crate::{
    auth::{Authentication, ClientCredentials},
    config::{Config, CursorPolicy},
    params::Params,
    post::PostApi,
    request::{BodyEncoding, Method, Request, UploadFile},
    response::{ApiResponse, Diagnostics},
    transport::Transport,
    user::User,
    video::Video,
    Error,
};

/// HTTP client for the TikTok Open API.
///
/// Holds the [`Config`] every request is built from and the last pagination
/// cursor seen. Each call builds one [`Request`], sends it, and returns the
/// decoded body as an [`ApiResponse`].
pub struct Client {
    config: Config,
    transport: Transport,
    cursor: Mutex<CursorState>,
}

#[derive(Debug, Default)]
struct CursorState {
    /// Last `data.cursor` seen on a response with `data.has_more` set.
    next: Option<Value>,
    /// Set when the latest paginated response reported `has_more` as false.
    exhausted: bool,
}

impl Default for Client {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Client {
    /// Creates a client for the production API using `access_token`.
    pub fn new(access_token: &str) -> Self {
        Self::from_config(Config::default().with_access_token(access_token))
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            transport: Transport::new(),
            cursor: Mutex::new(CursorState::default()),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, access_token: &str) -> Self {
        Self::from_config(
            Config::default()
                .with_base_url(base_url)
                .with_access_token(access_token),
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn access_token(&self) -> &str {
        &self.config.access_token
    }

    pub fn set_access_token(&mut self, access_token: &str) {
        self.config.access_token = access_token.to_string();
    }

    pub fn graph_version(&self) -> &str {
        &self.config.graph_version
    }

    /// The last cursor seen on a paginated response, if any.
    pub fn cursor_next(&self) -> Option<Value> {
        self.cursor_state().next.clone()
    }

    /// Whether the latest response carrying `data.has_more` said there were
    /// no more pages. Cleared again by the next response with a cursor.
    pub fn pages_exhausted(&self) -> bool {
        self.cursor_state().exhausted
    }

    /// Sends a GET request with `params` in the query string.
    pub async fn get(&self, endpoint: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.send_request(Method::Get, endpoint, params, BodyEncoding::Json)
            .await
    }

    /// Sends a POST request with `params` as a JSON body.
    pub async fn post(&self, endpoint: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.send_request(Method::Post, endpoint, params, BodyEncoding::Json)
            .await
    }

    /// Sends a POST request with `params` as a form-encoded body.
    pub async fn post_form(&self, endpoint: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.send_request(Method::Post, endpoint, params, BodyEncoding::Form)
            .await
    }

    /// Builds and sends a request relative to the configured API host, then
    /// records the pagination cursor.
    pub async fn send_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
        encoding: BodyEncoding,
    ) -> Result<ApiResponse, Error> {
        let request = Request::build(method, endpoint, params, &self.config, encoding);
        let response = self.transport.send(&request).await?;
        let cursor_next = self.update_cursor(&response.body);

        Ok(ApiResponse {
            body: response.body,
            cursor_next,
            debug: self.diagnostics(&request, response.status),
        })
    }

    /// Sends a request to a fully qualified URL, optionally streaming `file`
    /// as the body. Cursors are not tracked for these calls.
    pub async fn send_custom_request(
        &self,
        url: &str,
        method: Method,
        headers: Vec<(String, String)>,
        file: Option<UploadFile>,
    ) -> Result<ApiResponse, Error> {
        let request = Request::custom(url, method, headers, file);
        let response = self.transport.send(&request).await?;

        Ok(ApiResponse {
            body: response.body,
            cursor_next: None,
            debug: self.diagnostics(&request, response.status),
        })
    }

    pub fn authentication(&self, credentials: ClientCredentials) -> Authentication<'_> {
        Authentication::new(self, credentials)
    }

    pub fn user(&self) -> User<'_> {
        User::new(self)
    }

    pub fn video(&self) -> Video<'_> {
        Video::new(self)
    }

    pub fn post_api(&self) -> PostApi<'_> {
        PostApi::new(self)
    }

    fn cursor_state(&self) -> std::sync::MutexGuard<'_, CursorState> {
        self.cursor.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn update_cursor(&self, body: &Value) -> Option<Value> {
        let cursor = extract_cursor(body);
        let mut state = self.cursor_state();
        match &cursor {
            Some(cursor) => {
                tracing::debug!(%cursor, "more pages available");
                state.next = Some(cursor.clone());
                state.exhausted = false;
            }
            None => {
                if reports_last_page(body) {
                    state.exhausted = true;
                }
                if self.config.cursor_policy == CursorPolicy::ClearWhenExhausted {
                    state.next = None;
                }
            }
        }
        cursor
    }

    fn diagnostics(&self, request: &Request, status: u16) -> Diagnostics {
        Diagnostics {
            method: request.method(),
            url: request.url().to_string(),
            graph_version: self.config.graph_version.clone(),
            status,
        }
    }
}

/// Returns `data.cursor` when `data.has_more` is truthy.
fn extract_cursor(body: &Value) -> Option<Value> {
    let data = body.get("data")?;
    if is_truthy(data.get("has_more")?) {
        Some(data.get("cursor").cloned().unwrap_or(Value::Null))
    } else {
        None
    }
}

/// True when `data.has_more` is present and falsy.
fn reports_last_page(body: &Value) -> bool {
    body.get("data")
        .and_then(|data| data.get("has_more"))
        .map_or(false, |has_more| !is_truthy(has_more))
}

/// Loose truthiness: `null`, `false`, `0`, `""`, `"0"` and empty
/// collections are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn cursor_extracted_when_has_more() {
        let body = json!({"data": {"has_more": true, "cursor": 1700000000000_i64, "videos": []}});
        assert_eq!(extract_cursor(&body), Some(json!(1700000000000_i64)));
    }

    #[test]
    fn cursor_ignored_without_has_more() {
        assert_eq!(extract_cursor(&json!({"data": {"has_more": false, "cursor": 5}})), None);
        assert_eq!(extract_cursor(&json!({"data": {"cursor": 5}})), None);
        assert_eq!(extract_cursor(&json!({"error": {"code": "ok"}})), None);
        assert_eq!(extract_cursor(&Value::Null), None);
    }

    #[test]
    fn truthiness_matches_loose_rules() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(!is_truthy(&value), "{} should be falsy", value);
        }
        for value in [json!(true), json!(1), json!("yes"), json!([0]), json!({"a": 1})] {
            assert!(is_truthy(&value), "{} should be truthy", value);
        }
    }

    #[test]
    fn keep_policy_retains_stale_cursor() {
        let client = Client::default();
        client.update_cursor(&json!({"data": {"has_more": true, "cursor": 42}}));
        assert_eq!(client.update_cursor(&json!({"data": {"user": {}}})), None);
        assert_eq!(client.cursor_next(), Some(json!(42)));
    }

    #[test]
    fn clear_policy_resets_cursor() {
        let client = Client::from_config(
            Config::default().with_cursor_policy(CursorPolicy::ClearWhenExhausted),
        );
        client.update_cursor(&json!({"data": {"has_more": true, "cursor": 42}}));
        client.update_cursor(&json!({"data": {"has_more": false}}));
        assert_eq!(client.cursor_next(), None);
    }

    #[test]
    fn exhaustion_tracks_latest_paginated_response() {
        let client = Client::default();
        assert!(!client.pages_exhausted());
        client.update_cursor(&json!({"data": {"has_more": true, "cursor": 42}}));
        assert!(!client.pages_exhausted());
        client.update_cursor(&json!({"data": {"has_more": false, "cursor": 43}}));
        assert!(client.pages_exhausted());
        assert_eq!(client.cursor_next(), Some(json!(42)));
        // Responses without has_more leave the flag alone.
        client.update_cursor(&json!({"data": {"user": {}}}));
        assert!(client.pages_exhausted());
        client.update_cursor(&json!({"data": {"has_more": 1, "cursor": 7}}));
        assert!(!client.pages_exhausted());
    }

    #[test]
    fn set_access_token_replaces_token() {
        let mut client = Client::new("old");
        client.set_access_token("new");
        assert_eq!(client.access_token(), "new");
        assert_eq!(client.graph_version(), "v2");
    }
}
