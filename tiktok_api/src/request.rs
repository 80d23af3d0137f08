//! Request descriptors.
//!
//! A [`Request`] is assembled once per call, either from an endpoint path
//! relative to the configured API host ([`Request::build`]) or from a fully
//! qualified URL handed back by the API ([`Request::custom`]). Once handed to
//! the transport it is only read, never modified.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::params::Params;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// How POST/PUT parameters are serialized into the body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded`, expected by the OAuth endpoints.
    Form,
    /// `application/json`, expected by the resource endpoints.
    #[default]
    Json,
}

impl BodyEncoding {
    pub fn content_type(&self) -> &'static str {
        match self {
            BodyEncoding::Form => "application/x-www-form-urlencoded",
            BodyEncoding::Json => "application/json; charset=UTF-8",
        }
    }
}

/// A local file to stream as a raw request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub path: PathBuf,
    /// Declared MIME type, sent as `Content-Type`.
    pub mime_type: String,
}

impl UploadFile {
    pub fn new(path: impl Into<PathBuf>, mime_type: &str) -> Self {
        Self {
            path: path.into(),
            mime_type: mime_type.to_string(),
        }
    }
}

/// One outbound HTTP call, fully assembled.
#[derive(Clone, Debug)]
pub struct Request {
    method: Method,
    url: String,
    body: Option<String>,
    headers: Vec<(String, String)>,
    access_token: Option<String>,
    file: Option<UploadFile>,
}

impl Request {
    /// Assembles a request against `{base_url}/{graph_version}{endpoint}`.
    ///
    /// GET parameters go into the query string, appended after any literal
    /// query the endpoint already carries. POST and PUT parameters go into the
    /// body using `encoding`. Parameters never end up in both places.
    pub fn build(
        method: Method,
        endpoint: &str,
        params: &Params,
        config: &Config,
        encoding: BodyEncoding,
    ) -> Self {
        let separator = if endpoint.starts_with('/') { "" } else { "/" };
        let mut url = format!(
            "{}/{}{}{}",
            config.base_url, config.graph_version, separator, endpoint
        );
        let mut headers = Vec::new();
        let mut body = None;

        if !params.is_empty() {
            match method {
                Method::Get => {
                    url.push(if url.contains('?') { '&' } else { '?' });
                    url.push_str(&params.to_query_string());
                }
                Method::Post | Method::Put => {
                    headers.push((
                        "Content-Type".to_string(),
                        encoding.content_type().to_string(),
                    ));
                    body = Some(match encoding {
                        BodyEncoding::Form => params.to_query_string(),
                        BodyEncoding::Json => params.to_json_string(),
                    });
                }
            }
        }

        Self {
            method,
            url,
            body,
            headers,
            access_token: config.bearer_token().map(str::to_string),
            file: None,
        }
    }

    /// Assembles a request against a fully qualified URL, such as an upload
    /// URL returned by a publish call. No bearer token is attached.
    pub fn custom(
        url: &str,
        method: Method,
        headers: Vec<(String, String)>,
        file: Option<UploadFile>,
    ) -> Self {
        Self {
            method,
            url: url.to_string(),
            body: None,
            headers,
            access_token: None,
            file,
        }
    }

    /// Adds an explicit header. It is sent in addition to any bearer token,
    /// even when named `Authorization`.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The query string portion of the URL, if any.
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the value of the first header named `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> Config {
        Config::default().with_access_token("act.token")
    }

    fn params() -> Params {
        Params::new().with("max_count", 20).with("cursor", "abc")
    }

    #[test]
    fn get_puts_params_in_query_only() {
        let req = Request::build(
            Method::Get,
            "/user/info/",
            &params(),
            &config(),
            BodyEncoding::Json,
        );
        assert_eq!(
            req.url(),
            "https://open.tiktokapis.com/v2/user/info/?max_count=20&cursor=abc"
        );
        assert!(req.body().is_none());
        assert!(req.header("content-type").is_none());
    }

    #[test]
    fn post_puts_params_in_body_only() {
        for method in [Method::Post, Method::Put] {
            let req = Request::build(method, "/video/list/", &params(), &config(), BodyEncoding::Json);
            assert_eq!(req.url(), "https://open.tiktokapis.com/v2/video/list/");
            assert!(req.query().is_none());
            let body: serde_json::Value = serde_json::from_str(req.body().unwrap()).unwrap();
            assert_eq!(body, json!({"max_count": 20, "cursor": "abc"}));
            assert_eq!(
                req.header("Content-Type"),
                Some("application/json; charset=UTF-8")
            );
        }
    }

    #[test]
    fn post_keeps_literal_endpoint_query() {
        let req = Request::build(
            Method::Post,
            "/video/query/?fields=id,title",
            &params(),
            &config(),
            BodyEncoding::Json,
        );
        assert_eq!(req.query(), Some("fields=id,title"));
        assert!(req.body().is_some());
    }

    #[test]
    fn get_appends_to_literal_endpoint_query() {
        let req = Request::build(
            Method::Get,
            "/user/info/?fields=open_id",
            &Params::new().with("extra", "1"),
            &config(),
            BodyEncoding::Json,
        );
        assert_eq!(req.query(), Some("fields=open_id&extra=1"));
    }

    #[test]
    fn form_encoding_for_oauth() {
        let req = Request::build(
            Method::Post,
            "/oauth/token/",
            &Params::new()
                .with("client_key", "key")
                .with("grant_type", "client_credentials"),
            &Config::default(),
            BodyEncoding::Form,
        );
        assert_eq!(
            req.body(),
            Some("client_key=key&grant_type=client_credentials")
        );
        assert_eq!(
            req.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert!(req.access_token().is_none());
    }

    #[test]
    fn empty_params_produce_no_body_or_query() {
        let req = Request::build(
            Method::Post,
            "/post/publish/creator_info/query/",
            &Params::new(),
            &config(),
            BodyEncoding::Json,
        );
        assert!(req.body().is_none());
        assert!(req.query().is_none());
        assert!(req.headers().is_empty());
    }

    #[test]
    fn url_uses_configured_version_and_host() {
        let config = Config::default()
            .with_base_url("http://localhost:9000/")
            .with_graph_version("v3");
        let req = Request::build(Method::Get, "user/info/", &Params::new(), &config, BodyEncoding::Json);
        assert_eq!(req.url(), "http://localhost:9000/v3/user/info/");
    }

    #[test]
    fn access_token_carried_when_present() {
        let req = Request::build(Method::Get, "/user/info/", &Params::new(), &config(), BodyEncoding::Json);
        assert_eq!(req.access_token(), Some("act.token"));
    }

    #[test]
    fn custom_request_uses_url_verbatim() {
        let file = UploadFile::new("/tmp/video.mp4", "video/mp4");
        let req = Request::custom(
            "https://upload.example.com/video/?upload_id=1&upload_token=x",
            Method::Put,
            vec![("Content-Type".to_string(), "video/mp4".to_string())],
            Some(file.clone()),
        );
        assert_eq!(
            req.url(),
            "https://upload.example.com/video/?upload_id=1&upload_token=x"
        );
        assert_eq!(req.method(), Method::Put);
        assert_eq!(req.file(), Some(&file));
        assert!(req.access_token().is_none());
        assert!(req.body().is_none());
    }

    #[test]
    fn explicit_headers_sit_beside_token() {
        let req = Request::build(Method::Post, "/video/list/", &params(), &config(), BodyEncoding::Json)
            .with_header("Authorization", "Bearer other");
        assert_eq!(req.access_token(), Some("act.token"));
        assert_eq!(req.header("content-type"), Some("application/json; charset=UTF-8"));
        assert_eq!(req.header("authorization"), Some("Bearer other"));
        assert_eq!(req.headers().len(), 2);
    }
}
