//! Request parameter names and the ordered [`Params`] map sent with each request.

use serde::Serialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

pub const CLIENT_KEY: &str = "client_key";
pub const CLIENT_SECRET: &str = "client_secret";
pub const CODE: &str = "code";
pub const CODE_CHALLENGE: &str = "code_challenge";
pub const CURSOR: &str = "cursor";
pub const FIELDS: &str = "fields";
pub const FILTERS: &str = "filters";
pub const GRANT_TYPE: &str = "grant_type";
pub const MAX_COUNT: &str = "max_count";
pub const REDIRECT_URI: &str = "redirect_uri";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const RESPONSE_TYPE: &str = "response_type";
pub const SCOPE: &str = "scope";
pub const STATE: &str = "state";
pub const TOKEN: &str = "token";
pub const VIDEO_IDS: &str = "video_ids";

/// Joins field or scope names into the comma-separated form the API expects.
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Ordered key/value parameters for one request.
///
/// Values are arbitrary JSON so nested arrays and objects pass through to the
/// remote API untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`.
    ///
    /// Arrays render as `key[0]=a&key[1]=b`, objects as `key[sub]=v`,
    /// booleans as `1`/`0`; `null` values are left out.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.0.iter() {
            append_value(&mut serializer, key, value);
        }
        serializer.finish()
    }

    /// Encodes the parameters as a JSON object.
    pub fn to_json_string(&self) -> String {
        // A map of JSON values always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn append_value(serializer: &mut form_urlencoded::Serializer<String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            serializer.append_pair(key, if *b { "1" } else { "0" });
        }
        Value::Number(n) => {
            serializer.append_pair(key, &n.to_string());
        }
        Value::String(s) => {
            serializer.append_pair(key, s);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_value(serializer, &format!("{}[{}]", key, index), item);
            }
        }
        Value::Object(map) => {
            for (sub_key, item) in map.iter() {
                append_value(serializer, &format!("{}[{}]", key, sub_key), item);
            }
        }
    }
}
