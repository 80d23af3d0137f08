//! Video listing and lookup by ID.
//!
//! Both endpoints take the requested fields as a literal `fields=` query on
//! the path while the remaining parameters travel in the JSON body.

use serde_json::{json, Map, Value};

use crate::{
    client::Client,
    fields,
    params::{self, join_fields, Params},
    response::ApiResponse,
    Error,
};

pub const LIST_ENDPOINT: &str = "/video/list/";
pub const QUERY_ENDPOINT: &str = "/video/query/";

/// Fields requested when the caller passes none.
pub const DEFAULT_FIELDS: &[&str] = &[
    fields::ID,
    fields::CREATE_TIME,
    fields::TITLE,
    fields::COVER_IMAGE_URL,
    fields::SHARE_URL,
    fields::VIDEO_DESCRIPTION,
    fields::DURATION,
    fields::HEIGHT,
    fields::WIDTH,
    fields::EMBED_HTML,
    fields::EMBED_LINK,
    fields::LIKE_COUNT,
    fields::COMMENT_COUNT,
    fields::SHARE_COUNT,
    fields::VIEW_COUNT,
];

pub struct Video<'a> {
    client: &'a Client,
}

impl<'a> Video<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the authorized user's videos, newest first. `params` may carry
    /// `max_count` and `cursor`.
    pub async fn list<S: AsRef<str>>(
        &self,
        params: &Params,
        fields: &[S],
    ) -> Result<ApiResponse, Error> {
        self.client
            .post(&endpoint_with_fields(LIST_ENDPOINT, fields), params)
            .await
    }

    /// Like [`Video::list`], continuing from the client's last seen cursor
    /// unless `params` already names one.
    ///
    /// Returns `Ok(None)` without sending anything once the latest paginated
    /// response reported `has_more` as false, so callers can loop with
    /// `while let Some(page) = ...`.
    pub async fn list_next_page<S: AsRef<str>>(
        &self,
        params: &Params,
        fields: &[S],
    ) -> Result<Option<ApiResponse>, Error> {
        let mut params = params.clone();
        if !params.contains_key(params::CURSOR) {
            if self.client.pages_exhausted() {
                tracing::debug!("no more video pages");
                return Ok(None);
            }
            if let Some(cursor) = self.client.cursor_next() {
                params.insert(params::CURSOR, cursor);
            }
        }
        self.list(&params, fields).await.map(Some)
    }

    /// Looks up videos owned by the authorized user by ID.
    pub async fn query<S: AsRef<str>, F: AsRef<str>>(
        &self,
        video_ids: &[S],
        fields: &[F],
    ) -> Result<ApiResponse, Error> {
        self.client
            .post(
                &endpoint_with_fields(QUERY_ENDPOINT, fields),
                &query_params(video_ids),
            )
            .await
    }
}

/// Appends `?fields=a,b,c` to `endpoint`, using [`DEFAULT_FIELDS`] when
/// `fields` is empty.
pub fn endpoint_with_fields<S: AsRef<str>>(endpoint: &str, fields: &[S]) -> String {
    let fields = if fields.is_empty() {
        join_fields(DEFAULT_FIELDS)
    } else {
        join_fields(fields)
    };
    format!("{}?{}={}", endpoint, params::FIELDS, fields)
}

/// `filters` is sent as a JSON-encoded string, not a nested object.
fn query_params<S: AsRef<str>>(video_ids: &[S]) -> Params {
    let ids: Vec<&str> = video_ids.iter().map(|id| id.as_ref()).collect();
    let mut filters = Map::new();
    filters.insert(params::VIDEO_IDS.to_string(), json!(ids));
    Params::new().with(params::FILTERS, Value::Object(filters).to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_fields_used_when_empty() {
        let endpoint = endpoint_with_fields::<&str>(QUERY_ENDPOINT, &[]);
        assert_eq!(
            endpoint,
            "/video/query/?fields=id,create_time,title,cover_image_url,share_url,\
             video_description,duration,height,width,embed_html,embed_link,like_count,\
             comment_count,share_count,view_count"
        );
    }

    #[test]
    fn explicit_fields_replace_defaults() {
        assert_eq!(
            endpoint_with_fields(LIST_ENDPOINT, &["id", "title"]),
            "/video/list/?fields=id,title"
        );
    }

    #[test]
    fn filters_are_a_json_string() {
        let params = query_params(&["123", "456"]);
        assert_eq!(
            params.get(params::FILTERS),
            Some(&json!(r#"{"video_ids":["123","456"]}"#))
        );
        assert_eq!(
            params.to_json_string(),
            r#"{"filters":"{\"video_ids\":[\"123\",\"456\"]}"}"#
        );
    }
}
