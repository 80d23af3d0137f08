//! User info lookup.

use crate::{
    client::Client,
    fields,
    params::{self, join_fields, Params},
    response::ApiResponse,
    Error,
};

pub const INFO_ENDPOINT: &str = "/user/info/";

/// Fields requested by [`User::get_self_with_fields`] when none are given.
pub const DEFAULT_FIELDS: &[&str] = &[
    fields::OPEN_ID,
    fields::UNION_ID,
    fields::AVATAR_URL,
    fields::DISPLAY_NAME,
];

pub struct User<'a> {
    client: &'a Client,
}

impl<'a> User<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the authorized user's profile. `params` should carry `fields`.
    pub async fn get_self(&self, params: &Params) -> Result<ApiResponse, Error> {
        self.client.get(INFO_ENDPOINT, params).await
    }

    /// Fetches the authorized user's profile with the given fields, or
    /// [`DEFAULT_FIELDS`] when `fields` is empty.
    pub async fn get_self_with_fields<S: AsRef<str>>(
        &self,
        fields: &[S],
    ) -> Result<ApiResponse, Error> {
        let fields = if fields.is_empty() {
            join_fields(DEFAULT_FIELDS)
        } else {
            join_fields(fields)
        };
        self.get_self(&Params::new().with(params::FIELDS, fields))
            .await
    }
}
