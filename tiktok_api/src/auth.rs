//! Login Kit authorization URLs and OAuth token management.
//!
//! Token endpoints take form-encoded bodies and are called without a bearer
//! token; the client key and secret travel in the body instead.

use std::fmt;

use crate::{
    client::Client,
    config::Config,
    params::{self, join_fields, Params},
    response::ApiResponse,
    Error,
};

pub const TOKEN_ENDPOINT: &str = "/oauth/token/";
pub const REVOKE_ENDPOINT: &str = "/oauth/revoke/";

/// `response_type` sent on the authorization URL.
pub const RESPONSE_TYPE_CODE: &str = "code";

/// OAuth flow selected by the `grant_type` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrantType {
    AuthorizationCode,
    ClientCredentials,
    RefreshToken,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::RefreshToken => "refresh_token",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// App credentials issued in the developer portal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_key: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_key: &str, client_secret: &str) -> Self {
        Self {
            client_key: client_key.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Reads `TIKTOK_CLIENT_KEY` and `TIKTOK_CLIENT_SECRET`.
    pub fn from_env() -> Option<Self> {
        let client_key = std::env::var("TIKTOK_CLIENT_KEY").ok()?;
        let client_secret = std::env::var("TIKTOK_CLIENT_SECRET").ok()?;
        Some(Self {
            client_key,
            client_secret,
        })
    }
}

/// Builds the URL that sends a user to the TikTok login and consent page.
///
/// Scopes are comma-joined; `state` is sent empty when not given.
pub fn authorization_url<S: AsRef<str>>(
    config: &Config,
    client_key: &str,
    redirect_uri: &str,
    scopes: &[S],
    state: Option<&str>,
) -> String {
    let query = Params::new()
        .with(params::CLIENT_KEY, client_key)
        .with(params::RESPONSE_TYPE, RESPONSE_TYPE_CODE)
        .with(params::REDIRECT_URI, redirect_uri)
        .with(params::SCOPE, join_fields(scopes))
        .with(params::STATE, state.unwrap_or(""))
        .to_query_string();
    format!(
        "{}/{}/auth/authorize/?{}",
        config.authorization_base_url, config.graph_version, query
    )
}

/// Token issuance, refresh, and revocation.
pub struct Authentication<'a> {
    client: &'a Client,
    credentials: ClientCredentials,
}

impl<'a> Authentication<'a> {
    pub fn new(client: &'a Client, credentials: ClientCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    pub fn authorization_url<S: AsRef<str>>(
        &self,
        redirect_uri: &str,
        scopes: &[S],
        state: Option<&str>,
    ) -> String {
        authorization_url(
            self.client.config(),
            &self.credentials.client_key,
            redirect_uri,
            scopes,
            state,
        )
    }

    /// Exchanges the code from the login redirect for a user access token.
    pub async fn access_token_from_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<ApiResponse, Error> {
        let params = self
            .credential_params()
            .with(params::CODE, code)
            .with(params::GRANT_TYPE, GrantType::AuthorizationCode.as_str())
            .with(params::REDIRECT_URI, redirect_uri);
        self.client.post_form(TOKEN_ENDPOINT, &params).await
    }

    /// Requests an app-level token.
    pub async fn client_access_token(&self) -> Result<ApiResponse, Error> {
        let params = self
            .credential_params()
            .with(params::GRANT_TYPE, GrantType::ClientCredentials.as_str());
        self.client.post_form(TOKEN_ENDPOINT, &params).await
    }

    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<ApiResponse, Error> {
        let params = self
            .credential_params()
            .with(params::GRANT_TYPE, GrantType::RefreshToken.as_str())
            .with(params::REFRESH_TOKEN, refresh_token);
        self.client.post_form(TOKEN_ENDPOINT, &params).await
    }

    pub async fn revoke_access_token(&self, token: &str) -> Result<ApiResponse, Error> {
        let params = self.credential_params().with(params::TOKEN, token);
        self.client.post_form(REVOKE_ENDPOINT, &params).await
    }

    fn credential_params(&self) -> Params {
        Params::new()
            .with(params::CLIENT_KEY, self.credentials.client_key.as_str())
            .with(params::CLIENT_SECRET, self.credentials.client_secret.as_str())
    }
}
