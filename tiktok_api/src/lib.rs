//! Client for the TikTok Open API: OAuth tokens, user info, videos, content
//! posting, and webhook payloads.
//!
//! Every call returns the decoded JSON body as an [`ApiResponse`]; TikTok's
//! own `error` envelope is left for the caller to inspect.

pub mod auth;
mod client;
mod config;
mod errors;
pub mod fields;
pub mod params;
pub mod post;
mod request;
mod response;
mod transport;
pub mod user;
pub mod video;
pub mod webhooks;
pub use self::auth::{Authentication, ClientCredentials, GrantType};
pub use self::client::Client;
pub use self::config::{
    Config, CursorPolicy, BASE_AUTHORIZATION_URL, BASE_URL, DEFAULT_GRAPH_VERSION,
};
pub use self::errors::Error;
pub use self::params::Params;
pub use self::post::PostApi;
pub use self::request::{BodyEncoding, Method, Request, UploadFile};
pub use self::response::{ApiResponse, Diagnostics};
pub use self::transport::{Transport, TransportResponse};
pub use self::user::User;
pub use self::video::Video;
pub use self::webhooks::{WebhookEvent, WebhookPayload};
