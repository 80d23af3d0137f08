//! Error types for the API client.

use std::path::PathBuf;

/// Errors that can occur when making API requests.
///
/// Remote API errors are not represented here: TikTok's error envelope comes
/// back as a regular decoded body on [`crate::ApiResponse`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (connection, TLS, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The request URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The file to upload could not be opened or sized.
    #[error("Failed to read upload file {}", .path.display())]
    UploadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
