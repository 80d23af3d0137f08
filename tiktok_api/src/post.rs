//! Content posting: publish and draft initialization, photo posts, creator
//! info, publish status, and the raw video upload that follows an init call.

use crate::{
    client::Client,
    params::Params,
    request::{Method, UploadFile},
    response::ApiResponse,
    Error,
};

pub const ENDPOINT: &str = "/post/publish";

pub struct PostApi<'a> {
    client: &'a Client,
}

impl<'a> PostApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Initializes a direct post of a video.
    pub async fn publish(&self, params: &Params) -> Result<ApiResponse, Error> {
        self.post("/video/init/", params).await
    }

    /// Initializes an upload into the creator's inbox as a draft.
    pub async fn draft(&self, params: &Params) -> Result<ApiResponse, Error> {
        self.post("/inbox/video/init/", params).await
    }

    pub async fn photos(&self, params: &Params) -> Result<ApiResponse, Error> {
        self.post("/content/init/", params).await
    }

    pub async fn query_creator_info(&self, params: &Params) -> Result<ApiResponse, Error> {
        self.post("/creator_info/query/", params).await
    }

    pub async fn fetch_status(&self, params: &Params) -> Result<ApiResponse, Error> {
        self.post("/status/fetch/", params).await
    }

    /// PUTs the whole file to the `upload_url` returned by an init call, as a
    /// single chunk.
    pub async fn upload_file(&self, upload_url: &str, file: &UploadFile) -> Result<ApiResponse, Error> {
        let size = tokio::fs::metadata(&file.path)
            .await
            .map_err(|source| Error::UploadFile {
                path: file.path.clone(),
                source,
            })?
            .len();
        tracing::debug!(path = %file.path.display(), size, "uploading file");

        self.client
            .send_custom_request(
                upload_url,
                Method::Put,
                upload_headers(size, &file.mime_type),
                Some(file.clone()),
            )
            .await
    }

    async fn post(&self, path: &str, params: &Params) -> Result<ApiResponse, Error> {
        self.client
            .post(&format!("{}{}", ENDPOINT, path), params)
            .await
    }
}

/// `Content-Range` for a single chunk covering a whole file of `size` bytes.
///
/// An empty file renders as `bytes 0--1/0`; the API rejects it.
pub fn content_range(size: u64) -> String {
    format!("bytes 0-{}/{}", i128::from(size) - 1, size)
}

fn upload_headers(size: u64, mime_type: &str) -> Vec<(String, String)> {
    vec![
        ("Content-Range".to_string(), content_range(size)),
        ("Content-Length".to_string(), size.to_string()),
        ("Content-Type".to_string(), mime_type.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_covers_whole_file() {
        assert_eq!(content_range(1), "bytes 0-0/1");
        assert_eq!(content_range(10_000_000), "bytes 0-9999999/10000000");
        assert_eq!(content_range(0), "bytes 0--1/0");
    }

    #[test]
    fn upload_headers_from_size() {
        let headers = upload_headers(2048, "video/mp4");
        assert_eq!(
            headers,
            vec![
                ("Content-Range".to_string(), "bytes 0-2047/2048".to_string()),
                ("Content-Length".to_string(), "2048".to_string()),
                ("Content-Type".to_string(), "video/mp4".to_string()),
            ]
        );
    }
}
