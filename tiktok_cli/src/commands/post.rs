//! Content posting subcommands.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::json;
use tiktok_api::{fields, Client, Params, UploadFile};

use crate::output::{print_json, print_response};

#[derive(Args)]
pub struct StatusArgs {
    /// publish_id returned by an init call
    #[arg(long)]
    pub publish_id: String,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Video file to upload
    #[arg(long)]
    pub file: PathBuf,

    /// MIME type of the file
    #[arg(long, default_value = "video/mp4")]
    pub mime_type: String,

    /// Send to the creator's inbox as a draft instead of posting directly
    #[arg(long)]
    pub draft: bool,

    /// Caption for a direct post
    #[arg(long)]
    pub title: Option<String>,

    /// Privacy level for a direct post (e.g. SELF_ONLY, PUBLIC_TO_EVERYONE)
    #[arg(long, default_value = "SELF_ONLY")]
    pub privacy_level: String,
}

pub async fn run_creator_info(client: &Client) -> Result<()> {
    let resp = client.post_api().query_creator_info(&Params::new()).await?;
    print_response(&resp)
}

pub async fn run_status(args: &StatusArgs, client: &Client) -> Result<()> {
    let params = Params::new().with(fields::PUBLISH_ID, args.publish_id.as_str());
    let resp = client.post_api().fetch_status(&params).await?;
    print_response(&resp)
}

pub async fn run_upload(args: &UploadArgs, client: &Client) -> Result<()> {
    let size = std::fs::metadata(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?
        .len();
    let mut params = Params::new().with(fields::SOURCE_INFO, source_info(size));

    let posts = client.post_api();
    let init = if args.draft {
        posts.draft(&params).await?
    } else {
        params.insert(fields::POST_INFO, post_info(args));
        posts.publish(&params).await?
    };

    let Some(upload_url) = init["data"][fields::UPLOAD_URL].as_str() else {
        print_response(&init)?;
        bail!("Init call returned no upload_url");
    };
    eprintln!(
        "Uploading {} bytes for publish_id {}",
        size, init["data"][fields::PUBLISH_ID]
    );

    let upload = posts
        .upload_file(upload_url, &UploadFile::new(&args.file, &args.mime_type))
        .await?;
    eprintln!("Upload finished with HTTP {}", upload.status());
    if upload.is_decoded() {
        print_response(&upload)?;
    }

    print_json(&init.body)
}

/// The whole file goes up as one chunk.
fn source_info(size: u64) -> serde_json::Value {
    json!({
        "source": "FILE_UPLOAD",
        "video_size": size,
        "chunk_size": size,
        "total_chunk_count": 1,
    })
}

fn post_info(args: &UploadArgs) -> serde_json::Value {
    let mut info = json!({ "privacy_level": args.privacy_level });
    if let Some(title) = &args.title {
        info[fields::TITLE] = json!(title);
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_info_is_single_chunk() {
        assert_eq!(
            source_info(4096),
            json!({
                "source": "FILE_UPLOAD",
                "video_size": 4096,
                "chunk_size": 4096,
                "total_chunk_count": 1
            })
        );
    }

    #[test]
    fn post_info_includes_optional_title() {
        let mut args = UploadArgs {
            file: PathBuf::from("clip.mp4"),
            mime_type: "video/mp4".to_string(),
            draft: false,
            title: None,
            privacy_level: "SELF_ONLY".to_string(),
        };
        assert_eq!(post_info(&args), json!({"privacy_level": "SELF_ONLY"}));

        args.title = Some("hello".to_string());
        assert_eq!(
            post_info(&args),
            json!({"privacy_level": "SELF_ONLY", "title": "hello"})
        );
    }
}
