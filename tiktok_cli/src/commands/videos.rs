//! Video list and query subcommands.

use anyhow::Result;
use clap::Args;
use tiktok_api::{params, Client, Params};

use crate::output::print_response;

#[derive(Args)]
pub struct VideosArgs {
    /// Results per page (the API allows up to 20)
    #[arg(long, default_value = "20")]
    pub max_count: i64,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<i64>,

    /// Fields to return (comma-separated). Defaults to the common video fields
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Video IDs to look up (repeat or comma-separate)
    #[arg(long = "id", value_delimiter = ',', required = true)]
    pub ids: Vec<String>,

    /// Fields to return (comma-separated). Defaults to the common video fields
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

pub async fn run_list(args: &VideosArgs, client: &Client) -> Result<()> {
    let mut params = Params::new().with(params::MAX_COUNT, args.max_count);
    if let Some(cursor) = args.cursor {
        params.insert(params::CURSOR, cursor);
    }
    let resp = client.video().list(&params, args.fields.as_slice()).await?;
    print_response(&resp)
}

pub async fn run_query(args: &QueryArgs, client: &Client) -> Result<()> {
    let resp = client.video().query(args.ids.as_slice(), args.fields.as_slice()).await?;
    print_response(&resp)
}
