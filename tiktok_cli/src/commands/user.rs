use anyhow::Result;
use clap::Args;
use tiktok_api::Client;

use crate::output::print_response;

#[derive(Args)]
pub struct UserArgs {
    /// Fields to return (comma-separated). Defaults to open_id, union_id, avatar_url, display_name
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

pub async fn run(args: &UserArgs, client: &Client) -> Result<()> {
    let resp = client.user().get_self_with_fields(args.fields.as_slice()).await?;
    print_response(&resp)
}
