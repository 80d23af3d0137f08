mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tiktok_api::{Client, Config};

#[derive(Parser)]
#[command(name = "tiktok")]
#[command(about = "Call the TikTok Open API from the command line")]
struct Cli {
    /// Access token (defaults to TIKTOK_ACCESS_TOKEN)
    #[arg(long, global = true)]
    access_token: Option<String>,

    /// API version path segment (defaults to TIKTOK_GRAPH_VERSION or v2)
    #[arg(long, global = true)]
    graph_version: Option<String>,

    /// API host, e.g. a local mock server (defaults to TIKTOK_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Login Kit authorization URL
    AuthUrl(commands::auth::AuthUrlArgs),
    /// Exchange an authorization code for a user access token
    Token(commands::auth::TokenArgs),
    /// Request an app-level client access token
    ClientToken,
    /// Refresh a user access token
    Refresh(commands::auth::RefreshArgs),
    /// Revoke a user access token
    Revoke(commands::auth::RevokeArgs),
    /// Show the authorized user's profile
    User(commands::user::UserArgs),
    /// List the authorized user's videos
    Videos(commands::videos::VideosArgs),
    /// Look up videos by ID
    Query(commands::videos::QueryArgs),
    /// Show what the authorized creator is allowed to post
    CreatorInfo,
    /// Check the status of a publish
    Status(commands::post::StatusArgs),
    /// Initialize a post and upload a video file
    Upload(commands::post::UploadArgs),
    /// Decode a webhook payload from a file or stdin
    Webhook(commands::webhook::WebhookArgs),
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(token) = &self.access_token {
            config = config.with_access_token(token);
        }
        if let Some(version) = &self.graph_version {
            config = config.with_graph_version(version);
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("tiktok=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::from_config(cli.config());

    match &cli.command {
        Commands::AuthUrl(args) => commands::auth::run_auth_url(args, &client)?,
        Commands::Token(args) => commands::auth::run_token(args, &client).await?,
        Commands::ClientToken => commands::auth::run_client_token(&client).await?,
        Commands::Refresh(args) => commands::auth::run_refresh(args, &client).await?,
        Commands::Revoke(args) => commands::auth::run_revoke(args, &client).await?,
        Commands::User(args) => commands::user::run(args, &client).await?,
        Commands::Videos(args) => commands::videos::run_list(args, &client).await?,
        Commands::Query(args) => commands::videos::run_query(args, &client).await?,
        Commands::CreatorInfo => commands::post::run_creator_info(&client).await?,
        Commands::Status(args) => commands::post::run_status(args, &client).await?,
        Commands::Upload(args) => commands::post::run_upload(args, &client).await?,
        Commands::Webhook(args) => commands::webhook::run(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_overrides_apply_to_config() {
        let cli = Cli::parse_from([
            "tiktok",
            "--access-token",
            "act.cli",
            "--graph-version",
            "v9",
            "--base-url",
            "http://localhost:8080",
            "creator-info",
        ]);
        let config = cli.config();
        assert_eq!(config.access_token, "act.cli");
        assert_eq!(config.graph_version, "v9");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
