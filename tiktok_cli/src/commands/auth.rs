//! OAuth subcommands: authorization URL, token exchange, refresh, revoke.

use anyhow::{Context, Result};
use clap::Args;
use tiktok_api::{Authentication, Client, ClientCredentials};

use crate::output::print_response;

#[derive(Args)]
pub struct AuthUrlArgs {
    /// Redirect URI registered for the app
    #[arg(long)]
    pub redirect_uri: String,

    /// Scopes to request (repeat or comma-separate, e.g. user.info.basic,video.list)
    #[arg(long, value_delimiter = ',', required = true)]
    pub scope: Vec<String>,

    /// Opaque value echoed back on the redirect
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Args)]
pub struct TokenArgs {
    /// Authorization code from the redirect
    #[arg(long)]
    pub code: String,

    /// Redirect URI used to obtain the code
    #[arg(long)]
    pub redirect_uri: String,
}

#[derive(Args)]
pub struct RefreshArgs {
    #[arg(long)]
    pub refresh_token: String,
}

#[derive(Args)]
pub struct RevokeArgs {
    /// Access token to revoke
    #[arg(long)]
    pub token: String,
}

fn authentication(client: &Client) -> Result<Authentication<'_>> {
    let credentials = ClientCredentials::from_env()
        .context("TIKTOK_CLIENT_KEY and TIKTOK_CLIENT_SECRET must be set")?;
    Ok(client.authentication(credentials))
}

pub fn run_auth_url(args: &AuthUrlArgs, client: &Client) -> Result<()> {
    let url = authentication(client)?.authorization_url(
        &args.redirect_uri,
        args.scope.as_slice(),
        args.state.as_deref(),
    );
    println!("{}", url);
    Ok(())
}

pub async fn run_token(args: &TokenArgs, client: &Client) -> Result<()> {
    let resp = authentication(client)?
        .access_token_from_code(&args.code, &args.redirect_uri)
        .await?;
    print_response(&resp)
}

pub async fn run_client_token(client: &Client) -> Result<()> {
    let resp = authentication(client)?.client_access_token().await?;
    print_response(&resp)
}

pub async fn run_refresh(args: &RefreshArgs, client: &Client) -> Result<()> {
    let resp = authentication(client)?
        .refresh_access_token(&args.refresh_token)
        .await?;
    print_response(&resp)
}

pub async fn run_revoke(args: &RevokeArgs, client: &Client) -> Result<()> {
    let resp = authentication(client)?
        .revoke_access_token(&args.token)
        .await?;
    print_response(&resp)
}
