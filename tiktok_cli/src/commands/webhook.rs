use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tiktok_api::WebhookPayload;

use crate::output::print_json;

#[derive(Args)]
pub struct WebhookArgs {
    /// File holding the raw request body. Reads stdin when omitted
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the body as received instead of decoding it
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: &WebhookArgs) -> Result<()> {
    let payload = match &args.file {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            WebhookPayload::from_reader(file)?
        }
        None => WebhookPayload::from_reader(std::io::stdin().lock())?,
    };

    if args.raw {
        println!("{}", payload.raw());
        return Ok(());
    }

    match payload.json() {
        Some(json) => print_json(&json),
        None => {
            eprintln!("Payload is not JSON; printing it as received");
            println!("{}", payload.raw());
            Ok(())
        }
    }
}
