use anyhow::Result;
use serde::Serialize;
use tiktok_api::ApiResponse;

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints the body on stdout and pagination/status notes on stderr.
pub fn print_response(resp: &ApiResponse) -> Result<()> {
    tracing::debug!(status = resp.status(), url = %resp.debug.url, "response received");
    if let Some(note) = error_note(resp) {
        eprintln!("{}", note);
    }
    if let Some(cursor) = &resp.cursor_next {
        eprintln!("More results available, next cursor: {}", cursor);
    }
    if !resp.is_decoded() {
        eprintln!("Response body was not JSON (HTTP {})", resp.status());
        return Ok(());
    }
    print_json(&resp.body)
}

/// Summarizes TikTok's `error` envelope when it reports something other than `ok`.
fn error_note(resp: &ApiResponse) -> Option<String> {
    let error = resp.get("error")?;
    let code = error.get("code")?.as_str()?;
    if code == "ok" {
        return None;
    }
    let message = error.get("message").and_then(|m| m.as_str()).unwrap_or("");
    Some(format!("API error {} (HTTP {}): {}", code, resp.status(), message))
}
