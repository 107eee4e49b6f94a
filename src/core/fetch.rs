//! core/fetch.rs
//!
//! Getting the page markup, either over HTTP or from a saved copy on disk.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use tracing::info;

use super::error::{Result, TagError};

const USER_AGENT: &str = concat!("wikitag/", env!("CARGO_PKG_VERSION"));

/// `http://` / `https://` sources are fetched; anything else is a file path.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the document named by `source`.
pub fn load_document(source: &str) -> Result<String> {
    if is_url(source) {
        fetch_document(source)
    } else {
        let html = std::fs::read_to_string(Path::new(source))?;
        info!(path = source, bytes = html.len(), "read document from disk");
        Ok(html)
    }
}

/// GET `url` and return the body as text. One attempt, no retries.
pub fn fetch_document(url: &str) -> Result<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(5))
        .timeout_read(Duration::from_secs(15))
        .build();

    let response = agent
        .get(url)
        .set("User-Agent", USER_AGENT)
        .set("Accept", "text/html")
        .call()
        .map_err(|e| TagError::Fetch(format!("{url}: {e}")))?;

    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| TagError::Fetch(format!("{url}: failed to read body: {e}")))?;

    info!(url, bytes = body.len(), "fetched document");
    Ok(body)
}
