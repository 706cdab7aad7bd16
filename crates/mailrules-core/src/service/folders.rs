//! Folder directory fetch.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::request::{build_headers, build_url};

/// A named destination folder known to the backend.
///
/// Referenced by name only; the backend maps names to its own identifiers.
/// Transient: fetched per call, not cached beyond the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Folder {
    /// Folder name.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct FoldersResponse {
    // A body without a `folders` field means zero folders, not an error.
    #[serde(default)]
    folders: Vec<Folder>,
}

/// Fetch the destination folder directory.
///
/// Folders come back sorted ascending by name under a case-insensitive
/// comparison. An empty list is a valid outcome, distinct from a failed
/// fetch.
///
/// # Errors
///
/// `Error::EmptyBaseUrl` without a configured base URL, `Error::Transport`
/// on network failure, `Error::Http` on a non-success status, and
/// `Error::Json` when the body is not JSON.
pub async fn fetch_folders(client: &Client, config: &ConnectionConfig) -> Result<Vec<Folder>> {
    let url = build_url(&config.base_url, &config.folders_path)?;
    let mut request = client.get(&url);
    for (name, value) in build_headers(&config.api_key) {
        request = request.header(name, value);
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: FoldersResponse = serde_json::from_str(&body)?;
    let mut folders = parsed.folders;
    folders.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!("Fetched {} folders from {url}", folders.len());
    Ok(folders)
}
