//! Rule-set submission.

use reqwest::Client;
use tracing::debug;

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::request::{build_headers, build_url};
use crate::response::prettify;
use crate::rule::RuleStore;

/// Outcome of an accepted submission.
#[derive(Debug, Clone)]
pub struct ApplyResponse {
    /// HTTP status the backend answered with (always 2xx here).
    pub status: u16,
    /// Response body, pretty-printed when it parses as JSON.
    pub body: String,
}

/// Submit the current rule set for server-side enforcement.
///
/// Sends the full ordered set as `{ "rules": [...] }` in one shot. The
/// response body is surfaced either way: a non-2xx answer comes back as
/// `Error::Http` carrying the same pretty-printed body a success would.
/// Enforcement semantics (first-match-wins, the actual move/copy) belong
/// to the backend.
///
/// # Errors
///
/// `Error::NoRules` on an empty store, in which case no request is sent;
/// otherwise `Error::EmptyBaseUrl`, `Error::Transport`, or `Error::Http`.
pub async fn apply_rules(
    client: &Client,
    config: &ConnectionConfig,
    store: &RuleStore,
) -> Result<ApplyResponse> {
    if store.is_empty() {
        return Err(Error::NoRules);
    }

    let url = build_url(&config.base_url, &config.apply_path)?;
    let mut request = client.post(&url).json(&store.payload());
    for (name, value) in build_headers(&config.api_key) {
        request = request.header(name, value);
    }

    debug!("Submitting {} rules to {url}", store.len());
    let response = request.send().await?;
    let status = response.status();
    let body = prettify(&response.text().await?);
    if status.is_success() {
        Ok(ApplyResponse {
            status: status.as_u16(),
            body,
        })
    } else {
        Err(Error::Http {
            status: status.as_u16(),
            body,
        })
    }
}
