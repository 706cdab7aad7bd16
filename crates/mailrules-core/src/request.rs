//! Request construction: URL joining and auth-header derivation.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Header name used when the key spec carries no explicit name.
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Join the backend base URL and an endpoint path.
///
/// All trailing slashes are stripped from the base and the path is appended
/// verbatim, so `"http://x///"` + `"/a"` gives `"http://x/a"`.
///
/// # Errors
///
/// Returns `Error::EmptyBaseUrl` when nothing remains of the base after
/// trimming whitespace and trailing slashes.
pub fn build_url(base: &str, path: &str) -> Result<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::EmptyBaseUrl);
    }
    Ok(format!("{base}{path}"))
}

/// Derive auth headers from the API key spec.
///
/// One config field encodes either a bare key or a fully qualified header:
/// - empty spec: no headers;
/// - `Name value...`: header `Name` with the remainder rejoined by single
///   spaces (covers bearer tokens, e.g. `Authorization Bearer abc`);
/// - a bare token: the value of [`DEFAULT_API_KEY_HEADER`].
///
/// The key travels in cleartext by design.
#[must_use]
pub fn build_headers(api_key_spec: &str) -> HashMap<String, String> {
    let spec = api_key_spec.trim();
    let mut headers = HashMap::new();
    if spec.is_empty() {
        return headers;
    }
    let mut tokens = spec.split_whitespace();
    if let Some(name) = tokens.next() {
        let value = tokens.collect::<Vec<_>>().join(" ");
        if value.is_empty() {
            headers.insert(DEFAULT_API_KEY_HEADER.to_string(), spec.to_string());
        } else {
            headers.insert(name.to_string(), value);
        }
    }
    headers
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_strips_trailing_slashes() {
        assert_eq!(build_url("http://x///", "/a").unwrap(), "http://x/a");
        assert_eq!(build_url("http://x", "/a").unwrap(), "http://x/a");
    }

    #[test]
    fn test_build_url_trims_base() {
        assert_eq!(
            build_url("  https://n.example.com/ ", "/webhook").unwrap(),
            "https://n.example.com/webhook"
        );
    }

    #[test]
    fn test_build_url_path_used_verbatim() {
        assert_eq!(build_url("http://x", "a//b/").unwrap(), "http://xa//b/");
    }

    #[test]
    fn test_build_url_empty_base() {
        assert!(matches!(build_url("", "/a"), Err(Error::EmptyBaseUrl)));
        assert!(matches!(build_url("   ", "/a"), Err(Error::EmptyBaseUrl)));
        assert!(matches!(build_url("///", "/a"), Err(Error::EmptyBaseUrl)));
    }

    #[test]
    fn test_build_headers_named_pair() {
        let headers = build_headers("Bearer abc123");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Bearer"], "abc123");
    }

    #[test]
    fn test_build_headers_bare_key() {
        let headers = build_headers("abc123");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["X-API-Key"], "abc123");
    }

    #[test]
    fn test_build_headers_empty() {
        assert!(build_headers("").is_empty());
        assert!(build_headers("   ").is_empty());
    }

    #[test]
    fn test_build_headers_remainder_rejoined_with_single_spaces() {
        let headers = build_headers("Authorization Bearer   abc  123");
        assert_eq!(headers["Authorization"], "Bearer abc 123");
    }
}
