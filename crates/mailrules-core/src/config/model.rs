//! Connection settings model.

use serde::{Deserialize, Serialize};

/// Endpoint and credential values needed to address the backend.
///
/// The API key is held and transmitted in cleartext; protecting it is a
/// deployment concern, not this tool's. Persisted as camelCase JSON
/// (`baseUrl`, `foldersPath`, `applyPath`, `apiKey`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionConfig {
    /// Backend base URL, e.g. `https://automation.example.com`.
    pub base_url: String,
    /// Path of the folder-listing endpoint.
    pub folders_path: String,
    /// Path of the rule-submission endpoint.
    pub apply_path: String,
    /// API key spec: either a bare key or a `HeaderName value` pair.
    pub api_key: String,
}

impl ConnectionConfig {
    /// Default path of the folder-listing endpoint.
    pub const DEFAULT_FOLDERS_PATH: &'static str = "/webhook/powerapp/folders";
    /// Default path of the rule-submission endpoint.
    pub const DEFAULT_APPLY_PATH: &'static str = "/webhook/powerapp/apply";

    /// Create a config with default endpoint paths.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the API key spec.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Fill in default endpoint paths where empty.
    ///
    /// A record saved with blank paths loads the same as one with the
    /// paths absent.
    #[must_use]
    pub fn with_path_defaults(mut self) -> Self {
        if self.folders_path.is_empty() {
            self.folders_path = Self::DEFAULT_FOLDERS_PATH.to_string();
        }
        if self.apply_path.is_empty() {
            self.apply_path = Self::DEFAULT_APPLY_PATH.to_string();
        }
        self
    }

    /// Copy with surrounding whitespace trimmed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            base_url: self.base_url.trim().to_string(),
            folders_path: self.folders_path.trim().to_string(),
            apply_path: self.apply_path.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            folders_path: Self::DEFAULT_FOLDERS_PATH.to_string(),
            apply_path: Self::DEFAULT_APPLY_PATH.to_string(),
            api_key: String::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();
        assert!(config.base_url.is_empty());
        assert_eq!(config.folders_path, "/webhook/powerapp/folders");
        assert_eq!(config.apply_path, "/webhook/powerapp/apply");
    }

    #[test]
    fn test_persisted_keys_are_camel_case() {
        let config = ConnectionConfig::new("https://n.example.com").with_api_key("abc");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["baseUrl"], "https://n.example.com");
        assert_eq!(value["foldersPath"], "/webhook/powerapp/folders");
        assert_eq!(value["applyPath"], "/webhook/powerapp/apply");
        assert_eq!(value["apiKey"], "abc");
    }

    #[test]
    fn test_partial_record_fills_path_defaults() {
        let config: ConnectionConfig =
            serde_json::from_str(r#"{"baseUrl":"https://n.example.com"}"#).unwrap();
        assert_eq!(config.folders_path, "/webhook/powerapp/folders");
        assert_eq!(config.apply_path, "/webhook/powerapp/apply");
    }

    #[test]
    fn test_blank_paths_load_as_defaults() {
        let config = ConnectionConfig {
            folders_path: String::new(),
            apply_path: String::new(),
            ..ConnectionConfig::new("https://n.example.com")
        }
        .with_path_defaults();
        assert_eq!(config.folders_path, "/webhook/powerapp/folders");
        assert_eq!(config.apply_path, "/webhook/powerapp/apply");
    }

    #[test]
    fn test_trimmed() {
        let config = ConnectionConfig {
            base_url: "  https://n.example.com/ ".to_string(),
            api_key: " abc ".to_string(),
            ..ConnectionConfig::default()
        }
        .trimmed();
        assert_eq!(config.base_url, "https://n.example.com/");
        assert_eq!(config.api_key, "abc");
    }
}
