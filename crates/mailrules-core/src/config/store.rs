//! Connection settings persistence.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use super::model::ConnectionConfig;
use crate::error::Result;

/// Fixed key the connection record is stored under.
pub const CONFIG_KEY: &str = "connection";

/// Opaque persistent key-value store for settings.
pub trait SettingsStore {
    /// Get the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the backing store cannot be read.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// The write must be all-or-nothing: a failure leaves the prior value
    /// intact.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the backing store cannot be written.
    fn put(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Load/save of connection settings against a settings backend.
#[derive(Debug)]
pub struct ConfigStore<S> {
    backend: S,
}

impl<S: SettingsStore> ConfigStore<S> {
    /// Create a store over the given backend.
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Persist the connection settings, trimming surrounding whitespace.
    ///
    /// Overwrites any prior record.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` when serialization fails, `Error::Io` when the
    /// backend rejects the write; the prior record survives either.
    pub fn save(&self, config: &ConnectionConfig) -> Result<()> {
        let record = serde_json::to_string(&config.trimmed())?;
        self.backend.put(CONFIG_KEY, &record)?;
        debug!("Saved connection settings");
        Ok(())
    }

    /// Load the last-saved connection settings.
    ///
    /// A missing, unreadable, or malformed record yields defaults; loading
    /// never fails.
    pub fn load(&self) -> ConnectionConfig {
        let raw = match self.backend.get(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ConnectionConfig::default(),
            Err(e) => {
                warn!("Failed to read connection settings: {e}");
                return ConnectionConfig::default();
            }
        };
        match serde_json::from_str::<ConnectionConfig>(&raw) {
            Ok(config) => config.with_path_defaults(),
            Err(e) => {
                warn!("Malformed connection record, using defaults: {e}");
                ConnectionConfig::default()
            }
        }
    }
}

/// File-backed settings store: one JSON object per file.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so an interrupted write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform config directory,
    /// `<config_dir>/mailrules/settings.json`.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform exposes no config directory.
    pub fn default_location() -> io::Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        Ok(Self::new(dir.join("mailrules").join("settings.json")))
    }

    fn read_map(&self) -> io::Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            // A corrupt file reads as empty; the next put rewrites it whole.
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e),
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> io::Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&map).map_err(io::Error::other)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, data)?;
        std::fs::rename(&tmp, &self.path)
    }
}

/// In-memory settings store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| io::Error::other("settings store poisoned"))
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> io::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
