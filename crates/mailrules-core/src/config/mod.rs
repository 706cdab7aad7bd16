//! Connection settings: model and persistence.
//!
//! Settings are one JSON record under a fixed key in an opaque key-value
//! backend. The backend is a trait so the presentation layer can supply
//! whatever storage it has; file-backed and in-memory implementations are
//! provided.

mod model;
mod store;

pub use model::ConnectionConfig;
pub use store::{CONFIG_KEY, ConfigStore, JsonFileStore, MemoryStore, SettingsStore};
