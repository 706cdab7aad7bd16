//! # mailrules-core
//!
//! Core logic for configuring server-enforced email triage rules.
//!
//! Users build an ordered set of matching rules (exact sender, sender
//! substring, subject substring) that map to a destination folder and an
//! action (move/copy), fetch the folder directory from the automation
//! backend, and submit the whole set for server-side enforcement. The
//! backend applies rules first-match-wins; this crate only transmits the
//! ordered set, it never interprets it.
//!
//! This crate provides:
//! - Rule admission and in-memory rule-set management
//! - Connection settings with pluggable persistence
//! - Request construction (URL joining, auth-header derivation)
//! - Best-effort response pretty-printing
//! - The two backend operations: folder fetch and rule submission
//!
//! Presentation is out of scope: the crate is driven purely through its
//! programmatic API and is testable without any rendering surface.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod request;
pub mod response;
pub mod rule;
pub mod service;

pub use config::{ConfigStore, ConnectionConfig, JsonFileStore, MemoryStore, SettingsStore};
pub use error::{Error, Result};
pub use request::{build_headers, build_url};
pub use response::prettify;
pub use rule::{Rule, RuleAction, RuleStore, RulesPayload, ValidationError, validate_rule};
pub use service::{ApplyResponse, Folder, apply_rules, fetch_folders};
