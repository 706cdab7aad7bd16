//! Triage rules: model, admission checks, and the in-memory rule set.
//!
//! A rule pairs match criteria (exact sender, sender substring, subject
//! substring) with a destination folder and an action. Rules are admitted
//! through [`validate_rule`], collected in insertion order by [`RuleStore`],
//! and shipped to the backend as a `{ "rules": [...] }` payload. Order is
//! significant to the backend's first-match-wins executor, so the store
//! never reorders or deduplicates.

mod model;
mod store;
mod validation;

pub use model::{Rule, RuleAction, RulesPayload};
pub use store::RuleStore;
pub use validation::{ValidationError, validate_rule};
