//! In-memory ordered rule collection.

use tracing::debug;

use super::model::{Rule, RulesPayload};
use super::validation::{ValidationError, validate_rule};
use crate::error::{Error, Result};

/// Ordered collection of accepted rules.
///
/// Insertion order is preserved and transmitted as-is; the backend executes
/// first-match-wins, so order matters downstream even though this store
/// never interprets it. The set is session-scoped by design and is never
/// persisted.
#[derive(Debug, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Admit a rule, appending it to the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns the validation error without mutating the store when the
    /// candidate fails admission.
    pub fn add(&mut self, rule: Rule) -> std::result::Result<(), ValidationError> {
        validate_rule(&rule)?;
        debug!("Accepted rule targeting folder {:?}", rule.target_folder);
        self.rules.push(rule);
        Ok(())
    }

    /// Remove and return the rule at `index`, shifting later rules left.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` for an index outside `[0, len)`;
    /// the store is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Rule> {
        if index >= self.rules.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    /// Remove all rules unconditionally.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Read-only view of the current sequence.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the store holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Borrowing submission payload: `{ "rules": [...] }`.
    #[must_use]
    pub fn payload(&self) -> RulesPayload<'_> {
        RulesPayload { rules: &self.rules }
    }

    /// Pretty-printed payload for display alongside the rule table.
    #[must_use]
    pub fn payload_json(&self) -> String {
        serde_json::to_string_pretty(&self.payload()).unwrap_or_else(|_| String::from("{}"))
    }
}
