//! Triage rule data models.

use serde::{Deserialize, Serialize};

/// What the backend does with a matching message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Move the message into the target folder.
    #[default]
    Move,
    /// Leave the original in place and put a copy in the target folder.
    Copy,
}

impl RuleAction {
    /// Parse from the wire string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "copy" => Self::Copy,
            _ => Self::Move,
        }
    }

    /// Convert to the wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Copy => "copy",
        }
    }
}

impl std::fmt::Display for RuleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RuleAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A single match-criteria + destination + action tuple.
///
/// Unset criteria are kept as empty strings, and the backend contract
/// expects every field present on the wire, so nothing here is `Option`.
/// Duplicates across a rule set are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    /// Exact sender address to match.
    pub from: String,
    /// Substring of the sender address to match.
    pub from_contains: String,
    /// Substring of the subject to match.
    pub subject_contains: String,
    /// Destination folder, referenced by name as reported by the backend.
    pub target_folder: String,
    /// Move or copy on match.
    pub action: RuleAction,
}

impl Rule {
    /// Create a rule targeting a folder, with no criteria set yet.
    #[must_use]
    pub fn new(target_folder: impl Into<String>, action: RuleAction) -> Self {
        Self {
            target_folder: target_folder.into(),
            action,
            ..Self::default()
        }
    }

    /// Sets the exact sender criterion.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Sets the sender substring criterion.
    #[must_use]
    pub fn with_from_contains(mut self, fragment: impl Into<String>) -> Self {
        self.from_contains = fragment.into();
        self
    }

    /// Sets the subject substring criterion.
    #[must_use]
    pub fn with_subject_contains(mut self, fragment: impl Into<String>) -> Self {
        self.subject_contains = fragment.into();
        self
    }

    /// Check whether any match criterion is set.
    #[must_use]
    pub fn has_criteria(&self) -> bool {
        !self.from.is_empty() || !self.from_contains.is_empty() || !self.subject_contains.is_empty()
    }
}

/// Borrowing wire payload for rule submission: `{ "rules": [...] }`.
#[derive(Debug, Serialize)]
pub struct RulesPayload<'a> {
    /// Rules in insertion order.
    pub rules: &'a [Rule],
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_action_roundtrip() {
        for action in [RuleAction::Move, RuleAction::Copy] {
            assert_eq!(RuleAction::parse(action.as_str()), action);
        }
    }

    #[test]
    fn test_rule_action_parse_defaults_to_move() {
        assert_eq!(RuleAction::parse("archive"), RuleAction::Move);
        assert_eq!(RuleAction::parse("COPY"), RuleAction::Copy);
    }

    #[test]
    fn test_rule_serializes_camel_case_with_empty_fields() {
        let rule = Rule::new("Important", RuleAction::Move).with_from_contains("boss@");
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "from": "",
                "fromContains": "boss@",
                "subjectContains": "",
                "targetFolder": "Important",
                "action": "move",
            })
        );
    }

    #[test]
    fn test_rule_deserializes_missing_fields_as_empty() {
        let rule: Rule =
            serde_json::from_str(r#"{"targetFolder":"Archive","action":"copy"}"#).unwrap();
        assert_eq!(rule.target_folder, "Archive");
        assert_eq!(rule.action, RuleAction::Copy);
        assert!(!rule.has_criteria());
    }

    #[test]
    fn test_has_criteria() {
        assert!(!Rule::new("Inbox", RuleAction::Move).has_criteria());
        assert!(
            Rule::new("Inbox", RuleAction::Move)
                .with_from("a@b.c")
                .has_criteria()
        );
        assert!(
            Rule::new("Inbox", RuleAction::Move)
                .with_subject_contains("invoice")
                .has_criteria()
        );
    }
}
