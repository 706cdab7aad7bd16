//! Rule admission checks.

use super::model::Rule;

/// Validation error for a candidate rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No target folder selected.
    MissingFolder,
    /// All match criteria are empty.
    MissingCriteria,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingFolder => "A target folder is required",
            Self::MissingCriteria => "At least one match criterion is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingFolder => "targetFolder",
            Self::MissingCriteria => "criteria",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a candidate rule.
///
/// Pure function, no side effects. The folder check runs first, but both
/// conditions hold independently of each other.
///
/// # Errors
///
/// Returns `MissingFolder` when `target_folder` is empty, `MissingCriteria`
/// when no match criterion is set.
pub fn validate_rule(rule: &Rule) -> Result<(), ValidationError> {
    if rule.target_folder.is_empty() {
        return Err(ValidationError::MissingFolder);
    }
    if !rule.has_criteria() {
        return Err(ValidationError::MissingCriteria);
    }
    Ok(())
}
