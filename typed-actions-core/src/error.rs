//! Errors raised while building action creators

use thiserror::Error;

/// Errors produced by [`ActionCreatorFactory`](crate::ActionCreatorFactory)
///
/// These are construction-time failures. Invoking an already-built creator
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The fully-qualified type was already registered on this factory
    #[error("Duplicate action type: {action_type}")]
    DuplicateType {
        /// The offending fully-qualified type string
        action_type: String,
    },
}

/// Alias kept for callers matching on duplicate registration specifically
pub type DuplicateTypeError = ActionError;

/// Result alias for factory operations
pub type Result<T> = std::result::Result<T, ActionError>;

impl ActionError {
    /// The action type this error refers to
    pub fn action_type(&self) -> &str {
        match self {
            ActionError::DuplicateType { action_type } => action_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_type() {
        let err = ActionError::DuplicateType {
            action_type: "todos/ADD".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate action type: todos/ADD");
        assert_eq!(err.action_type(), "todos/ADD");
    }
}
