//! Per-factory set of registered action types

use std::collections::HashSet;

use crate::error::{ActionError, Result};

/// The set of fully-qualified types a factory has handed out
///
/// Owned by exactly one factory. Nothing is global, so two factories with the
/// same prefix never see each other's types.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashSet<String>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type, failing if it is already present
    pub fn register(&mut self, action_type: &str) -> Result<()> {
        if !self.types.insert(action_type.to_string()) {
            return Err(ActionError::DuplicateType {
                action_type: action_type.to_string(),
            });
        }
        Ok(())
    }

    /// Check if a type is registered
    pub fn contains(&self, action_type: &str) -> bool {
        self.types.contains(action_type)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate registered types in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|s| s.as_str())
    }
}
