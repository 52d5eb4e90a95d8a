//! Factory configuration

/// Configuration for an [`ActionCreatorFactory`](crate::ActionCreatorFactory)
///
/// `strict` controls duplicate-type detection. When it is off, the registry
/// is never consulted and duplicate types are silently accepted, trading the
/// check for zero bookkeeping. The default follows the build profile: strict
/// in debug builds, relaxed in release builds.
///
/// # Example
/// ```
/// use typed_actions_core::FactoryConfig;
///
/// let config = FactoryConfig::new().prefix("todos").strict(true);
/// assert_eq!(config.prefix.as_deref(), Some("todos"));
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConfig {
    /// Namespace prepended to every label as `prefix/label`
    pub prefix: Option<String>,
    /// Reject duplicate types at construction time
    pub strict: bool,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            strict: cfg!(debug_assertions),
        }
    }
}

impl FactoryConfig {
    /// Create a config with default settings (no prefix, profile-driven strictness)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace prefix
    ///
    /// An empty prefix is treated as no prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Remove the namespace prefix
    pub fn unprefixed(mut self) -> Self {
        self.prefix = None;
        self
    }

    /// Enable or disable duplicate-type detection
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Qualify a label with this config's prefix
    pub fn full_type(&self, label: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}/{}", prefix, label),
            None => label.to_string(),
        }
    }
}
