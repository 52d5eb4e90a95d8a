//! Namespaced factory for action creators
//!
//! A factory hands out [`ActionCreator`]s whose types are qualified with an
//! optional prefix and, in strict mode, unique for the factory's lifetime.
//!
//! # Example
//!
//! ```
//! use typed_actions_core::{meta, ActionCreatorFactory, FactoryConfig};
//!
//! let mut factory = ActionCreatorFactory::from_config(
//!     FactoryConfig::new().prefix("todos").strict(true),
//! );
//!
//! let clear = factory.simple("CLEAR").unwrap();
//! let rename = factory.creator::<String>("RENAME", None).unwrap();
//! let reject = factory.creator_with_rule::<String>("REJECT", Some(meta! { "audit": true }), true).unwrap();
//!
//! assert_eq!(clear.call(()).action_type, "todos/CLEAR");
//! assert!(!rename.call("x".into()).error);
//! assert!(reject.call("y".into()).error);
//!
//! // Types are unique per factory
//! let err = factory.simple("CLEAR").unwrap_err();
//! assert_eq!(err.to_string(), "Duplicate action type: todos/CLEAR");
//! ```

use crate::action::Meta;
use crate::config::FactoryConfig;
use crate::creator::{ActionCreator, ErrorRule};
use crate::error::Result;
use crate::error_like::ErrorLike;
use crate::lifecycle::{AsyncActionCreators, Failure, Success};
use crate::registry::TypeRegistry;

/// Builds action creators under one namespace
///
/// Every creation method takes `&mut self`: the duplicate check and the
/// registration happen under one exclusive borrow, so no other creation can
/// interleave.
#[derive(Debug, Clone, Default)]
pub struct ActionCreatorFactory {
    config: FactoryConfig,
    registry: TypeRegistry,
}

impl ActionCreatorFactory {
    /// Create an unprefixed factory with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory whose types are namespaced as `prefix/label`
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::from_config(FactoryConfig::new().prefix(prefix))
    }

    /// Create a factory from an explicit configuration
    pub fn from_config(config: FactoryConfig) -> Self {
        Self {
            config,
            registry: TypeRegistry::new(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// The namespace prefix, if any
    pub fn prefix(&self) -> Option<&str> {
        self.config.prefix.as_deref()
    }

    /// Whether duplicate types are rejected
    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Qualify a label with this factory's prefix
    pub fn full_type(&self, label: &str) -> String {
        self.config.full_type(label)
    }

    /// Whether a fully-qualified type has been registered
    ///
    /// Always `false` in relaxed mode, where nothing is recorded.
    pub fn is_registered(&self, action_type: &str) -> bool {
        self.registry.contains(action_type)
    }

    /// All registered fully-qualified types, sorted
    pub fn registered_types(&self) -> Vec<&str> {
        let mut types: Vec<_> = self.registry.iter().collect();
        types.sort_unstable();
        types
    }

    /// Create a payload-free creator that never flags errors
    pub fn simple(&mut self, label: &str) -> Result<ActionCreator<()>> {
        self.base_creator(false.into(), label, None)
    }

    /// Create a creator using the default error rule
    ///
    /// Actions are flagged as errors when the payload is error-like at run
    /// time (see [`ErrorLike`]).
    pub fn creator<P>(&mut self, label: &str, common_meta: Option<Meta>) -> Result<ActionCreator<P>>
    where
        P: ErrorLike + 'static,
    {
        self.base_creator(ErrorRule::error_like(), label, common_meta)
    }

    /// Create a creator with an explicit error rule
    ///
    /// `rule` is either a fixed flag (`true` / `false`) or an
    /// [`ErrorRule::predicate`].
    pub fn creator_with_rule<P>(
        &mut self,
        label: &str,
        common_meta: Option<Meta>,
        rule: impl Into<ErrorRule<P>>,
    ) -> Result<ActionCreator<P>> {
        self.base_creator(rule.into(), label, common_meta)
    }

    /// Create the started / done / failed creators for an async operation
    ///
    /// Registers `LABEL_STARTED`, `LABEL_DONE` and `LABEL_FAILED`. The bare
    /// label is not registered. If any of the three collides, nothing from
    /// this call is registered.
    pub fn async_creators<P, R, E>(
        &mut self,
        label: &str,
        common_meta: Option<Meta>,
    ) -> Result<AsyncActionCreators<P, R, E>> {
        let started_label = format!("{}_STARTED", label);
        let done_label = format!("{}_DONE", label);
        let failed_label = format!("{}_FAILED", label);

        if self.config.strict {
            let mut staged = self.registry.clone();
            for suffixed in [&started_label, &done_label, &failed_label] {
                staged.register(&self.full_type(suffixed))?;
            }
        }

        let started = self.base_creator(false.into(), &started_label, common_meta.clone())?;
        let done = self.base_creator::<Success<P, R>>(false.into(), &done_label, common_meta.clone())?;
        let failed = self.base_creator::<Failure<P, E>>(true.into(), &failed_label, common_meta)?;

        Ok(AsyncActionCreators {
            action_type: self.full_type(label),
            started,
            done,
            failed,
        })
    }

    fn base_creator<P>(
        &mut self,
        rule: ErrorRule<P>,
        label: &str,
        common_meta: Option<Meta>,
    ) -> Result<ActionCreator<P>> {
        let full_type = self.full_type(label);

        if self.config.strict {
            self.registry.register(&full_type)?;
            tracing::debug!(action_type = %full_type, "Registered action type");
        }

        tracing::trace!(
            action_type = %full_type,
            strict = self.config.strict,
            "Created action creator"
        );

        Ok(ActionCreator::new(full_type, common_meta, rule))
    }
}
