//! Action creators bound to one registered type

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::action::{merge_meta, Action, Meta};
use crate::error_like::ErrorLike;

/// Decides the `error` flag of each action a creator produces
pub enum ErrorRule<P> {
    /// Same flag for every invocation
    Fixed(bool),
    /// Flag computed from the payload on each invocation
    Predicate(Arc<dyn Fn(&P) -> bool + Send + Sync>),
}

impl<P> ErrorRule<P> {
    /// Rule computed from the payload
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        ErrorRule::Predicate(Arc::new(f))
    }

    /// Default rule: the payload is a failure iff it looks like an error
    ///
    /// This is a shape test via [`ErrorLike`]. Prefer [`ErrorRule::Fixed`] or
    /// an explicit predicate when the payload type is known.
    pub fn error_like() -> Self
    where
        P: ErrorLike + 'static,
    {
        ErrorRule::predicate(|payload: &P| payload.is_error_like())
    }

    /// Evaluate the rule for one payload
    pub fn evaluate(&self, payload: &P) -> bool {
        match self {
            ErrorRule::Fixed(flag) => *flag,
            ErrorRule::Predicate(f) => f(payload),
        }
    }
}

impl<P> Clone for ErrorRule<P> {
    fn clone(&self) -> Self {
        match self {
            ErrorRule::Fixed(flag) => ErrorRule::Fixed(*flag),
            ErrorRule::Predicate(f) => ErrorRule::Predicate(Arc::clone(f)),
        }
    }
}

impl<P> fmt::Debug for ErrorRule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorRule::Fixed(flag) => f.debug_tuple("Fixed").field(flag).finish(),
            ErrorRule::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<P> From<bool> for ErrorRule<P> {
    fn from(flag: bool) -> Self {
        ErrorRule::Fixed(flag)
    }
}

/// Builds [`Action`] envelopes of one fixed type
///
/// Obtained from [`ActionCreatorFactory`](crate::ActionCreatorFactory), which
/// guarantees the type is unique among the creators it built. Creators are
/// cheap to clone and immutable once built.
///
/// ```
/// use typed_actions_core::{meta, ActionCreatorFactory};
///
/// let mut factory = ActionCreatorFactory::with_prefix("todos");
/// let add = factory.creator::<String>("ADD", Some(meta! { "source": "ui" })).unwrap();
///
/// let action = add.call("buy milk".to_string());
/// assert_eq!(action.action_type, "todos/ADD");
/// assert_eq!(add.action_type(), "todos/ADD");
/// assert!(!action.error);
/// ```
pub struct ActionCreator<P> {
    action_type: Arc<str>,
    common_meta: Arc<Meta>,
    rule: ErrorRule<P>,
}

impl<P> ActionCreator<P> {
    pub(crate) fn new(action_type: String, common_meta: Option<Meta>, rule: ErrorRule<P>) -> Self {
        Self {
            action_type: action_type.into(),
            common_meta: Arc::new(common_meta.unwrap_or_default()),
            rule,
        }
    }

    /// The fully-qualified type stamped on every action
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Metadata merged into every action
    pub fn common_meta(&self) -> &Meta {
        &self.common_meta
    }

    /// The rule deciding the `error` flag
    pub fn rule(&self) -> &ErrorRule<P> {
        &self.rule
    }

    /// Build an action carrying `payload` and the common meta
    pub fn call(&self, payload: P) -> Action<P> {
        self.build(payload, None)
    }

    /// Build an action, merging `meta` over the common meta
    pub fn call_with_meta(&self, payload: P, meta: Meta) -> Action<P> {
        self.build(payload, Some(&meta))
    }

    pub(crate) fn build(&self, payload: P, extra: Option<&Meta>) -> Action<P> {
        let error = self.rule.evaluate(&payload);
        tracing::trace!(action_type = %self.action_type, error, "Creating action");
        Action {
            action_type: self.action_type.to_string(),
            payload,
            meta: merge_meta(&self.common_meta, extra),
            error,
        }
    }

    /// True iff `action` carries this creator's type
    pub fn matches<A: crate::AnyAction + ?Sized>(&self, action: &A) -> bool {
        crate::is_type(action, self)
    }
}

impl<P: DeserializeOwned> ActionCreator<P> {
    /// Narrow an erased action to this creator's payload type
    ///
    /// Returns `None` if the type doesn't match, otherwise the decoded action
    /// (or the decode error if the payload has the wrong shape).
    pub fn narrow(&self, action: &Action<Value>) -> Option<serde_json::Result<Action<P>>> {
        if self.matches(action) {
            Some(action.decode())
        } else {
            None
        }
    }
}

impl<P> Clone for ActionCreator<P> {
    fn clone(&self) -> Self {
        Self {
            action_type: Arc::clone(&self.action_type),
            common_meta: Arc::clone(&self.common_meta),
            rule: self.rule.clone(),
        }
    }
}

impl<P> fmt::Debug for ActionCreator<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type)
            .field("common_meta", &self.common_meta)
            .field("rule", &self.rule)
            .finish()
    }
}
