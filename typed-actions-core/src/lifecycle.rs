//! Started / done / failed creators for async operations
//!
//! Async work is modeled as three actions sharing one base label:
//!
//! 1. `LABEL_STARTED` carries the request params
//! 2. `LABEL_DONE` carries `{ params, result }`
//! 3. `LABEL_FAILED` carries `{ params, error }` and is always flagged as an error
//!
//! ```
//! use typed_actions_core::{ActionCreatorFactory, AnyAction, FactoryConfig};
//!
//! let mut factory = ActionCreatorFactory::from_config(FactoryConfig::new().prefix("users").strict(true));
//! let fetch = factory.async_creators::<u32, String, String>("FETCH", None).unwrap();
//!
//! let started = fetch.started.call(7);
//! assert_eq!(started.action_type, "users/FETCH_STARTED");
//!
//! // The caller decides which branch it is in
//! let outcome: Result<String, String> = Ok("ada".into());
//! let completed = fetch.complete(7, outcome, None);
//! assert_eq!(completed.action_type(), "users/FETCH_DONE");
//! assert!(!completed.is_error());
//! ```

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::action::{Action, AnyAction, Meta};
use crate::creator::ActionCreator;
use crate::error_like::ErrorLike;

/// Payload of a `_DONE` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Success<P, R> {
    pub params: P,
    pub result: R,
}

/// Payload of a `_FAILED` action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure<P, E> {
    pub params: P,
    pub error: E,
}

/// Input to [`AsyncActionCreators::complete_inferred`]
///
/// `data` holds either a result or an error; which one is decided by
/// inspecting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion<P, D> {
    pub params: P,
    pub data: D,
}

/// The action produced when an async operation finishes
///
/// Serializes as the plain wrapped action. Deserializing picks the variant
/// from the `error` flag, never from the payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Completed<P, R, E> {
    Done(Action<Success<P, R>>),
    Failed(Action<Failure<P, E>>),
}

impl<'de, P, R, E> Deserialize<'de> for Completed<P, R, E>
where
    P: DeserializeOwned,
    R: DeserializeOwned,
    E: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let action = Action::<Value>::deserialize(deserializer)?;
        if action.error {
            action.decode().map(Completed::Failed).map_err(D::Error::custom)
        } else {
            action.decode().map(Completed::Done).map_err(D::Error::custom)
        }
    }
}

impl<P, R, E> Completed<P, R, E> {
    /// Whether the operation succeeded
    pub fn is_done(&self) -> bool {
        matches!(self, Completed::Done(_))
    }

    /// The `_DONE` action, if this is one
    pub fn into_done(self) -> Option<Action<Success<P, R>>> {
        match self {
            Completed::Done(action) => Some(action),
            Completed::Failed(_) => None,
        }
    }

    /// The `_FAILED` action, if this is one
    pub fn into_failed(self) -> Option<Action<Failure<P, E>>> {
        match self {
            Completed::Done(_) => None,
            Completed::Failed(action) => Some(action),
        }
    }

    /// Meta of the wrapped action
    pub fn meta(&self) -> &Meta {
        match self {
            Completed::Done(action) => &action.meta,
            Completed::Failed(action) => &action.meta,
        }
    }
}

impl<P, R, E> AnyAction for Completed<P, R, E> {
    fn action_type(&self) -> &str {
        match self {
            Completed::Done(action) => &action.action_type,
            Completed::Failed(action) => &action.action_type,
        }
    }

    fn is_error(&self) -> bool {
        match self {
            Completed::Done(action) => action.error,
            Completed::Failed(action) => action.error,
        }
    }
}

/// Creators for one async operation
///
/// Built by [`ActionCreatorFactory::async_creators`](crate::ActionCreatorFactory::async_creators).
/// `action_type` is the qualified base label; it is informational only and
/// no creator produces it.
pub struct AsyncActionCreators<P, R, E> {
    pub action_type: String,
    pub started: ActionCreator<P>,
    pub done: ActionCreator<Success<P, R>>,
    pub failed: ActionCreator<Failure<P, E>>,
}

impl<P, R, E> AsyncActionCreators<P, R, E> {
    /// Finish the operation with an explicit outcome
    ///
    /// `Ok` routes to `done`, `Err` routes to `failed`.
    pub fn complete(&self, params: P, outcome: Result<R, E>, meta: Option<Meta>) -> Completed<P, R, E> {
        let completed = match outcome {
            Ok(result) => Completed::Done(self.done.build(Success { params, result }, meta.as_ref())),
            Err(error) => Completed::Failed(self.failed.build(Failure { params, error }, meta.as_ref())),
        };
        let outcome = if completed.is_done() { "done" } else { "failed" };
        tracing::debug!(action_type = %self.action_type, outcome, "Completed async action");
        completed
    }

    /// Whether `action` was produced by any of the three creators
    pub fn matches<A: AnyAction + ?Sized>(&self, action: &A) -> bool {
        self.started.matches(action) || self.done.matches(action) || self.failed.matches(action)
    }
}

impl<P, T: ErrorLike> AsyncActionCreators<P, T, T> {
    /// Finish the operation, inferring the outcome from `data`
    ///
    /// Routes to `failed` when `data` is error-like, to `done` otherwise.
    ///
    /// The check looks at the value, not at which branch produced it. If a
    /// legitimate result can itself be error-like it will be reported as a
    /// failure, so only use this when results and errors are distinguishable
    /// by [`ErrorLike`]. Prefer [`complete`](Self::complete).
    pub fn complete_inferred(&self, completion: Completion<P, T>, meta: Option<Meta>) -> Completed<P, T, T> {
        let Completion { params, data } = completion;
        let outcome = if data.is_error_like() { Err(data) } else { Ok(data) };
        self.complete(params, outcome, meta)
    }
}

impl<P, R, E> Clone for AsyncActionCreators<P, R, E> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            started: self.started.clone(),
            done: self.done.clone(),
            failed: self.failed.clone(),
        }
    }
}

impl<P, R, E> std::fmt::Debug for AsyncActionCreators<P, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncActionCreators")
            .field("action_type", &self.action_type)
            .field("started", &self.started.action_type())
            .field("done", &self.done.action_type())
            .field("failed", &self.failed.action_type())
            .finish()
    }
}
