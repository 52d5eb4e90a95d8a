//! Test utilities for code that produces actions
//!
//! - [`ActionRecorder`]: collects erased actions and drains them by type
//! - Assertion macros for checking which types were produced
//!
//! # Example
//!
//! ```
//! use typed_actions_core::testing::ActionRecorder;
//! use typed_actions_core::{assert_type_emitted, ActionCreatorFactory, FactoryConfig};
//!
//! let mut factory = ActionCreatorFactory::from_config(FactoryConfig::new().strict(true));
//! let add = factory.creator::<u32>("ADD", None).unwrap();
//! let clear = factory.simple("CLEAR").unwrap();
//!
//! let mut recorder = ActionRecorder::new();
//! recorder.record(&add.call(1)).unwrap();
//! recorder.record(&clear.call(())).unwrap();
//!
//! let added = recorder.drain_type(&add).unwrap();
//! assert_eq!(added[0].payload, 1);
//!
//! let rest = recorder.drain();
//! assert_type_emitted!(rest, clear);
//! ```

use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::action::{Action, AnyAction};
use crate::creator::ActionCreator;

/// Collects actions of any payload type in arrival order
///
/// Actions are stored erased (`Action<serde_json::Value>`) so one recorder
/// can hold every kind a component produces.
#[derive(Debug, Default)]
pub struct ActionRecorder {
    actions: VecDeque<Action<Value>>,
}

impl ActionRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action, erasing its payload
    pub fn record<P: Serialize>(&mut self, action: &Action<P>) -> serde_json::Result<()> {
        self.actions.push_back(action.erase()?);
        Ok(())
    }

    /// Record an already-erased action
    pub fn record_erased(&mut self, action: Action<Value>) {
        self.actions.push_back(action);
    }

    /// Number of recorded actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Drain all recorded actions
    pub fn drain(&mut self) -> Vec<Action<Value>> {
        self.actions.drain(..).collect()
    }

    /// Drain actions produced by `creator`, decoded to its payload type
    ///
    /// Actions of other types stay in the recorder, in order.
    pub fn drain_type<P: DeserializeOwned>(
        &mut self,
        creator: &ActionCreator<P>,
    ) -> serde_json::Result<Vec<Action<P>>> {
        let (matching, rest): (Vec<_>, Vec<_>) =
            self.actions.drain(..).partition(|a| creator.matches(a));
        self.actions.extend(rest);
        matching.iter().map(|a| a.decode()).collect()
    }

    /// Drain actions flagged as errors
    ///
    /// Non-error actions stay in the recorder.
    pub fn drain_errors(&mut self) -> Vec<Action<Value>> {
        let (errors, rest): (Vec<_>, Vec<_>) = self.actions.drain(..).partition(|a| a.is_error());
        self.actions.extend(rest);
        errors
    }
}

/// Assert that an action produced by `creator` is present.
///
/// ```ignore
/// assert_type_emitted!(actions, add_todo);
/// ```
#[macro_export]
macro_rules! assert_type_emitted {
    ($actions:expr, $creator:expr) => {
        assert!(
            $actions.iter().any(|a| $crate::is_type(a, &$creator)),
            "Expected action of type `{}` to be emitted, but got: {:?}",
            $creator.action_type(),
            $actions
                .iter()
                .map(|a| $crate::AnyAction::action_type(a))
                .collect::<Vec<_>>()
        );
    };
}

/// Assert that NO action produced by `creator` is present.
#[macro_export]
macro_rules! assert_type_not_emitted {
    ($actions:expr, $creator:expr) => {
        assert!(
            !$actions.iter().any(|a| $crate::is_type(a, &$creator)),
            "Expected action of type `{}` NOT to be emitted, but it was",
            $creator.action_type()
        );
    };
}

/// Find the first action produced by `creator`.
#[macro_export]
macro_rules! find_type {
    ($actions:expr, $creator:expr) => {
        $actions.iter().find(|a| $crate::is_type(*a, &$creator))
    };
}

/// Count actions produced by `creator`.
#[macro_export]
macro_rules! count_type {
    ($actions:expr, $creator:expr) => {
        $actions
            .iter()
            .filter(|a| $crate::is_type(*a, &$creator))
            .count()
    };
}
