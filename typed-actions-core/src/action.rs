//! Action envelopes produced by creators

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form metadata attached to an action
pub type Meta = serde_json::Map<String, Value>;

/// Anything a reducer can switch on by type
///
/// This is the whole contract a consuming runtime needs: a string `type`
/// plus the failure flag.
pub trait AnyAction {
    /// The fully-qualified action type
    fn action_type(&self) -> &str;

    /// Whether this action represents a failure
    fn is_error(&self) -> bool;
}

/// An action envelope
///
/// Serializes to exactly `{"type", "payload", "meta", "error"}`:
///
/// ```
/// use typed_actions_core::{Action, Meta};
///
/// let action = Action {
///     action_type: "todos/ADD".to_string(),
///     payload: 7,
///     meta: Meta::new(),
///     error: false,
/// };
/// let json = serde_json::to_value(&action).unwrap();
/// assert_eq!(json["type"], "todos/ADD");
/// assert_eq!(json["payload"], 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action<P> {
    /// Fully-qualified type, including the factory prefix
    #[serde(rename = "type")]
    pub action_type: String,
    /// Caller-supplied payload, passed through untouched
    pub payload: P,
    /// Common meta merged with per-call meta
    #[serde(default)]
    pub meta: Meta,
    /// True iff this action represents a failure
    #[serde(default)]
    pub error: bool,
}

impl<P> AnyAction for Action<P> {
    fn action_type(&self) -> &str {
        &self.action_type
    }

    fn is_error(&self) -> bool {
        self.error
    }
}

impl<P: Serialize> Action<P> {
    /// Erase the payload type so actions of different kinds can share a queue
    pub fn erase(&self) -> serde_json::Result<Action<Value>> {
        Ok(Action {
            action_type: self.action_type.clone(),
            payload: serde_json::to_value(&self.payload)?,
            meta: self.meta.clone(),
            error: self.error,
        })
    }
}

impl Action<Value> {
    /// Decode an erased payload back into a concrete type
    ///
    /// Does not look at `action_type`; use
    /// [`ActionCreator::narrow`](crate::ActionCreator::narrow) to check the
    /// type first.
    pub fn decode<P: DeserializeOwned>(&self) -> serde_json::Result<Action<P>> {
        Ok(Action {
            action_type: self.action_type.clone(),
            payload: P::deserialize(&self.payload)?,
            meta: self.meta.clone(),
            error: self.error,
        })
    }
}

/// Merge common and per-call meta into a fresh map
///
/// Keys from `extra` win on conflict. Neither input is aliased by the result.
pub fn merge_meta(common: &Meta, extra: Option<&Meta>) -> Meta {
    let mut merged = common.clone();
    if let Some(extra) = extra {
        for (key, value) in extra {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// True iff `action` was produced by `creator`
///
/// Compares types only; the payload is never inspected.
pub fn is_type<A: AnyAction + ?Sized, P>(action: &A, creator: &crate::ActionCreator<P>) -> bool {
    action.action_type() == creator.action_type()
}

/// True iff `action` is flagged as a failure
pub fn is_error<A: AnyAction + ?Sized>(action: &A) -> bool {
    action.is_error()
}

/// Build a [`Meta`] map from JSON object syntax
///
/// ```
/// use typed_actions_core::meta;
///
/// let meta = meta! { "source": "ui", "retries": 2 };
/// assert_eq!(meta["retries"], 2);
/// ```
#[macro_export]
macro_rules! meta {
    () => {
        $crate::Meta::new()
    };
    ($($tt:tt)+) => {
        match $crate::__private::serde_json::json!({ $($tt)+ }) {
            $crate::__private::serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(error: bool) -> Action<u32> {
        Action {
            action_type: "counter/SET".to_string(),
            payload: 3,
            meta: meta! { "source": "test" },
            error,
        }
    }

    #[test]
    fn test_merge_meta_extra_wins() {
        let common = meta! { "a": 1 };
        assert_eq!(merge_meta(&common, Some(&meta! { "b": 2 })), meta! { "a": 1, "b": 2 });
        assert_eq!(merge_meta(&common, Some(&meta! { "a": 3 })), meta! { "a": 3 });
        assert_eq!(merge_meta(&common, None), common);
    }

    #[test]
    fn test_merge_meta_is_fresh() {
        let common = meta! { "a": 1 };
        let mut merged = merge_meta(&common, None);
        merged.insert("a".into(), 99.into());
        assert_eq!(common["a"], 1);
    }

    #[test]
    fn test_is_error_reads_flag_only() {
        assert!(is_error(&envelope(true)));
        assert!(!is_error(&envelope(false)));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(envelope(false)).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, ["error", "meta", "payload", "type"]);
        assert_eq!(json["meta"]["source"], "test");
    }

    #[test]
    fn test_erase_then_decode() {
        let action = envelope(true);
        let erased = action.erase().unwrap();
        assert_eq!(erased.payload, serde_json::json!(3));
        assert!(erased.error);
        let back: Action<u32> = erased.decode().unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let erased = envelope(false).erase().unwrap();
        assert!(erased.decode::<String>().is_err());
    }
}
