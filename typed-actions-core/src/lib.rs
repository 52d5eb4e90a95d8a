//! Core types for typed-actions
//!
//! This crate builds strongly-typed action envelopes for applications with
//! unidirectional data flow. It does not dispatch actions or hold state; it
//! only produces tagged values for a reducer to fold.
//!
//! # Core Concepts
//!
//! - **Action**: Envelope with `type`, `payload`, `meta` and an `error` flag
//! - **ActionCreator**: Builds actions of one fixed, registered type
//! - **ActionCreatorFactory**: Hands out creators under an optional namespace
//!   and rejects duplicate types in strict mode
//! - **AsyncActionCreators**: Started / done / failed creators for one
//!   async operation
//!
//! # Basic Example
//!
//! ```
//! use typed_actions_core::{is_type, meta, ActionCreatorFactory, FactoryConfig};
//!
//! let mut factory = ActionCreatorFactory::from_config(
//!     FactoryConfig::new().prefix("counter").strict(true),
//! );
//! let increment = factory.simple("INCREMENT").unwrap();
//! let set = factory.creator::<i64>("SET", Some(meta! { "source": "ui" })).unwrap();
//!
//! let action = set.call(10);
//! assert_eq!(action.action_type, "counter/SET");
//! assert_eq!(action.meta["source"], "ui");
//! assert!(is_type(&action, &set));
//! assert!(!is_type(&action, &increment));
//! ```
//!
//! # Async Operations
//!
//! ```
//! use typed_actions_core::{ActionCreatorFactory, AnyAction, FactoryConfig};
//!
//! let mut factory = ActionCreatorFactory::from_config(FactoryConfig::new().strict(true));
//! let fetch = factory.async_creators::<String, Vec<u8>, String>("FETCH", None).unwrap();
//!
//! let started = fetch.started.call("report.csv".to_string());
//! let failed = fetch.complete("report.csv".to_string(), Err("404".to_string()), None);
//!
//! assert_eq!(started.action_type, "FETCH_STARTED");
//! assert_eq!(failed.action_type(), "FETCH_FAILED");
//! assert!(failed.is_error());
//! ```

pub mod action;
pub mod config;
pub mod creator;
pub mod error;
pub mod error_like;
pub mod factory;
pub mod lifecycle;
pub mod registry;
pub mod testing;

pub use action::{is_error, is_type, merge_meta, Action, AnyAction, Meta};
pub use config::FactoryConfig;
pub use creator::{ActionCreator, ErrorRule};
pub use error::{ActionError, DuplicateTypeError, Result};
pub use error_like::ErrorLike;
pub use factory::ActionCreatorFactory;
pub use lifecycle::{AsyncActionCreators, Completed, Completion, Failure, Success};
pub use registry::TypeRegistry;

pub use testing::ActionRecorder;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{is_error, is_type, Action, AnyAction, Meta};
    pub use crate::config::FactoryConfig;
    pub use crate::creator::{ActionCreator, ErrorRule};
    pub use crate::error::{ActionError, DuplicateTypeError};
    pub use crate::error_like::ErrorLike;
    pub use crate::factory::ActionCreatorFactory;
    pub use crate::lifecycle::{AsyncActionCreators, Completed, Completion, Failure, Success};
    pub use crate::meta;
}
