//! typed-actions: Strongly-typed action creators
//!
//! Build namespaced, collision-checked action creators for Redux/Elm-style
//! state management. Each creator stamps its payload into an [`Action`]
//! envelope with a fixed `type`, merged metadata and an `error` flag.
//!
//! # Example
//! ```
//! use typed_actions::prelude::*;
//!
//! #[derive(ErrorLike, Debug, Clone, PartialEq)]
//! #[error_like(infer)]
//! enum SaveResult {
//!     Saved { id: u64 },
//!     QuotaError,
//! }
//!
//! let mut factory = ActionCreatorFactory::from_config(FactoryConfig::new().prefix("docs").strict(true));
//! let saved = factory.creator::<SaveResult>("SAVED", None).unwrap();
//!
//! assert!(!saved.call(SaveResult::Saved { id: 1 }).error);
//! assert!(saved.call(SaveResult::QuotaError).error);
//! ```

// Re-export everything from core
pub use typed_actions_core::*;

// Re-export derive macros
pub use typed_actions_macros::ErrorLike;

/// Prelude for convenient imports
pub mod prelude {
    // Envelope and helpers
    pub use typed_actions_core::{is_error, is_type, meta, Action, AnyAction, Meta};

    // Creators
    pub use typed_actions_core::{ActionCreator, ActionCreatorFactory, ErrorRule, FactoryConfig};

    // Async lifecycle
    pub use typed_actions_core::{AsyncActionCreators, Completed, Completion, Failure, Success};

    // Errors
    pub use typed_actions_core::{ActionError, DuplicateTypeError};

    // Trait and derive macro share a name in different namespaces
    pub use typed_actions_core::ErrorLike;
    pub use typed_actions_macros::ErrorLike;
}
