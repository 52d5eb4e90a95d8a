//! Run-time "is this a failure?" inspection of payloads
//!
//! The default error rule of a creator asks the payload whether it looks like
//! an error. Rust has no ambient run-time kind for values, so the question is
//! answered by the [`ErrorLike`] trait instead:
//!
//! - plain data (numbers, strings, collections, JSON values) is never error-like
//! - error types (`std::io::Error`, boxed `dyn Error`, ...) always are
//! - `Result<T, E>` is error-like when it holds an `Err`
//!
//! Your own payload types can opt in with `#[derive(ErrorLike)]`:
//!
//! ```ignore
//! use typed_actions::ErrorLike;
//!
//! #[derive(ErrorLike)]
//! #[error_like(infer)]
//! enum FetchData {
//!     Rows(Vec<String>),
//!     TimeoutError,       // inferred from the `Error` suffix
//!     #[error_like(error)]
//!     Rejected(String),   // explicit
//! }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;

/// Kind check used by the default error rule
///
/// Returns `true` when the value represents a failure. This is a shape test,
/// not a type-level guarantee: a type whose success values are error-like
/// will be classified as failures.
pub trait ErrorLike {
    /// Whether this value represents a failure
    fn is_error_like(&self) -> bool;
}

macro_rules! never_error_like {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ErrorLike for $ty {
                fn is_error_like(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_error_like!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    serde_json::Value,
    serde_json::Map<String, serde_json::Value>,
);

impl<T> ErrorLike for Vec<T> {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T> ErrorLike for VecDeque<T> {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T> ErrorLike for [T] {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T, const N: usize> ErrorLike for [T; N] {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T> ErrorLike for Option<T> {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<K, V, S> ErrorLike for HashMap<K, V, S> {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<K, V> ErrorLike for BTreeMap<K, V> {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T, S> ErrorLike for HashSet<T, S> {
    fn is_error_like(&self) -> bool {
        false
    }
}

impl<T, E> ErrorLike for Result<T, E> {
    fn is_error_like(&self) -> bool {
        self.is_err()
    }
}

impl ErrorLike for std::io::Error {
    fn is_error_like(&self) -> bool {
        true
    }
}

impl ErrorLike for serde_json::Error {
    fn is_error_like(&self) -> bool {
        true
    }
}

impl ErrorLike for std::fmt::Error {
    fn is_error_like(&self) -> bool {
        true
    }
}

impl ErrorLike for crate::ActionError {
    fn is_error_like(&self) -> bool {
        true
    }
}

impl ErrorLike for dyn Error {
    fn is_error_like(&self) -> bool {
        true
    }
}

impl ErrorLike for dyn Error + Send + Sync {
    fn is_error_like(&self) -> bool {
        true
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for &T {
    fn is_error_like(&self) -> bool {
        (**self).is_error_like()
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for Box<T> {
    fn is_error_like(&self) -> bool {
        (**self).is_error_like()
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for Rc<T> {
    fn is_error_like(&self) -> bool {
        (**self).is_error_like()
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for Arc<T> {
    fn is_error_like(&self) -> bool {
        (**self).is_error_like()
    }
}
