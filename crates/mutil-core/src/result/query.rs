//! `QueryResult<T>`: the outcome of an operation that produces a value.

use std::hash::{Hash, Hasher};

use super::base::ValueResultCore;
use super::Cause;
use crate::error::ToolkitError;
use crate::maybe::Maybe;

/// Success with a value, or failure with a reason and optional cause.
///
/// Built only through the factories [`ok`](Self::ok),
/// [`ok_with_message`](Self::ok_with_message), [`failed`](Self::failed) and
/// [`failed_with_cause`](Self::failed_with_cause).
///
/// ```
/// use mutil_core::QueryResult;
///
/// let found = QueryResult::ok(42);
/// assert!(found.is_ok());
/// assert_eq!(*found.value().unwrap(), 42);
///
/// let missing = QueryResult::<i32>::failed("bad input");
/// assert!(!missing.is_ok());
/// assert_eq!(missing.reason(), "bad input");
/// assert!(missing.value().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    core: ValueResultCore<T>,
}

impl<T> QueryResult<T> {
    /// A successful result carrying `value`, with an empty reason.
    pub fn ok(value: T) -> Self {
        Self {
            core: ValueResultCore::success(value, String::new()),
        }
    }

    /// A successful result carrying `value` and an informational message.
    pub fn ok_with_message(value: T, message: impl Into<String>) -> Self {
        Self {
            core: ValueResultCore::success(value, message.into()),
        }
    }

    /// A failed result.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            core: ValueResultCore::failure(reason.into(), None),
        }
    }

    /// A failed result with the error that caused it.
    pub fn failed_with_cause(reason: impl Into<String>, cause: Cause) -> Self {
        Self {
            core: ValueResultCore::failure(reason.into(), Some(cause)),
        }
    }

    /// Whether the query succeeded.
    pub fn is_ok(&self) -> bool {
        self.core.result().is_success()
    }

    /// The failure reason; empty for a plain success.
    pub fn reason(&self) -> &str {
        self.core.result().reason()
    }

    /// The error attached to a failure, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.core.result().cause()
    }

    /// Borrow the value of a successful query.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidState`] when the query failed.
    pub fn value(&self) -> Result<&T, ToolkitError> {
        match self.core.value() {
            Some(value) if self.is_ok() => Ok(value),
            _ => Err(ToolkitError::invalid_state("value of a failed QueryResult")),
        }
    }

    /// Take the value out of a successful query.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidState`] when the query failed.
    pub fn into_value(self) -> Result<T, ToolkitError> {
        self.take()
            .ok_or_else(|| ToolkitError::invalid_state("value of a failed QueryResult"))
    }

    fn take(self) -> Option<T> {
        let (value, result) = self.core.into_parts();
        value.filter(|_| result.is_success())
    }

    /// Apply `selector` to the value of a success; a failure keeps its
    /// reason and cause.
    pub fn map<U, F>(self, selector: F) -> QueryResult<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| QueryResult::ok(selector(value)))
    }

    /// Apply a result-returning `selector` to the value of a success and
    /// return its result as is; a failure keeps its reason and cause.
    pub fn flat_map<U, F>(self, selector: F) -> QueryResult<U>
    where
        F: FnOnce(T) -> QueryResult<U>,
    {
        let (value, result) = self.core.into_parts();
        let (success, reason, cause) = result.into_parts();
        match value {
            Some(value) if success => selector(value),
            _ => QueryResult {
                core: ValueResultCore::failure(reason, cause),
            },
        }
    }

    /// The value of a success, or `other`.
    pub fn or_else(self, other: T) -> T {
        self.take().unwrap_or(other)
    }

    /// The value of a success, or the result of `supplier`, which runs only
    /// on failure.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.take().unwrap_or_else(supplier)
    }

    /// The value of a success, or the error `supplier` builds from the
    /// failure reason and cause. The error is returned as built.
    pub fn or_else_throw<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce(&str, Option<&Cause>) -> E,
    {
        let (value, result) = self.core.into_parts();
        match value {
            Some(value) if result.is_success() => Ok(value),
            _ => Err(supplier(result.reason(), result.cause())),
        }
    }

    /// This result on success; on failure, the replacement `recover` builds
    /// from the failure reason and cause. `recover` runs only on failure and
    /// may itself return a failure.
    pub fn or_else_recover<F>(self, recover: F) -> Self
    where
        F: FnOnce(&str, Option<&Cause>) -> Self,
    {
        if self.is_ok() {
            return self;
        }
        let (_, result) = self.core.into_parts();
        recover(result.reason(), result.cause())
    }

    /// Convert into a standard `Result`, surfacing the stored cause as the
    /// error source.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::Failed`] when the query failed.
    pub fn into_result(self) -> Result<T, ToolkitError> {
        let (value, result) = self.core.into_parts();
        let (success, reason, cause) = result.into_parts();
        match value {
            Some(value) if success => Ok(value),
            _ => {
                tracing::debug!(reason = %reason, has_cause = cause.is_some(), "query result converted to error");
                Err(ToolkitError::Failed { reason, cause })
            }
        }
    }

    /// Split into (success, value, reason, cause). The value is present
    /// only for a success.
    pub fn into_parts(self) -> (bool, Maybe<T>, String, Option<Cause>) {
        let (value, result) = self.core.into_parts();
        let (success, reason, cause) = result.into_parts();
        let value = Maybe::of_nullable(value.filter(|_| success));
        (success, value, reason, cause)
    }
}

impl<T: Hash> QueryResult<T> {
    /// Hash code folded from the value, then success, reason and cause.
    pub fn hash_code(&self) -> i32 {
        self.core.hash_code()
    }
}

impl<T: PartialEq> PartialEq for QueryResult<T> {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl<T: Eq> Eq for QueryResult<T> {}

impl<T: Hash> Hash for QueryResult<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}
