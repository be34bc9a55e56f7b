//! # Results — Query and Command Outcomes
//!
//! Two public facades over one shared internal record:
//!
//! - [`QueryResult<T>`]: success carrying a value, or failure. Reading the
//!   value of a failed query returns [`ToolkitError::InvalidState`]; a failed
//!   query never exposes a default value.
//! - [`CommandResult`]: success or failure of an operation with no payload.
//!
//! Both hold a (success, reason, cause) triple. By convention the reason is
//! empty on success unless an informational message was supplied. The
//! cause is storage only: it is never raised implicitly, and only the
//! explicit `into_result` conversions turn it into an error source.
//!
//! ## Equality and Hashing
//!
//! Structural on value, success and reason. Causes compare by identity
//! (the same shared error object), since arbitrary errors have no value
//! equality. Hash codes are folded through
//! [`HashCombiner`](crate::HashCombiner) in the order equality compares.
//!
//! [`ToolkitError::InvalidState`]: crate::ToolkitError::InvalidState

mod base;
mod command;
mod query;

use std::sync::Arc;

pub use command::{CommandResult, UNKNOWN_ERROR_REASON};
pub use query::QueryResult;

/// The informational error attached to a failed result.
///
/// Shared by reference so that results stay cheap to clone and so that two
/// results can be recognized as carrying the same cause.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;
