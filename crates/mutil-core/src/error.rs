//! # Error Types
//!
//! Defines [`ToolkitError`], the single error type returned by the guarded
//! accessors and validating constructors of this crate. Derived with
//! `thiserror` for `Display` and `Error`.
//!
//! ## Taxonomy
//!
//! - `InvalidState`: a value was requested from something that does not
//!   hold one (empty `Maybe`, failed `QueryResult`, wrong `Either` side).
//!   This is a caller contract violation: check presence first.
//! - `InvalidArgument`: an argument that cannot be accepted, named by its
//!   parameter so the diagnostic points at the offending call site.
//! - `Failed`: a failed result converted into an error on explicit
//!   request. The stored cause becomes the error source.

use thiserror::Error;

use crate::result::Cause;

/// Top-level error type for the toolkit.
#[derive(Error, Debug, Clone)]
pub enum ToolkitError {
    /// A guarded accessor was used when no value is available.
    #[error("invalid state: {what}")]
    InvalidState {
        /// Which access was attempted.
        what: &'static str,
    },

    /// An argument was rejected before any combinator logic ran.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// The parameter name, e.g. `source` or `selector`.
        parameter: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// A failed result converted into an error.
    #[error("operation failed: {reason}")]
    Failed {
        /// The failure reason carried by the result.
        reason: String,
        /// The informational cause carried by the result, if any.
        #[source]
        cause: Option<Cause>,
    },
}

impl ToolkitError {
    pub(crate) fn invalid_state(what: &'static str) -> Self {
        tracing::debug!(what, "guarded accessor used without a value");
        Self::InvalidState { what }
    }

    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(parameter, reason = %reason, "argument rejected");
        Self::InvalidArgument { parameter, reason }
    }

    /// The parameter name attached to an `InvalidArgument` error.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }

    /// Whether this error reports a guarded-accessor violation.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}
