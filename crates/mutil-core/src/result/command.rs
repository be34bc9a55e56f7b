//! `CommandResult`: the outcome of an operation with no payload.

use std::hash::{Hash, Hasher};

use super::base::ResultCore;
use super::Cause;
use crate::error::ToolkitError;

/// Reason carried by [`CommandResult::unknown_error`].
pub const UNKNOWN_ERROR_REASON: &str = "Unknown error occurred.";

/// Success, or failure with a reason and optional cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    core: ResultCore,
}

impl CommandResult {
    /// A successful result with an empty reason.
    pub fn ok() -> Self {
        Self {
            core: ResultCore::success(String::new()),
        }
    }

    /// A successful result with an informational message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            core: ResultCore::success(message.into()),
        }
    }

    /// A failed result.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            core: ResultCore::failure(reason.into(), None),
        }
    }

    /// A failed result with the error that caused it.
    pub fn failure_with_cause(reason: impl Into<String>, cause: Cause) -> Self {
        Self {
            core: ResultCore::failure(reason.into(), Some(cause)),
        }
    }

    /// A failure whose reason is not known.
    pub fn unknown_error() -> Self {
        Self::failure(UNKNOWN_ERROR_REASON)
    }

    /// Whether the command succeeded.
    pub fn is_ok(&self) -> bool {
        self.core.is_success()
    }

    /// The failure reason; empty for a plain success.
    pub fn reason(&self) -> &str {
        self.core.reason()
    }

    /// The error attached to a failure, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.core.cause()
    }

    /// Convert into a standard `Result`, surfacing the stored cause as the
    /// error source.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::Failed`] when the command failed.
    pub fn into_result(self) -> Result<(), ToolkitError> {
        let (success, reason, cause) = self.core.into_parts();
        if success {
            return Ok(());
        }
        tracing::debug!(reason = %reason, has_cause = cause.is_some(), "command result converted to error");
        Err(ToolkitError::Failed { reason, cause })
    }

    /// Split into (success, reason, cause).
    pub fn into_parts(self) -> (bool, String, Option<Cause>) {
        self.core.into_parts()
    }

    /// Hash code folded from success, reason and cause.
    pub fn hash_code(&self) -> i32 {
        self.core.hash_code()
    }
}

impl Hash for CommandResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::error::Error as _;
    use std::sync::Arc;

    #[test]
    fn test_ok() {
        let result = CommandResult::ok();
        assert!(result.is_ok());
        assert_eq!(result.reason(), "");
        assert!(result.cause().is_none());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_ok_with_message() {
        let result = CommandResult::ok_with_message("nothing to do");
        assert!(result.is_ok());
        assert_eq!(result.reason(), "nothing to do");
    }

    #[test]
    fn test_failure() {
        let result = CommandResult::failure("save rejected");
        assert!(!result.is_ok());
        assert_eq!(result.reason(), "save rejected");
    }

    #[test]
    fn test_unknown_error() {
        let result = CommandResult::unknown_error();
        assert!(!result.is_ok());
        assert_eq!(result.reason(), UNKNOWN_ERROR_REASON);
        assert_eq!(result, CommandResult::unknown_error());
    }

    #[test]
    fn test_failure_with_cause_into_result() {
        let cause: Cause = Arc::new(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only volume",
        ));
        let err = CommandResult::failure_with_cause("save rejected", cause)
            .into_result()
            .unwrap_err();
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("read-only volume"));
    }

    #[test]
    fn test_equality_and_hash() {
        assert_eq!(CommandResult::ok(), CommandResult::ok());
        assert_ne!(CommandResult::ok(), CommandResult::failure(""));
        assert_eq!(CommandResult::failure("a").hash_code(), CommandResult::failure("a").hash_code());

        let set: HashSet<CommandResult> = [CommandResult::ok(), CommandResult::ok(), CommandResult::failure("a")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_into_parts() {
        let (success, reason, cause) = CommandResult::failure("r").into_parts();
        assert!(!success);
        assert_eq!(reason, "r");
        assert!(cause.is_none());
    }
}
