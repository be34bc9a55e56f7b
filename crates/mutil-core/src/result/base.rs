//! Shared record behind the public result facades.
//!
//! `ValueResultCore` hands its value out unconditionally; the success guard
//! lives in `QueryResult`.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::Cause;
use crate::hash::HashCombiner;

/// (success, reason, cause).
#[derive(Debug, Clone)]
pub(crate) struct ResultCore {
    success: bool,
    reason: String,
    cause: Option<Cause>,
}

impl ResultCore {
    pub(crate) fn success(message: String) -> Self {
        Self {
            success: true,
            reason: message,
            cause: None,
        }
    }

    pub(crate) fn failure(reason: String, cause: Option<Cause>) -> Self {
        Self {
            success: false,
            reason,
            cause,
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        self.success
    }

    pub(crate) fn reason(&self) -> &str {
        &self.reason
    }

    pub(crate) fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub(crate) fn into_parts(self) -> (bool, String, Option<Cause>) {
        (self.success, self.reason, self.cause)
    }

    /// success, then reason, then cause identity.
    pub(crate) fn hash_code(&self) -> i32 {
        let cause = self.cause.as_ref().map(cause_address);
        HashCombiner::new()
            .add(&self.success)
            .add(self.reason.as_str())
            .add_optional(cause.as_ref())
            .finish()
    }
}

/// Address of the shared error object, ignoring the vtable half of the
/// fat pointer.
fn cause_address(cause: &Cause) -> usize {
    Arc::as_ptr(cause) as *const () as usize
}

impl PartialEq for ResultCore {
    fn eq(&self, other: &Self) -> bool {
        self.success == other.success
            && self.reason == other.reason
            && self.cause.as_ref().map(cause_address) == other.cause.as_ref().map(cause_address)
    }
}

impl Eq for ResultCore {}

impl Hash for ResultCore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// A `ResultCore` plus the value of a successful outcome.
#[derive(Debug, Clone)]
pub(crate) struct ValueResultCore<T> {
    value: Option<T>,
    result: ResultCore,
}

impl<T> ValueResultCore<T> {
    pub(crate) fn success(value: T, message: String) -> Self {
        Self {
            value: Some(value),
            result: ResultCore::success(message),
        }
    }

    pub(crate) fn failure(reason: String, cause: Option<Cause>) -> Self {
        Self {
            value: None,
            result: ResultCore::failure(reason, cause),
        }
    }

    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) fn result(&self) -> &ResultCore {
        &self.result
    }

    pub(crate) fn into_parts(self) -> (Option<T>, ResultCore) {
        (self.value, self.result)
    }
}

impl<T: Hash> ValueResultCore<T> {
    /// value, then the combined hash of the `ResultCore`.
    pub(crate) fn hash_code(&self) -> i32 {
        HashCombiner::new()
            .add_optional(self.value.as_ref())
            .add_code(self.result.hash_code())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for ValueResultCore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.result == other.result
    }
}

impl<T: Eq> Eq for ValueResultCore<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause(message: &str) -> Cause {
        Arc::new(std::io::Error::new(std::io::ErrorKind::Other, message.to_string()))
    }

    #[test]
    fn test_success_has_empty_reason_and_no_cause() {
        let core = ResultCore::success(String::new());
        assert!(core.is_success());
        assert_eq!(core.reason(), "");
        assert!(core.cause().is_none());
    }

    #[test]
    fn test_failure_keeps_reason_and_cause() {
        let shared = cause("disk");
        let core = ResultCore::failure("write failed".into(), Some(shared.clone()));
        assert!(!core.is_success());
        assert_eq!(core.reason(), "write failed");
        assert!(Arc::ptr_eq(core.cause().unwrap(), &shared));
    }

    #[test]
    fn test_equality_compares_all_fields() {
        let a = ResultCore::failure("x".into(), None);
        assert_eq!(a, ResultCore::failure("x".into(), None));
        assert_ne!(a, ResultCore::failure("y".into(), None));
        assert_ne!(a, ResultCore::success("x".into()));
    }

    #[test]
    fn test_cause_compares_by_identity() {
        let shared = cause("disk");
        let a = ResultCore::failure("x".into(), Some(shared.clone()));
        let b = ResultCore::failure("x".into(), Some(shared));
        let c = ResultCore::failure("x".into(), Some(cause("disk")));
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
        assert_ne!(a, c);
        assert_ne!(a, ResultCore::failure("x".into(), None));
    }

    #[test]
    fn test_hash_code_order_is_success_reason_cause() {
        let core = ResultCore::failure("bad".into(), None);
        let expected = HashCombiner::new()
            .add(&false)
            .add("bad")
            .add_optional::<usize>(None)
            .finish();
        assert_eq!(core.hash_code(), expected);
    }

    #[test]
    fn test_value_core_hash_code_folds_value_first() {
        let core = ValueResultCore::success(5_u8, String::new());
        let expected = HashCombiner::new()
            .add(&5_u8)
            .add_code(core.result().hash_code())
            .finish();
        assert_eq!(core.hash_code(), expected);
    }

    #[test]
    fn test_value_core_equality() {
        let a = ValueResultCore::success(1, String::new());
        assert_eq!(a, ValueResultCore::success(1, String::new()));
        assert_ne!(a, ValueResultCore::success(2, String::new()));
        assert_eq!(
            ValueResultCore::<i32>::failure("r".into(), None),
            ValueResultCore::<i32>::failure("r".into(), None)
        );
    }

    #[test]
    fn test_value_core_exposes_value_unconditionally() {
        let core = ValueResultCore::success("v", String::new());
        assert_eq!(core.value(), Some(&"v"));
        let (value, result) = ValueResultCore::<&str>::failure("r".into(), None).into_parts();
        assert!(value.is_none());
        assert_eq!(result.reason(), "r");
    }
}
