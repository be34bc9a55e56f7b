//! # Maybe — Option Monad
//!
//! `Maybe<T>` represents the presence or absence of a value. Combinators
//! short-circuit on absence: `filter`, `map` and `flat_map` never invoke
//! their closure on an empty `Maybe`, and `or_else_get` never invokes its
//! supplier on a present one.
//!
//! ## Presence Invariant
//!
//! [`Maybe::of`] always marks the value present, whatever it is. Absence is
//! expressed only by [`Maybe::empty`] (or [`Maybe::of_nullable`] given
//! `None`). Reading the value of an empty `Maybe` through [`Maybe::value`]
//! is a caller contract violation and returns
//! [`ToolkitError::InvalidState`]; there is no silent default.
//!
//! ## Equality and Hashing
//!
//! Two `Maybe`s are equal iff both are empty, or both are present with
//! equal values. An empty `Maybe` hashes as 0; a present one as the hash
//! code of its value.
//!
//! ## Serialization
//!
//! With the `serde` feature a `Maybe` is written as a sequence of zero or
//! one elements: `[]` when empty, `[value]` when present. A present `None`
//! payload therefore stays distinct from absence (`[null]` versus `[]`).

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ToolkitError;
use crate::hash::hash_code;

/// A value that may or may not be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Maybe<T> {
    inner: Option<T>,
}

impl<T> Maybe<T> {
    /// Wrap `value` as present.
    pub fn of(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// The absent `Maybe`.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// Present iff `value` is `Some`.
    pub fn of_nullable(value: Option<T>) -> Self {
        Self { inner: value }
    }

    /// Whether a value is present.
    pub fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// Whether the `Maybe` is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrow the present value.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidState`] when the `Maybe` is empty.
    pub fn value(&self) -> Result<&T, ToolkitError> {
        self.inner
            .as_ref()
            .ok_or_else(|| ToolkitError::invalid_state("value of an empty Maybe"))
    }

    /// Take the present value out of the `Maybe`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidState`] when the `Maybe` is empty.
    pub fn into_value(self) -> Result<T, ToolkitError> {
        self.inner
            .ok_or_else(|| ToolkitError::invalid_state("value of an empty Maybe"))
    }

    /// View the value by reference.
    pub fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            inner: self.inner.as_ref(),
        }
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// `predicate` runs exactly once when a value is present and not at all
    /// otherwise.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.inner {
            Some(value) if predicate(&value) => Self::of(value),
            _ => Self::empty(),
        }
    }

    /// Apply `selector` to a present value and wrap the result as present.
    pub fn map<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.inner {
            Some(value) => Maybe::of(selector(value)),
            None => Maybe::empty(),
        }
    }

    /// Apply a `Maybe`-returning `selector` to a present value and return
    /// its result without re-wrapping.
    pub fn flat_map<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.inner {
            Some(value) => selector(value),
            None => Maybe::empty(),
        }
    }

    /// The present value, or `other`.
    pub fn or_else(self, other: T) -> T {
        self.inner.unwrap_or(other)
    }

    /// The present value, or the result of `supplier`, which runs only when
    /// the `Maybe` is empty.
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.inner.unwrap_or_else(supplier)
    }

    /// The present value, or the error produced by `supplier`. The error is
    /// returned exactly as the supplier built it.
    pub fn or_else_throw<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.inner.ok_or_else(supplier)
    }

    /// Convert into the equivalent `Option`.
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T: Hash> Maybe<T> {
    /// 0 when empty, otherwise the hash code of the value.
    pub fn hash_code(&self) -> i32 {
        self.inner.as_ref().map_or(0, hash_code)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.inner
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => value.fmt(f),
            None => f.write_str("no value"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items: &[T] = match &self.inner {
            Some(value) => std::slice::from_ref(value),
            None => &[],
        };
        items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut items = Vec::<T>::deserialize(deserializer)?;
        if items.len() > 1 {
            return Err(de::Error::invalid_length(items.len(), &"zero or one element"));
        }
        Ok(Self::of_nullable(items.pop()))
    }
}
