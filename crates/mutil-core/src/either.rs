//! # Either — Binary Sum Type
//!
//! `Either<L, R>` holds exactly one of a left value or a right value. The
//! type has two constructors and nothing else, so the "empty" third state
//! is unrepresentable: every combinator handles the two variants
//! exhaustively and needs no receiver validation.
//!
//! Right is the side the combinators transform (`select`, `select_many`);
//! Left passes through them unchanged, re-wrapped in the new type.
//!
//! ## Untrusted Construction
//!
//! Code that assembles an `Either` from two independently optional parts
//! goes through [`Either::from_maybes`], which rejects input carrying
//! neither side or both sides with [`ToolkitError::InvalidArgument`] on
//! parameter `source`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ToolkitError;
use crate::maybe::Maybe;

/// Exactly one of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Build an Either from a pair of optional sides.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidArgument`] naming `source` unless
    /// exactly one of `left` and `right` is present.
    pub fn from_maybes(left: Maybe<L>, right: Maybe<R>) -> Result<Self, ToolkitError> {
        match (left.into_option(), right.into_option()) {
            (Some(value), None) => Ok(Self::Left(value)),
            (None, Some(value)) => Ok(Self::Right(value)),
            (None, None) => Err(ToolkitError::invalid_argument(
                "source",
                "neither a left nor a right value is present",
            )),
            (Some(_), Some(_)) => Err(ToolkitError::invalid_argument(
                "source",
                "both a left and a right value are present",
            )),
        }
    }

    /// Whether the left side is held.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the right side is held.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// View both sides by reference.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// A present `Maybe` holding a copy of the left value, or empty.
    pub fn to_left_value(&self) -> Maybe<L>
    where
        L: Clone,
    {
        match self {
            Self::Left(value) => Maybe::of(value.clone()),
            Self::Right(_) => Maybe::empty(),
        }
    }

    /// A present `Maybe` holding a copy of the right value, or empty.
    pub fn to_right_value(&self) -> Maybe<R>
    where
        R: Clone,
    {
        match self {
            Self::Left(_) => Maybe::empty(),
            Self::Right(value) => Maybe::of(value.clone()),
        }
    }

    /// Consume into a `Maybe` of the left value.
    pub fn into_left_value(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::of(value),
            Self::Right(_) => Maybe::empty(),
        }
    }

    /// Consume into a `Maybe` of the right value.
    pub fn into_right_value(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::empty(),
            Self::Right(value) => Maybe::of(value),
        }
    }

    /// Borrow the left value.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidState`] when the right side is held.
    pub fn left_value(&self) -> Result<&L, ToolkitError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(ToolkitError::invalid_state("left value of a right Either")),
        }
    }

    /// Borrow the right value.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidState`] when the left side is held.
    pub fn right_value(&self) -> Result<&R, ToolkitError> {
        match self {
            Self::Left(_) => Err(ToolkitError::invalid_state("right value of a left Either")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Collapse to a common type. Exactly one of the two functions runs:
    /// the one matching the held side.
    pub fn map<U, FL, FR>(self, from_left: FL, from_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => from_left(value),
            Self::Right(value) => from_right(value),
        }
    }

    /// Transform the right value; a left value passes through.
    pub fn select<U, F>(self, selector: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(selector(value)),
        }
    }

    /// Transform the right value with an `Either`-returning selector whose
    /// result is returned as is; a left value passes through.
    pub fn select_many<U, F>(self, selector: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => selector(value),
        }
    }

    /// The left value, or `reducer` applied to the right value.
    pub fn reduce_to_left<F>(self, reducer: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => reducer(value),
        }
    }

    /// The right value, or `reducer` applied to the left value.
    pub fn reduce_to_right<F>(self, reducer: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => reducer(value),
            Self::Right(value) => value,
        }
    }

    /// Same as [`reduce_to_left`](Self::reduce_to_left).
    pub fn left_value_or<F>(self, reducer: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.reduce_to_left(reducer)
    }

    /// Same as [`reduce_to_right`](Self::reduce_to_right).
    pub fn right_value_or<F>(self, reducer: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.reduce_to_right(reducer)
    }
}
