#![deny(missing_docs)]

//! # mutil-core — Algebraic Value Types
//!
//! A small toolkit of immutable value types for code that wants to make
//! absence, alternatives and failure explicit in its signatures:
//!
//! - [`Maybe<T>`]: presence or absence of a value, with short-circuiting
//!   combinators (`filter`, `map`, `flat_map`, the `or_else` family).
//! - [`Either<L, R>`]: exactly one of two values. There is no third,
//!   empty state: the type has two constructors and nothing else.
//! - [`QueryResult<T>`] / [`CommandResult`]: success with a payload (or
//!   none), or failure with a reason and an optional cause.
//! - [`HashCombiner`]: the deterministic, order-sensitive hash fold that
//!   backs structural hashing of the result types.
//!
//! ## Key Design Principles
//!
//! 1. **Guarded accessors fail fast.** Reading the value of an empty
//!    `Maybe` or a failed `QueryResult` returns
//!    [`ToolkitError::InvalidState`]. There is no default-value fallback
//!    unless the caller asks for one (`or_else`, `or_else_get`).
//!
//! 2. **Explicit predicates, no truthiness.** `is_present()` and `is_ok()`
//!    replace implicit boolean conversion.
//!
//! 3. **Structural equality, field-ordered hashing.** Every type compares
//!    by value. Result hashes are folded through [`HashCombiner`] in the
//!    same field order that equality compares them in.
//!
//! 4. **Immutability.** Combinators consume or borrow the receiver and
//!    return a new instance; no type here exposes a mutating method.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types implement `Debug` and `Clone`; `Maybe` and `Either`
//!   implement `Serialize`/`Deserialize` behind the default `serde` feature.

pub mod either;
pub mod error;
pub mod hash;
pub mod iter;
pub mod maybe;
pub mod parse;
pub mod result;

// Re-export primary types for ergonomic imports.
pub use either::Either;
pub use error::ToolkitError;
pub use hash::{combine_all, hash_code, HashCombiner, HASH_FACTOR};
pub use iter::MaybeIteratorExt;
pub use maybe::Maybe;
pub use result::{Cause, CommandResult, QueryResult, UNKNOWN_ERROR_REASON};
