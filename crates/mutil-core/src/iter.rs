//! Iterator adapters returning [`Maybe`].

use crate::maybe::Maybe;

/// Extension methods on any iterator.
pub trait MaybeIteratorExt: Iterator + Sized {
    /// The first element as a present `Maybe`, or empty if there is none.
    fn maybe_first(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}
