//! # Hash Combination — Order-Sensitive Field Folding
//!
//! Defines [`HashCombiner`], the fold used to turn a sequence of field
//! hashes into one aggregate hash code:
//!
//! ```text
//! acc = seed                      (0 unless supplied)
//! for each value, in call order:
//!     acc = acc * 397 XOR hash(value)      (absent values hash as 0)
//! ```
//!
//! Arithmetic is 32-bit and wrapping. The fold is deliberately **not**
//! commutative: swapping two arguments changes the result, so a type's
//! hash mirrors the field order its equality compares in.
//!
//! ## Stability
//!
//! Results are deterministic within one process for fixed inputs. They are
//! not guaranteed stable across process restarts, compiler versions, or
//! platforms, and must never be persisted or sent over the wire.
//!
//! ## Open Arity
//!
//! - [`HashCombiner::add`] chains any number of values incrementally.
//! - [`combine_hashes!`](crate::combine_hashes) folds a literal argument list.
//! - [`combine_all`] folds a runtime-length sequence.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// The multiplicative constant of the fold.
pub const HASH_FACTOR: i32 = 397;

/// Incremental, order-sensitive hash accumulator.
///
/// Each `add*` call consumes the combiner and returns the advanced one, so
/// a partially built combiner can be copied and extended independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashCombiner {
    state: i32,
}

impl HashCombiner {
    /// Start a fold from the zero accumulator.
    pub fn new() -> Self {
        Self { state: 0 }
    }

    /// Start a fold from an externally supplied seed, e.g. the output of an
    /// earlier [`finish()`](Self::finish) for incremental combination.
    pub fn with_seed(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Fold a precomputed hash code into the accumulator.
    pub fn add_code(self, code: i32) -> Self {
        Self {
            state: self.state.wrapping_mul(HASH_FACTOR) ^ code,
        }
    }

    /// Fold the hash of `value` into the accumulator.
    pub fn add<T: Hash + ?Sized>(self, value: &T) -> Self {
        self.add_code(hash_code(value))
    }

    /// Fold an optional value; `None` contributes 0.
    pub fn add_optional<T: Hash + ?Sized>(self, value: Option<&T>) -> Self {
        self.add_code(value.map_or(0, hash_code))
    }

    /// The accumulated hash code.
    pub fn finish(self) -> i32 {
        self.state
    }
}

/// Hash a single value to a 32-bit code through its `Hash` impl.
///
/// Uses a fixed-key hasher so the same value yields the same code for the
/// lifetime of the process. The 64-bit digest is folded to 32 bits.
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> i32 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    let wide = hasher.finish();
    (wide ^ (wide >> 32)) as i32
}

/// Fold every item of `values`, in iteration order, from the zero seed.
pub fn combine_all<I>(values: I) -> i32
where
    I: IntoIterator,
    I::Item: Hash,
{
    values
        .into_iter()
        .fold(HashCombiner::new(), |acc, value| acc.add(&value))
        .finish()
}

/// Fold a literal list of values, in argument order, from the zero seed.
///
/// ```
/// use mutil_core::{combine_hashes, HashCombiner};
///
/// let folded = combine_hashes!("id", 42_u32, true);
/// let chained = HashCombiner::new().add("id").add(&42_u32).add(&true).finish();
/// assert_eq!(folded, chained);
/// ```
#[macro_export]
macro_rules! combine_hashes {
    () => {
        $crate::HashCombiner::new().finish()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::HashCombiner::new()$(.add(&$value))+.finish()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fold_is_zero() {
        assert_eq!(HashCombiner::new().finish(), 0);
        assert_eq!(combine_hashes!(), 0);
        assert_eq!(combine_all(Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_fold_formula_matches_constant() {
        let result = HashCombiner::new().add_code(1).add_code(2).finish();
        assert_eq!(result, 397 ^ 2);
    }

    #[test]
    fn test_fold_wraps_on_overflow() {
        let result = HashCombiner::with_seed(i32::MAX).add_code(0).finish();
        assert_eq!(result, i32::MAX.wrapping_mul(397));
    }

    #[test]
    fn test_seed_continues_earlier_fold() {
        let whole = HashCombiner::new().add("a").add("b").add("c").finish();
        let head = HashCombiner::new().add("a").finish();
        let resumed = HashCombiner::with_seed(head).add("b").add("c").finish();
        assert_eq!(whole, resumed);
    }

    #[test]
    fn test_absent_value_contributes_zero() {
        let absent = HashCombiner::new().add_optional::<str>(None).finish();
        let zero = HashCombiner::new().add_code(0).finish();
        assert_eq!(absent, zero);
    }

    #[test]
    fn test_present_optional_matches_add() {
        let a = HashCombiner::new().add_optional(Some(&7_u64)).finish();
        let b = HashCombiner::new().add(&7_u64).finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic_within_process() {
        assert_eq!(combine_hashes!("alpha", "beta"), combine_hashes!("alpha", "beta"));
        assert_eq!(hash_code("alpha"), hash_code("alpha"));
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(combine_hashes!(1_i32, 2_i32), combine_hashes!(2_i32, 1_i32));
        assert_ne!(combine_hashes!("alpha", "beta"), combine_hashes!("beta", "alpha"));
    }

    #[test]
    fn test_macro_matches_combine_all() {
        assert_eq!(combine_hashes!(3_u8, 5_u8, 8_u8), combine_all([3_u8, 5, 8]));
    }

    #[test]
    fn test_open_arity_beyond_tuple_sizes() {
        let values: Vec<u32> = (0..12).collect();
        let chained = values
            .iter()
            .fold(HashCombiner::new(), |acc, v| acc.add(v))
            .finish();
        assert_eq!(chained, combine_all(&values));
        assert_eq!(
            chained,
            combine_hashes!(0_u32, 1_u32, 2_u32, 3_u32, 4_u32, 5_u32, 6_u32, 7_u32, 8_u32, 9_u32, 10_u32, 11_u32)
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The fold is exactly `a * 397 ^ b` over hash codes.
        #[test]
        fn fold_matches_formula(seed in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
            let folded = HashCombiner::with_seed(seed).add_code(a).add_code(b).finish();
            let expected = (seed.wrapping_mul(397) ^ a).wrapping_mul(397) ^ b;
            prop_assert_eq!(folded, expected);
        }

        /// Same inputs in the same order always give the same code.
        #[test]
        fn fold_is_deterministic(values in prop::collection::vec(".{0,16}", 0..10)) {
            prop_assert_eq!(combine_all(&values), combine_all(&values));
        }

        /// Chaining and slicing the fold at any point agree.
        #[test]
        fn fold_is_resumable(values in prop::collection::vec(any::<u64>(), 0..10), split in 0usize..10) {
            let split = split.min(values.len());
            let head = combine_all(&values[..split]);
            let resumed = values[split..]
                .iter()
                .fold(HashCombiner::with_seed(head), |acc, v| acc.add(v))
                .finish();
            prop_assert_eq!(resumed, combine_all(&values));
        }
    }
}
