//! # poprank
//!
//! Succinct bit vectors with constant-time rank and constant-time-ish
//! select, in three complementary index families over one packed
//! [`BitVector`]:
//!
//! - [`Rank`] / [`RankSelect`] — the classic three-level popcount index
//!   (L0/L1/L2) after Zhou, Andersen, and Kaminsky.
//! - [`FlatRank`] / [`FlatRankSelect`] — a two-level index for vectors up
//!   to 2^40 bits, packing an L1 counter and seven L2 prefix sums into one
//!   128-bit record; select can search the record linearly, with a fixed
//!   comparison tree, or with SSE.
//! - [`WideRank`] / [`WideRankSelect`] — separated L1/L2 arrays with a
//!   65536-bit L1 span and a cache-aware bounded binary search.
//!
//! All indexes cost roughly 3–4 % of the bit vector on top of the raw
//! data, are built in one forward pass, and borrow the vector they index.
//!
//! ## Quick start
//!
//! ```
//! use poprank::{BitVector, FlatRankSelect};
//!
//! let mut bv = BitVector::new(1 << 20);
//! for i in (0..bv.len()).step_by(3) {
//!     bv.set(i, true);
//! }
//!
//! let rs: FlatRankSelect = FlatRankSelect::new(&bv);
//! assert_eq!(rs.rank1(300), 100);
//! assert_eq!(rs.select1(100), Some(297));
//! ```
//!
//! ## Query policies
//!
//! The index families are generic over [`OptimizedFor`] (which polarity
//! the counters store) and, for select, [`FindL2With`] (how the target
//! 512-bit block is located inside an L1 block). Both are compile-time
//! parameters; every combination monomorphizes to branch-light query
//! code. See the [`policy`] module.
//!
//! ## Features
//!
//! - `std` (default) — std-only conveniences.
//! - `serde` — serialization for [`BitVector`].
//! - `simd` / `portable-popcount` — bulk popcount strategies, mutually
//!   exclusive, mainly for benchmarking.

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

pub mod binary;
mod bit_vector;
mod broadword;
mod flat;
mod l12;
pub mod policy;
mod popcount;
mod rank;
mod wide;

pub use bit_vector::{BitMut, Bits, BitsMut, BitVector};
pub use broadword::select_in_word;
pub use flat::{FlatRank, FlatRankSelect};
pub use l12::{BigL12Entry, L12Entry};
pub use policy::{
    BinarySearch, DontCare, FindL2With, Intrinsics, LinearSearch, OneQueries, OptimizedFor,
    ZeroQueries,
};
pub use popcount::{popcount_word, popcount_words, popcount_zeros, popcount_zeros_word};
pub use rank::{Rank, RankSelect};
pub use wide::{WideRank, WideRankSelect};

/// Rank queries over a static bit sequence.
pub trait RankSupport {
    /// Count of ones strictly before position `index`.
    fn rank1(&self, index: usize) -> usize;

    /// Count of zeros strictly before position `index`.
    ///
    /// Default implementation: `index - rank1(index)`.
    #[inline]
    fn rank0(&self, index: usize) -> usize {
        index - self.rank1(index)
    }

    /// Estimate of the bytes used by the support structure.
    fn space_usage(&self) -> usize;
}

/// Select queries over a static bit sequence.
///
/// Ranks are 1-indexed: `select1(1)` is the position of the first one.
pub trait SelectSupport: RankSupport {
    /// Position of the `rank`-th one, or `None` when `rank` is 0 or
    /// exceeds the number of ones.
    fn select1(&self, rank: usize) -> Option<usize>;

    /// Position of the `rank`-th zero, or `None` when `rank` is 0 or
    /// exceeds the number of zeros.
    fn select0(&self, rank: usize) -> Option<usize>;
}
