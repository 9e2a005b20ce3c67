//! Compile-time query policies for the rank/select indexes.
//!
//! Both policies are realized as sealed marker types with associated
//! constants. The index structures take them as type parameters, so every
//! combination is monomorphized and the policy checks constant-fold out of
//! the query hot path.

/// Which polarity the index stores as its primary count.
///
/// The level arrays of every index count either ones or zeros in each
/// block. Queries for the stored polarity read the counters directly;
/// queries for the other polarity derive their answer as
/// `block_span - stored`. Pick the polarity you query most.
pub trait OptimizedFor: sealed::Sealed {
    /// `true` if the level counters store one-counts.
    const STORE_ONES: bool;
}

/// Optimize for `rank1`/`select1` queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneQueries;

/// Optimize for `rank0`/`select0` queries.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroQueries;

/// No preference; both query polarities are used equally often.
///
/// Stores one-counts, like [`OneQueries`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DontCare;

impl OptimizedFor for OneQueries {
    const STORE_ONES: bool = true;
}

impl OptimizedFor for ZeroQueries {
    const STORE_ONES: bool = false;
}

impl OptimizedFor for DontCare {
    const STORE_ONES: bool = true;
}

/// Strategy used to locate the target L2 sub-block inside an L1 block
/// during select queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum L2Search {
    /// Shift through the packed fields, one comparison per sub-block.
    Linear,
    /// Fixed-depth comparison tree over the packed prefix sums.
    Binary,
    /// SSE shuffle/compare/movemask over the whole record (x86-64 only).
    Intrinsics,
}

/// Compile-time selection of the L2 search strategy.
pub trait FindL2With: sealed::Sealed {
    /// The strategy the select code paths specialize on.
    const SEARCH: L2Search;
}

/// Linear scan through the packed L2 fields (at most 7 steps).
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearSearch;

/// Depth-3 decision tree over the seven L2 prefix sums.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySearch;

/// Decode the whole record with SSE and locate the sub-block with one
/// parallel compare.
///
/// Requires x86-64 with SSSE3 and SSE4.1 compiled in (e.g.
/// `-C target-cpu=x86-64-v2`). On any other target this strategy
/// collapses to [`LinearSearch`] at compile time; there is no runtime
/// feature detection in the query path.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intrinsics;

/// Whether the SSE select path is compiled in.
pub(crate) const HAS_SSE_SELECT: bool = cfg!(all(
    target_arch = "x86_64",
    target_feature = "ssse3",
    target_feature = "sse4.1"
));

impl FindL2With for LinearSearch {
    const SEARCH: L2Search = L2Search::Linear;
}

impl FindL2With for BinarySearch {
    const SEARCH: L2Search = L2Search::Binary;
}

impl FindL2With for Intrinsics {
    const SEARCH: L2Search = if HAS_SSE_SELECT {
        L2Search::Intrinsics
    } else {
        L2Search::Linear
    };
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::OneQueries {}
    impl Sealed for super::ZeroQueries {}
    impl Sealed for super::DontCare {}
    impl Sealed for super::LinearSearch {}
    impl Sealed for super::BinarySearch {}
    impl Sealed for super::Intrinsics {}
}
