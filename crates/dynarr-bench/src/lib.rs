//! Benchmark workloads for the dynarr container.
//!
//! Provides pre-built fixtures shared across the criterion benches:
//!
//! - [`sequential`]: `n` integers appended one at a time
//! - [`sorted_evens`]: `n` even integers in ascending order (odd queries miss)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynArray;

/// Build an array of `n` sequential integers via repeated `push`,
/// exercising the doubling growth path.
pub fn sequential(n: u64) -> DynArray<u64> {
    let mut arr = DynArray::new();
    for i in 0..n {
        arr.push(i);
    }
    arr
}

/// Build a sorted array of the first `n` even integers.
///
/// Even queries hit and odd queries miss, which suits search benchmarks
/// that want both paths.
pub fn sorted_evens(n: u64) -> DynArray<u64> {
    (0..n).map(|i| i * 2).collect()
}
