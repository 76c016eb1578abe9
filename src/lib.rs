//! In-place partition based sorting and selection.
//!
//! Two partition kernels share one contract: partition a range around its last element and return
//! the pivot's final index, with every element left of it not greater and every element right of
//! it greater than the pivot.
//!
//! - [`partition::lomuto`] scans once and swaps.
//! - [`partition::hoare_vacancy`] scans from both ends and moves elements into a single vacant
//!   slot with plain copies.
//!
//! [`quicksort`] and [`select`] are generic over the kernel. The functions at the crate root use
//! [`partition::DefaultPartition`] and validate index ranges and ranks before touching the slice.

use core::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl sort_test_tools::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition<T>(arr: &mut [T]) -> usize
            where
                T: Ord,
            {
                partition(arr)
            }

            #[inline]
            fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
            where
                F: FnMut(&T, &T) -> bool,
            {
                partition_by(arr, is_less)
            }
        }
    };
}

mod error;
mod range;

pub mod partition;
pub mod quicksort;
pub mod select;

pub use error::{Error, Result};
pub use range::Range;
pub use select::{select_kth_largest, select_kth_largest_by, select_kth_smallest};

use partition::DefaultPartition;
use quicksort::Traversal;
use sort_test_tools::Partition;

/// Partitions `v[left..=right]` around `v[right]` and returns the pivot's final index.
///
/// Elements outside of `[left, right]` are not touched.
///
/// # Errors
///
/// [`Error::InvalidRange`] if `left > right` or `right >= v.len()`.
pub fn partition<T: Ord>(v: &mut [T], left: usize, right: usize) -> Result<usize> {
    partition_with::<DefaultPartition, T, _>(v, left, right, &mut |a, b| a.lt(b))
}

/// Like [`partition`] but with a comparator function.
pub fn partition_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    mut compare: F,
) -> Result<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_with::<DefaultPartition, T, _>(v, left, right, &mut |a, b| {
        compare(a, b) == Ordering::Less
    })
}

/// Partitions `v[left..=right]` with the kernel `P`.
pub fn partition_with<P, T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) -> Result<usize>
where
    P: Partition,
    F: FnMut(&T, &T) -> bool,
{
    let range = Range::checked(v.len(), left, right)?;

    Ok(range.left + P::partition_by(&mut v[range.indices()], is_less))
}

/// Sorts `v` ascending in place and returns it for chaining.
///
/// Not stable. Uses the work list quicksort, so the call stack does not grow with the input.
pub fn sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    sort_by(v, T::cmp)
}

/// Like [`sort`] but with a comparator function.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort::iterative::<DefaultPartition, T, _>(v, Traversal::Fifo, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });

    v
}

/// Sorts `v[left..=right]` ascending in place and returns the whole of `v` for chaining.
///
/// A range with `left >= right` holds at most one element and is returned as is, whether or not
/// its bounds lie inside `v`.
///
/// # Errors
///
/// [`Error::InvalidRange`] if `left < right` and `right >= v.len()`.
pub fn sort_range<T: Ord>(v: &mut [T], left: usize, right: usize) -> Result<&mut [T]> {
    sort_range_by(v, left, right, T::cmp)
}

/// Like [`sort_range`] but with a comparator function.
pub fn sort_range_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    compare: F,
) -> Result<&mut [T]>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if left >= right {
        return Ok(v);
    }

    let range = Range::checked(v.len(), left, right)?;
    sort_by(&mut v[range.indices()], compare);

    Ok(v)
}
