//! Quickselect, locating an order statistic by partitioning only the side that contains it.

use core::cmp::Ordering;
use core::marker::PhantomData;

use log::{debug, trace};
use sort_test_tools::{Partition, Select};

use crate::partition::DefaultPartition;
use crate::{Error, Range, Result};

/// Returns the `k`-th largest element of `v`, 1-based, as if `v` was sorted descending.
///
/// On success the returned element sits at the position a full ascending sort would put it in,
/// every element before it is not greater and every element after it is not smaller. The rest of
/// `v` is left in unspecified order.
///
/// # Errors
///
/// [`Error::InvalidRank`] if `k` is not in `1..=v.len()`, in which case `v` is left untouched.
pub fn select_kth_largest<T: Ord>(v: &mut [T], k: usize) -> Result<&T> {
    select_with::<DefaultPartition, T, _>(v, k, &mut |a, b| a.lt(b))
}

/// Like [`select_kth_largest`] but with a comparator function.
pub fn select_kth_largest_by<T, F>(v: &mut [T], k: usize, mut compare: F) -> Result<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    select_with::<DefaultPartition, T, _>(v, k, &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Returns the `k`-th smallest element of `v`, 1-based.
///
/// # Errors
///
/// [`Error::InvalidRank`] if `k` is not in `1..=v.len()`.
pub fn select_kth_smallest<T: Ord>(v: &mut [T], k: usize) -> Result<&T> {
    let len = v.len();
    let target = check_rank(k, len)? - 1;

    let pos = select_index::<DefaultPartition, T, _>(v, target, &mut |a, b| a.lt(b));
    Ok(&v[pos])
}

/// Selects the `k`-th largest element of `v` using the partition kernel `P`.
pub fn select_with<'a, P, T, F>(v: &'a mut [T], k: usize, is_less: &mut F) -> Result<&'a T>
where
    P: Partition,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // The k-th largest is the element with ascending 0-based rank `len - k`.
    let target = len - check_rank(k, len)?;

    let pos = select_index::<P, T, F>(v, target, is_less);
    Ok(&v[pos])
}

fn check_rank(k: usize, len: usize) -> Result<usize> {
    if k == 0 || k > len {
        debug!("rejecting rank {k} for length {len}");
        return Err(Error::InvalidRank { k, len });
    }

    Ok(k)
}

/// Partitions `v` until the element of ascending rank `target` is in place, returns `target`.
///
/// `target` stays inside `range` throughout and every step removes at least the pivot from it, so
/// the loop ends after at most `v.len()` partitions.
fn select_index<P, T, F>(v: &mut [T], target: usize, is_less: &mut F) -> usize
where
    P: Partition,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(target < v.len());

    let mut range = Range::new(0, v.len() - 1);

    loop {
        let pivot_pos = range.left + P::partition_by(&mut v[range.indices()], is_less);
        trace!(
            "{}: partitioned [{}, {}], pivot at {pivot_pos}, looking for {target}",
            P::name(),
            range.left,
            range.right
        );

        match pivot_pos.cmp(&target) {
            Ordering::Equal => return pivot_pos,
            Ordering::Greater => range.right = pivot_pos - 1,
            Ordering::Less => range.left = pivot_pos + 1,
        }
    }
}

/// Quickselect over the partition kernel `P`.
pub struct SelectImpl<P>(PhantomData<P>);

impl<P: Partition> Select for SelectImpl<P> {
    fn name() -> String {
        format!("quickselect_{}", P::name())
    }

    fn select_kth_largest<T>(arr: &mut [T], k: usize) -> Option<&T>
    where
        T: Ord,
    {
        select_with::<P, T, _>(arr, k, &mut |a, b| a.lt(b)).ok()
    }
}
