//! Quicksort driven by a pluggable partition kernel, in a recursive and an explicit work list
//! form. Both forms produce the same output for the same kernel.

use std::collections::VecDeque;

use log::trace;
use sort_test_tools::Partition;

use crate::Range;

pub mod iterative_fifo;
pub mod iterative_lifo;
pub mod iterative_lomuto;
pub mod recursive_hoare_vacancy;
pub mod recursive_lomuto;
pub mod recursive_randomized;

/// Order in which [`iterative`] takes pending ranges off its work list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Breadth-first, pending ranges are processed in the order they were produced.
    #[default]
    Fifo,
    /// Depth-first, the most recently produced range is processed next.
    Lifo,
}

/// Sorts `v` recursively.
///
/// The two sides of a partition are disjoint, so which one is handled first is irrelevant for the
/// result. Recursing into the shorter side and looping on the longer one bounds the recursion
/// depth to `O(log(N))`, even when a rightmost pivot degrades every partition.
pub fn recursive<P, T, F>(mut v: &mut [T], is_less: &mut F)
where
    P: Partition,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();

        if len < 2 {
            return;
        }

        let pivot_pos = P::partition_by(v, is_less);
        trace!("{}: partitioned {len} elements, pivot at {pivot_pos}", P::name());

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            recursive::<P, T, F>(left, is_less);
            v = right;
        } else {
            recursive::<P, T, F>(right, is_less);
            v = left;
        }
    }
}

/// Sorts `v` without recursion, keeping the ranges still to be partitioned on an explicit work
/// list.
///
/// Only non-empty ranges are ever pushed. The work list is local to the call and bounded by the
/// number of pending ranges.
pub fn iterative<P, T, F>(v: &mut [T], traversal: Traversal, is_less: &mut F)
where
    P: Partition,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let mut pending = VecDeque::new();
    pending.push_back(Range::new(0, v.len() - 1));

    while let Some(range) = match traversal {
        Traversal::Fifo => pending.pop_front(),
        Traversal::Lifo => pending.pop_back(),
    } {
        let pivot_pos = range.left + P::partition_by(&mut v[range.indices()], is_less);
        trace!(
            "{}: partitioned [{}, {}], pivot at {pivot_pos}, {} ranges pending",
            P::name(),
            range.left,
            range.right,
            pending.len()
        );

        if pivot_pos > range.left {
            pending.push_back(Range::new(range.left, pivot_pos - 1));
        }
        if pivot_pos < range.right {
            pending.push_back(Range::new(pivot_pos + 1, range.right));
        }
    }
}
