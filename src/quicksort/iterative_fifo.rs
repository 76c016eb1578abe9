use std::cmp::Ordering;

use super::Traversal;
use crate::partition::hoare_vacancy::PartitionImpl;

sort_impl!("quicksort_iterative_fifo_hoare_vacancy");

pub fn sort<T: Ord>(data: &mut [T]) {
    super::iterative::<PartitionImpl, _, _>(data, Traversal::Fifo, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    super::iterative::<PartitionImpl, _, _>(data, Traversal::Fifo, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}
