use std::cmp::Ordering;

use crate::partition::hoare_vacancy::PartitionImpl;

sort_impl!("quicksort_recursive_hoare_vacancy");

pub fn sort<T: Ord>(data: &mut [T]) {
    super::recursive::<PartitionImpl, _, _>(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    super::recursive::<PartitionImpl, _, _>(data, &mut |a, b| compare(a, b) == Ordering::Less);
}
