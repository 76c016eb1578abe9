use std::cmp::Ordering;

pub mod patterns;
pub mod tests;

// Re-exported so the instantiation macros work without the caller depending on paste.
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Partitions `arr` around its last element.
///
/// After the call every element left of the returned index is not greater than the pivot and
/// every element right of it is greater. The pivot itself ends up at the returned index.
pub trait Partition {
    fn name() -> String;

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

pub trait Select {
    fn name() -> String;

    /// Returns the `k`-th largest element, 1-based, or `None` if `k` is not in `1..=arr.len()`.
    fn select_kth_largest<T>(arr: &mut [T], k: usize) -> Option<&T>
    where
        T: Ord;
}
