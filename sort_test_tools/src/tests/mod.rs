//! Generic test suites, instantiated per implementation with the `instantiate_*_tests!` macros.

use std::fmt::Debug;

pub mod select;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 16] = [0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 20, 24, 33, 50, 100];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 22] = [
    0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 20, 24, 33, 50, 100, 171, 280, 400, 1_000, 2_048, 10_000,
];

// A rightmost pivot turns these patterns into O(N^2) work, keep them small.
pub const QUADRATIC_TEST_SIZES: [usize; 13] = [0, 1, 2, 3, 4, 5, 8, 16, 33, 50, 100, 400, 1_000];

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts that `v` holds the same multiset of values as `original`.
pub fn assert_permutation<T: Ord + Clone + Debug>(v: &[T], original: &[T]) {
    let mut v_sorted = v.to_vec();
    v_sorted.sort();

    let mut original_sorted = original.to_vec();
    original_sorted.sort();

    if v_sorted != original_sorted {
        panic!(
            "Values were created, dropped or duplicated. seed: {} len: {}",
            crate::patterns::random_init_seed(),
            v.len()
        );
    }
}

pub(crate) fn to_u64(v: Vec<i32>) -> Vec<u64> {
    // Wrapping keeps the distribution, only the sign bit moves.
    v.into_iter().map(|val| val as u64).collect()
}

pub(crate) fn to_string(v: Vec<i32>) -> Vec<String> {
    v.into_iter().map(|val| format!("{:010}", val.saturating_abs())).collect()
}

#[macro_export]
macro_rules! instantiate_tests_gen {
    ($suite:ident, $impl_type:ty, $($test_fn:ident),*) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$suite _ $test_fn>]() {
                    $crate::tests::init_logging();
                    $crate::tests::$suite::$test_fn::<$impl_type>();
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_tests_gen!(
            sort,
            $sort_impl,
            basic,
            fixed_seed,
            random,
            random_u64,
            random_string,
            random_d4,
            random_d256,
            random_z1,
            random_s95,
            all_equal,
            ascending,
            descending,
            saw_mixed,
            pipe_organ,
            idempotent,
            sort_by_reversed,
            sort_by_key_projection,
            int_edge,
            panic_retain_orig_set
        );
    };
}

#[macro_export]
macro_rules! instantiate_partition_tests {
    ($partition_impl:ty) => {
        $crate::instantiate_tests_gen!(
            partition,
            $partition_impl,
            basic,
            random,
            random_string,
            random_d4,
            random_z1,
            all_equal,
            ascending,
            descending,
            partition_by_reversed,
            panic_retain_orig_set
        );
    };
}

#[macro_export]
macro_rules! instantiate_select_tests {
    ($select_impl:ty) => {
        $crate::instantiate_tests_gen!(
            select,
            $select_impl,
            basic,
            min_max,
            invalid_rank,
            random,
            random_string,
            random_d4,
            random_z1,
            all_equal,
            ascending,
            descending
        );
    };
}
