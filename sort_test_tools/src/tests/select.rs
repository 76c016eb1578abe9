use std::fmt::Debug;

use crate::patterns;
use crate::tests::{assert_permutation, to_string, QUADRATIC_TEST_SIZES, TEST_SIZES};
use crate::Select;

fn select_comp<T, S>(v: &[T], k: usize)
where
    T: Ord + Clone + Debug,
    S: Select,
{
    let seed = patterns::random_init_seed();
    let len = v.len();

    let mut descending = v.to_vec();
    descending.sort_by(|a, b| b.cmp(a));

    let mut test_data = v.to_vec();
    let selected = S::select_kth_largest(&mut test_data, k).cloned();

    assert_eq!(
        selected.as_ref(),
        Some(&descending[k - 1]),
        "seed: {seed} len: {len} k: {k}"
    );

    // The selected element sits where a full ascending sort would put it.
    assert!(test_data[len - k] == descending[k - 1], "seed: {seed} len: {len} k: {k}");
    assert_permutation(&test_data, v);
}

/// Checks a spread of ranks, every rank for small inputs.
fn test_impl<T, S>(sizes: &[usize], pattern_fn: impl Fn(usize) -> Vec<T>)
where
    T: Ord + Clone + Debug,
    S: Select,
{
    for &test_len in sizes.iter().filter(|&&len| len > 0) {
        let test_data = pattern_fn(test_len);

        if test_len <= 50 {
            for k in 1..=test_len {
                select_comp::<T, S>(&test_data, k);
            }
        } else {
            for k in [1, 2, test_len / 4, test_len / 2, test_len - 1, test_len] {
                select_comp::<T, S>(&test_data, k.max(1));
            }
        }
    }
}

pub fn basic<S: Select>() {
    let mut v = [3, 2, 1, 5, 6, 4];
    assert_eq!(S::select_kth_largest(&mut v, 2), Some(&5));

    let mut v = [77];
    assert_eq!(S::select_kth_largest(&mut v, 1), Some(&77));

    let mut v = [3, 2, 3, 1, 2, 4, 5, 5, 6];
    assert_eq!(S::select_kth_largest(&mut v, 4), Some(&4));
}

pub fn min_max<S: Select>() {
    for &test_len in TEST_SIZES.iter().filter(|&&len| len > 0) {
        let v = patterns::random(test_len);
        let max = v.iter().max().copied();
        let min = v.iter().min().copied();

        assert_eq!(S::select_kth_largest(&mut v.clone(), 1).copied(), max);
        assert_eq!(S::select_kth_largest(&mut v.clone(), test_len).copied(), min);
    }
}

pub fn invalid_rank<S: Select>() {
    let mut v: [i32; 0] = [];
    assert_eq!(S::select_kth_largest(&mut v, 0), None);
    assert_eq!(S::select_kth_largest(&mut v, 1), None);

    let mut v = [3, 2, 1, 5, 6, 4];
    assert_eq!(S::select_kth_largest(&mut v, 0), None);
    assert_eq!(S::select_kth_largest(&mut v, 7), None);
    assert_eq!(S::select_kth_largest(&mut v, usize::MAX), None);

    // Rejected before any element moved.
    assert_eq!(v, [3, 2, 1, 5, 6, 4]);
}

pub fn random<S: Select>() {
    test_impl::<i32, S>(&TEST_SIZES, patterns::random);
}

pub fn random_string<S: Select>() {
    test_impl::<String, S>(&TEST_SIZES, |len| to_string(patterns::random(len)));
}

pub fn random_d4<S: Select>() {
    test_impl::<i32, S>(&TEST_SIZES, |len| patterns::random_uniform(len, 0..4));
}

pub fn random_z1<S: Select>() {
    test_impl::<i32, S>(&TEST_SIZES, |len| patterns::random_zipf(len, 1.0));
}

pub fn all_equal<S: Select>() {
    test_impl::<i32, S>(&QUADRATIC_TEST_SIZES, patterns::all_equal);
}

pub fn ascending<S: Select>() {
    test_impl::<i32, S>(&QUADRATIC_TEST_SIZES, patterns::ascending);
}

pub fn descending<S: Select>() {
    test_impl::<i32, S>(&QUADRATIC_TEST_SIZES, patterns::descending);
}
