use core::marker::PhantomData;

use rand::Rng;
use sort_test_tools::Partition;

/// Partitions around a uniformly random element instead of the last one.
///
/// A rightmost pivot does quadratic work on ascending, descending and all-equal inputs. Moving a
/// random element into the last slot first makes that behavior depend on the RNG instead of the
/// input. The result still satisfies the contract of `P`, only the choice of pivot changes.
pub struct Randomized<P>(PhantomData<P>);

impl<P: Partition> Partition for Randomized<P> {
    fn name() -> String {
        format!("randomized_{}", P::name())
    }

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord,
    {
        Self::partition_by(arr, &mut |a, b| a.lt(b))
    }

    fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        randomize_pivot(arr, &mut rand::thread_rng());
        P::partition_by(arr, is_less)
    }
}

/// Swaps a uniformly chosen element of `v` into the last position.
pub fn randomize_pivot<T, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) {
    let len = v.len();

    if len > 1 {
        let pivot_pos = rng.gen_range(0..len);
        v.swap(pivot_pos, len - 1);
    }
}
