partition_impl!("lomuto_single_scan");

pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    partition_by(v, &mut |a, b| a.lt(b))
}

/// Single scan partition with the last element as pivot.
///
/// `v[..num_le]` holds the elements not greater than the pivot seen so far, `v[num_le..j]` the
/// greater ones. Every element not greater than the pivot is swapped down to the boundary, so the
/// scan performs at most `v.len() - 1` exchanges plus the final one that places the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len <= 1 {
        return 0;
    }

    let (v_without_pivot, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut num_le = 0;
    for j in 0..v_without_pivot.len() {
        if !is_less(pivot, &v_without_pivot[j]) {
            if num_le != j {
                v_without_pivot.swap(num_le, j);
            }
            num_le += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(num_le, len - 1);

    num_le
}
