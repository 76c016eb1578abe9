use core::mem::ManuallyDrop;
use core::ptr;

partition_impl!("hoare_vacancy");

pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    partition_by(v, &mut |a, b| a.lt(b))
}

/// Two pointer partition with the last element as pivot.
///
/// The pivot is read out of the slice, which leaves its slot vacant. The left pointer advances
/// over elements not greater than the pivot and the first greater element is copied into the
/// vacant slot, vacating its own position. The right pointer then retreats over greater elements
/// and the first element not greater than the pivot is copied into the new vacancy. Exactly one
/// slot is vacant at any time, so every move is a single copy instead of a swap. When the
/// pointers meet they are on the vacant slot, which receives the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len <= 1 {
        return 0;
    }

    let mut left = 0;
    let mut right = len - 1;

    // SAFETY: `left <= right < len` holds throughout, so every pointer formed below is in-bounds.
    // `vacancy.pos` always points at the one slot whose value is a stale bitwise duplicate, that
    // is `v[right]` while the left pointer scans and `v[left]` while the right pointer scans.
    // Neither scan reads that slot. A copy refills the vacancy before the other scan starts, so the
    // first slot the right scan reads may be the one the left copy just filled, which holds a valid
    // value again. Copies only happen for `left < right`, so source and destination never overlap.
    // The guard writes the pivot into the vacant slot when it goes out of scope, should `is_less`
    // panic this restores a permutation of the input.
    unsafe {
        let v_base = v.as_mut_ptr();

        let mut vacancy = GapGuard {
            pos: v_base.add(right),
            value: ManuallyDrop::new(ptr::read(v_base.add(right))),
        };

        while left < right {
            // Find the first element greater than the pivot.
            while left < right && !is_less(&*vacancy.value, &*v_base.add(left)) {
                left += 1;
            }

            if left < right {
                ptr::copy_nonoverlapping(v_base.add(left), vacancy.pos, 1);
                vacancy.pos = v_base.add(left);
            }

            // Find the last element not greater than the pivot.
            while left < right && is_less(&*vacancy.value, &*v_base.add(right)) {
                right -= 1;
            }

            if left < right {
                ptr::copy_nonoverlapping(v_base.add(right), vacancy.pos, 1);
                vacancy.pos = v_base.add(right);
            }
        }

        debug_assert!(vacancy.pos == v_base.add(left));

        left

        // `vacancy` goes out of scope and places the pivot between the two partitions.
    }
}

struct GapGuard<T> {
    pos: *mut T,
    value: ManuallyDrop<T>,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `pos` is the vacant slot, its old value was moved out or duplicated elsewhere.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.pos, 1);
        }
    }
}
