//! Hoare partition around the value found at the midpoint of the slice.

/// Partitions `v` in place and returns `(left_end, right_start)`.
///
/// The two ranges `v[..left_end]` and `v[right_start..]` cover the whole slice and may share a
/// single index, in which case both still have to be sorted. Outside of that shared index every
/// element of the left range is not greater than the pivot and every element of the right range
/// is not less than it. The shared index is where the cursors met without either scanning it, so
/// its value is unconstrained.
///
/// The pivot is the *value* initially stored at `(v.len() - 1) / 2`. It is never copied, instead
/// its position is tracked across swaps, so no `Clone` bound is needed.
///
/// Panics if `v.len() < 2`. With a comparator that is not a total order this may panic on a
/// bounds check, but it will never read outside of `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn hoare_partition<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    assert!(len >= 2, "partition requires at least two elements, got {len}");

    let mut pivot_pos = (len - 1) / 2;
    log::trace!("partition len: {len} pivot_pos: {pivot_pos}");

    let mut l = 0;
    let mut r = len - 1;
    loop {
        // Both scans stop at the latest on an element that was placed by the previous swap, or
        // on the pivot itself during the first round.
        while is_less(&v[l], &v[pivot_pos]) {
            l += 1;
        }

        while is_less(&v[pivot_pos], &v[r]) {
            r -= 1;
        }

        if l <= r {
            v.swap(l, r);

            if pivot_pos == l {
                pivot_pos = r;
            } else if pivot_pos == r {
                pivot_pos = l;
            }

            l += 1;

            if r == 0 {
                // The right cursor would step in front of the slice, the left side is empty.
                return (0, l);
            }
            r -= 1;
        }

        if l >= r {
            break;
        }
    }

    // Only reachable with a comparison function that is not a total order, without it neither
    // side would shrink.
    assert!(
        r + 1 < len && l > 0,
        "comparison function does not implement a total order"
    );

    (r + 1, l)
}
