//! Basic recursive quicksort, Hoare partition with a midpoint pivot.

use std::cmp::Ordering;

use crate::error::{check_range, SortError};
use crate::partition::hoare_partition;

sort_impl!("hoare_recursive_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    unstable_sort(v, |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    unstable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `v[low..=high]` in place, leaving the rest of `v` untouched.
///
/// Fails with [`SortError::InvalidRange`] if `v` is empty, `low > high` or `high >= v.len()`.
#[inline]
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize) -> Result<(), SortError>
where
    T: Ord,
{
    sort_range_by(v, low, high, T::cmp)
}

pub fn sort_range_by<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(low, high, v.len())?;

    // The midpoint of the sub-slice is the same element as `(low + high) / 2` in `v`.
    sort_by(&mut v[low..=high], compare);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn unstable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (left_end, right_start) = hoare_partition(v, is_less);

    if left_end > 1 {
        quicksort(&mut v[..left_end], is_less);
    }

    if right_start + 1 < len {
        quicksort(&mut v[right_start..], is_less);
    }
}
