//! Non-recursive quicksort, same Hoare partition as `hoare_recursive` but driven by an explicit
//! stack of pending ranges.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::{check_range, SortError};
use crate::partition::hoare_partition;

sort_impl!("hoare_stack_unstable");

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

/// Returns the largest number of ranges that were pending at once.
fn quicksort<T, F>(v_full: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Always continuing with the smaller side keeps at most log2(len) ranges pending.
    let mut stack: Vec<Range<usize>> = Vec::with_capacity(usize::BITS as usize);
    stack.push(0..v_full.len());
    let mut max_pending = stack.len();

    while let Some(range) = stack.pop() {
        let v = &mut v_full[range.clone()];
        let len = v.len();
        let (left_end, right_start) = hoare_partition(v, is_less);

        let left = range.start..(range.start + left_end);
        let right = (range.start + right_start)..range.end;

        let (larger, smaller) = if left.len() > right.len() {
            (left, right)
        } else {
            (right, left)
        };

        // The two sides may share one element, they are still processed one after the other.
        debug_assert!(smaller.len() <= len / 2 + 1);

        if larger.len() > 1 {
            stack.push(larger);
        }
        if smaller.len() > 1 {
            stack.push(smaller);
        }

        max_pending = max_pending.max(stack.len());
    }

    max_pending
}
