//! Quadratic in-place sorts that count their comparisons.
//!
//! Each sort takes a comparator and returns the number of times it called
//! it. What counts as one comparison is fixed per algorithm so the counts
//! are reproducible:
//!
//! | Sort | Counted |
//! |------|---------|
//! | [`bubble_sort_by`] | every adjacent pair examined, every pass, no early exit |
//! | [`insertion_sort_by`] | every shift, plus the check that stops a scan before index 0 |
//! | [`selection_sort_by`] | every suffix element examined while finding the minimum |
//!
//! None of them are stable. Equal keys compare as neither less nor greater
//! and may end up in any relative order.

use core::cmp::Ordering;

/// Bubble sort, ascending under `compare`.
///
/// Runs all `n - 1` passes even when a pass makes no swap, so the count is
/// always `n(n-1)/2` regardless of input order. Swaps only on `Greater`.
///
/// # Example
///
/// ```
/// use loadout_collections::sort::bubble_sort_by;
///
/// let mut v = [3, 1, 2];
/// assert_eq!(bubble_sort_by(&mut v, |a, b| a.cmp(b)), 3);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn bubble_sort_by<T, F>(slice: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = slice.len();
    let mut comparisons = 0;

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            comparisons += 1;
            if compare(&slice[j], &slice[j + 1]) == Ordering::Greater {
                slice.swap(j, j + 1);
            }
        }
    }

    comparisons
}

/// Insertion sort, ascending under `compare`.
///
/// Each element from index 1 on moves left while its predecessor is
/// strictly greater. Every shift is one comparison; the comparison that
/// stops the scan (predecessor not greater) is counted too. A scan that
/// runs all the way to index 0 ends without a further comparison.
///
/// Already-sorted input costs `n - 1`; reverse-sorted input costs
/// `n(n-1)/2`.
pub fn insertion_sort_by<T, F>(slice: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;

    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if compare(&slice[j - 1], &slice[j]) != Ordering::Greater {
                break;
            }
            slice.swap(j - 1, j);
            j -= 1;
        }
    }

    comparisons
}

/// Selection sort, ascending under `compare`.
///
/// For each position, scans the unsorted suffix for its minimum (strict
/// `Less`, so the first of equal minima wins) and swaps it into place only
/// if it is not already there. Always costs `n(n-1)/2`.
pub fn selection_sort_by<T, F>(slice: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = slice.len();
    let mut comparisons = 0;

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            comparisons += 1;
            if compare(&slice[j], &slice[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            slice.swap(i, min);
        }
    }

    comparisons
}

/// `n(n-1)/2`: the fixed cost of [`bubble_sort_by`] and
/// [`selection_sort_by`] on `n` elements.
#[inline]
pub const fn quadratic_comparisons(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}
