//! Comparison-counted lookups.
//!
//! Both searches report how many key comparisons they made alongside the
//! result, so callers can contrast sequential and halving search costs on
//! the same data.

use core::cmp::Ordering;

/// Outcome of a counted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Probe {
    /// Position of the match, or `None` if the key is absent.
    pub index: Option<usize>,
    /// Key comparisons performed.
    pub comparisons: u64,
}

impl Probe {
    /// A miss after `comparisons` comparisons.
    #[inline]
    pub const fn miss(comparisons: u64) -> Self {
        Self {
            index: None,
            comparisons,
        }
    }

    /// A hit at `index` after `comparisons` comparisons.
    #[inline]
    pub const fn hit(index: usize, comparisons: u64) -> Self {
        Self {
            index: Some(index),
            comparisons,
        }
    }

    /// Returns `true` if the key was found.
    #[inline]
    pub const fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Scans from the front and stops at the first element matching `pred`.
///
/// One comparison is counted per element visited, the matching one
/// included. A miss costs exactly as many comparisons as there are elements.
///
/// # Example
///
/// ```
/// use loadout_collections::search::linear_search;
///
/// let probe = linear_search(["a", "b", "c"].iter(), |s| **s == "b");
/// assert_eq!(probe.index, Some(1));
/// assert_eq!(probe.comparisons, 2);
/// ```
pub fn linear_search<I, F>(iter: I, mut pred: F) -> Probe
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    let mut comparisons = 0;
    for (i, item) in iter.into_iter().enumerate() {
        comparisons += 1;
        if pred(&item) {
            return Probe::hit(i, comparisons);
        }
    }
    Probe::miss(comparisons)
}

/// Classic midpoint binary search for `key` over `slice`.
///
/// `extract` pulls the search key out of each element and `compare` orders
/// an element key against `key`. One comparison is counted per midpoint
/// probed.
///
/// The slice must already be sorted ascending by the same key under the
/// same ordering. This is not checked: on unsorted input the result is
/// unspecified (a present key may be reported missing, or vice versa).
///
/// # Example
///
/// ```
/// use loadout_collections::search::binary_search_by_key;
///
/// let names = ["Escudo", "Motor", "Radar"];
/// let probe = binary_search_by_key(&names, "Radar", |s| *s, |a, b| a.cmp(b));
/// assert_eq!(probe.index, Some(2));
/// assert_eq!(probe.comparisons, 2);
/// ```
pub fn binary_search_by_key<T, K, E, C>(slice: &[T], key: &K, extract: E, mut compare: C) -> Probe
where
    K: ?Sized,
    E: Fn(&T) -> &K,
    C: FnMut(&K, &K) -> Ordering,
{
    let mut lo = 0usize;
    let mut hi = slice.len();
    let mut comparisons = 0;

    // Half-open [lo, hi); the midpoint matches (lo + hi - 1) / 2 on the
    // equivalent closed range.
    while lo < hi {
        let mid = lo + (hi - lo - 1) / 2;
        comparisons += 1;
        match compare(extract(&slice[mid]), key) {
            Ordering::Equal => return Probe::hit(mid, comparisons),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    Probe::miss(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_str(names: &[&'static str], key: &str) -> Probe {
        binary_search_by_key(names, key, |s| *s, |a, b| a.cmp(b))
    }

    #[test]
    fn linear_hit_counts_match() {
        let probe = linear_search([3, 1, 4], |&x| x == 3);
        assert_eq!(probe, Probe::hit(0, 1));
    }

    #[test]
    fn linear_miss_counts_every_element() {
        let probe = linear_search([3, 1, 4], |&x| x == 9);
        assert_eq!(probe, Probe::miss(3));
    }

    #[test]
    fn linear_empty_is_free() {
        let probe = linear_search(Vec::<u8>::new(), |_| true);
        assert_eq!(probe, Probe::miss(0));
    }

    #[test]
    fn binary_empty_is_free_miss() {
        assert_eq!(by_str(&[], "x"), Probe::miss(0));
    }

    #[test]
    fn binary_single_element() {
        assert_eq!(by_str(&["a"], "a"), Probe::hit(0, 1));
        assert_eq!(by_str(&["a"], "b"), Probe::miss(1));
    }

    #[test]
    fn binary_midpoint_first_probe() {
        // Closed range [0, 4] -> first midpoint 2.
        let names = ["a", "b", "c", "d", "e"];
        assert_eq!(by_str(&names, "c"), Probe::hit(2, 1));
    }

    #[test]
    fn binary_even_length_rounds_down() {
        // Closed range [0, 3] -> first midpoint 1.
        let names = ["a", "b", "c", "d"];
        assert_eq!(by_str(&names, "b"), Probe::hit(1, 1));
        assert_eq!(by_str(&names, "d"), Probe::hit(3, 3));
    }

    #[test]
    fn binary_finds_every_present_key_within_log_bound() {
        let names = ["Arco", "Bala", "Capa", "Dado", "Elmo", "Faca", "Gema", "Hora", "Isca", "Jipe"];
        let n = names.len() as u64;
        // ceil(log2(n + 1))
        let bound = u64::from(64 - n.leading_zeros());

        for (i, name) in names.iter().enumerate() {
            let probe = by_str(&names, name);
            assert_eq!(probe.index, Some(i), "{name}");
            assert!(probe.comparisons <= bound, "{name}: {}", probe.comparisons);
        }
    }

    #[test]
    fn binary_miss_between_and_outside() {
        let names = ["b", "d", "f"];
        assert!(!by_str(&names, "a").found());
        assert!(!by_str(&names, "c").found());
        assert!(!by_str(&names, "g").found());
    }

    #[test]
    fn binary_is_case_sensitive() {
        let names = ["Motor", "motor"];
        assert_eq!(by_str(&names, "motor").index, Some(1));
        assert!(!by_str(&names, "MOTOR").found());
    }

    #[test]
    fn binary_by_numeric_key() {
        let pairs = [(1, 'a'), (4, 'b'), (9, 'c')];
        let probe = binary_search_by_key(&pairs, &9, |p| &p.0, |a, b| a.cmp(b));
        assert_eq!(probe.index, Some(2));
    }
}
