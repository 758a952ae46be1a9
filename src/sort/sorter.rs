//! Index sorting algorithms and convenience entry points.

use std::cmp::Ordering;

/// Collections shorter than this are sorted by insertion sort.
const INSERTION_SORT_THRESHOLD: usize = 80;

/// Sorting algorithm used to order an index permutation.
///
/// Both variants sort ascending under the supplied comparator and leave
/// the collection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexSorter {
    /// Stable insertion sort.
    ///
    /// # Complexity
    /// O(n²) worst case, O(n) on already sorted input
    Insertion,

    /// In-place heap sort on the index array.
    ///
    /// # Complexity
    /// O(n log n) worst case, not stable
    Heap,
}

impl IndexSorter {
    /// Picks insertion sort for short collections, heap sort otherwise.
    pub fn for_length(length: usize) -> Self {
        if length < INSERTION_SORT_THRESHOLD {
            IndexSorter::Insertion
        } else {
            IndexSorter::Heap
        }
    }

    /// Returns the permutation that orders the first `length` elements of
    /// `array` ascending under `cmp`.
    ///
    /// `cmp(array, i, j)` compares the elements at indices `i` and `j`.
    pub fn sort<T, C>(&self, array: &T, length: usize, cmp: C) -> Vec<usize>
    where
        T: ?Sized,
        C: Fn(&T, usize, usize) -> Ordering,
    {
        let mut idx: Vec<usize> = (0..length).collect();
        match self {
            IndexSorter::Insertion => insertion_sort(array, &mut idx, &cmp),
            IndexSorter::Heap => heap_sort(array, &mut idx, &cmp),
        }
        idx
    }
}

fn insertion_sort<T, C>(array: &T, idx: &mut [usize], cmp: &C)
where
    T: ?Sized,
    C: Fn(&T, usize, usize) -> Ordering,
{
    for i in 1..idx.len() {
        let mut j = i;
        while j > 0 && cmp(array, idx[j - 1], idx[j]) == Ordering::Greater {
            idx.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn heap_sort<T, C>(array: &T, idx: &mut [usize], cmp: &C)
where
    T: ?Sized,
    C: Fn(&T, usize, usize) -> Ordering,
{
    let n = idx.len();
    for k in (0..n / 2).rev() {
        sift_down(array, idx, k, n, cmp);
    }
    for end in (1..n).rev() {
        idx.swap(0, end);
        sift_down(array, idx, 0, end, cmp);
    }
}

/// Restores the max-heap property below `k` within `idx[..n]`.
fn sift_down<T, C>(array: &T, idx: &mut [usize], mut k: usize, n: usize, cmp: &C)
where
    T: ?Sized,
    C: Fn(&T, usize, usize) -> Ordering,
{
    loop {
        let mut child = 2 * k + 1;
        if child >= n {
            break;
        }
        if child + 1 < n && cmp(array, idx[child], idx[child + 1]) == Ordering::Less {
            child += 1;
        }
        if cmp(array, idx[k], idx[child]) != Ordering::Less {
            break;
        }
        idx.swap(k, child);
        k = child;
    }
}

/// Sorts an opaque collection of `length` elements by index comparator.
///
/// ```
/// use u_evocore::sort::sort_indices_by;
///
/// struct Scores { values: Vec<u32> }
///
/// let scores = Scores { values: vec![30, 10, 20] };
/// let idx = sort_indices_by(&scores, 3, |s, i, j| s.values[i].cmp(&s.values[j]));
/// assert_eq!(idx, vec![1, 2, 0]);
/// ```
pub fn sort_indices_by<T, C>(array: &T, length: usize, cmp: C) -> Vec<usize>
where
    T: ?Sized,
    C: Fn(&T, usize, usize) -> Ordering,
{
    IndexSorter::for_length(length).sort(array, length, cmp)
}

/// Index sort of a slice of totally ordered values.
pub fn sort_indices<T: Ord>(array: &[T]) -> Vec<usize> {
    sort_indices_by(array, array.len(), |a: &[T], i, j| a[i].cmp(&a[j]))
}

/// Index sort of `f64` values using the IEEE 754 total order.
pub fn sort_indices_f64(array: &[f64]) -> Vec<usize> {
    sort_indices_by(array, array.len(), |a: &[f64], i, j| a[i].total_cmp(&a[j]))
}

/// Index sort of `f32` values using the IEEE 754 total order.
pub fn sort_indices_f32(array: &[f32]) -> Vec<usize> {
    sort_indices_by(array, array.len(), |a: &[f32], i, j| a[i].total_cmp(&a[j]))
}

/// Index sort of a slice with an element comparator.
pub fn sort_indices_with<T, F>(array: &[T], cmp: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_indices_by(array, array.len(), |a: &[T], i, j| cmp(&a[i], &a[j]))
}

/// Index comparator imposing the reverse order of `cmp`.
pub fn reversed<T, C>(cmp: C) -> impl Fn(&T, usize, usize) -> Ordering
where
    T: ?Sized,
    C: Fn(&T, usize, usize) -> Ordering,
{
    move |array: &T, i: usize, j: usize| cmp(array, j, i)
}
