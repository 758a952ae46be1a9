//! Indirect (index) sorting.
//!
//! An index sort never moves the elements of the sorted collection.
//! Instead it returns a permutation `idx` such that visiting
//! `array[idx[0]], array[idx[1]], ...` yields the elements in ascending
//! order. Selection and ranking operators use it to order a population
//! by fitness without relocating heavyweight individuals.
//!
//! The collection is opaque: the sorter only knows its length and an
//! index-pair comparator `cmp(array, i, j)`, so one function covers
//! slices, vectors, and any custom backing store.
//!
//! # Examples
//!
//! ```
//! use u_evocore::sort::sort_indices_f64;
//!
//! let fitness = [0.7, 0.1, 0.4];
//! let idx = sort_indices_f64(&fitness);
//! assert_eq!(idx, vec![1, 2, 0]);
//! ```

mod sorter;

pub use sorter::{
    reversed, sort_indices, sort_indices_by, sort_indices_f32, sort_indices_f64,
    sort_indices_with, IndexSorter,
};
