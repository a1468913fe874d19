use alloc::collections::{btree_map, BTreeMap};
use alloc::vec::{self, Vec};
use core::array;
use core::iter::{Cloned, Rev};
use core::mem::size_of;
use core::slice;

#[cfg(feature = "std")]
use std::collections::{hash_map, HashMap};

/// The type of the ready-made position comparisons, [`ascending`] and [`descending`].
pub type PositionOrder<T> = fn(&[T], usize, usize) -> bool;

/// A less function for a min-heap: the element at `i` comes first if it is smaller than the one at
/// `j` according to `T`'s [`Ord`] implementation.
#[inline(always)]
pub fn ascending<T: Ord>(data: &[T], i: usize, j: usize) -> bool {
  data[i] < data[j]
}

/// A less function for a max-heap: the element at `i` comes first if it is greater than the one at
/// `j` according to `T`'s [`Ord`] implementation.
#[inline(always)]
pub fn descending<T: Ord>(data: &[T], i: usize, j: usize) -> bool {
  data[i] > data[j]
}

/// Builds a min-heap less function that compares elements by the key `key` extracts from them.
///
/// # Examples
///
/// ```
/// # use sliceheap::*;
/// let mut jobs = vec![("write", 3), ("plan", 1), ("ship", 9)];
/// let mut heap = SliceHeap::on(&mut jobs, by_key(|job: &(&str, u32)| job.1));
/// assert_eq!(heap.pop(), Ok(("plan", 1)));
/// ```
#[inline(always)]
pub fn by_key<T, K, G>(key: G) -> impl Fn(&[T], usize, usize) -> bool
where
  K: Ord,
  G: Fn(&T) -> K,
{
  move |data: &[T], i: usize, j: usize| key(&data[i]) < key(&data[j])
}

/// Something whose keys can be pushed onto a heap with
/// [`SliceHeap::push_keys`](crate::SliceHeap::push_keys).
///
/// Implemented for `BTreeMap` and (with the `std` feature) `HashMap`, both owned and borrowed.
/// Borrowed maps yield clones of their keys.
pub trait KeySource {
  /// The type of the keys.
  type Key;
  /// The iterator the keys are read from.
  type Keys: Iterator<Item = Self::Key>;
  /// Turns `self` into an iterator over its keys.
  fn into_keys_iter(self) -> Self::Keys;
}

/// Something whose values can be pushed onto a heap with
/// [`SliceHeap::push_values`](crate::SliceHeap::push_values).
///
/// Implemented for `BTreeMap` and (with the `std` feature) `HashMap`, for `Vec`, arrays and
/// slices. Borrowed sources yield clones of their values. Sequences yield their values starting
/// from the last one.
pub trait ValueSource {
  /// The type of the values.
  type Value;
  /// The iterator the values are read from.
  type Values: Iterator<Item = Self::Value>;
  /// Turns `self` into an iterator over its values.
  fn into_values_iter(self) -> Self::Values;
}

impl<K, V> KeySource for BTreeMap<K, V> {
  type Key = K;
  type Keys = btree_map::IntoKeys<K, V>;

  #[inline(always)]
  fn into_keys_iter(self) -> Self::Keys {
    self.into_keys()
  }
}

impl<'m, K: Clone, V> KeySource for &'m BTreeMap<K, V> {
  type Key = K;
  type Keys = Cloned<btree_map::Keys<'m, K, V>>;

  #[inline(always)]
  fn into_keys_iter(self) -> Self::Keys {
    self.keys().cloned()
  }
}

#[cfg(feature = "std")]
impl<K, V, S> KeySource for HashMap<K, V, S> {
  type Key = K;
  type Keys = hash_map::IntoKeys<K, V>;

  #[inline(always)]
  fn into_keys_iter(self) -> Self::Keys {
    self.into_keys()
  }
}

#[cfg(feature = "std")]
impl<'m, K: Clone, V, S> KeySource for &'m HashMap<K, V, S> {
  type Key = K;
  type Keys = Cloned<hash_map::Keys<'m, K, V>>;

  #[inline(always)]
  fn into_keys_iter(self) -> Self::Keys {
    self.keys().cloned()
  }
}

impl<K, V> ValueSource for BTreeMap<K, V> {
  type Value = V;
  type Values = btree_map::IntoValues<K, V>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.into_values()
  }
}

impl<'m, K, V: Clone> ValueSource for &'m BTreeMap<K, V> {
  type Value = V;
  type Values = Cloned<btree_map::Values<'m, K, V>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.values().cloned()
  }
}

#[cfg(feature = "std")]
impl<K, V, S> ValueSource for HashMap<K, V, S> {
  type Value = V;
  type Values = hash_map::IntoValues<K, V>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.into_values()
  }
}

#[cfg(feature = "std")]
impl<'m, K, V: Clone, S> ValueSource for &'m HashMap<K, V, S> {
  type Value = V;
  type Values = Cloned<hash_map::Values<'m, K, V>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.values().cloned()
  }
}

impl<T> ValueSource for Vec<T> {
  type Value = T;
  type Values = Rev<vec::IntoIter<T>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.into_iter().rev()
  }
}

impl<T, const N: usize> ValueSource for [T; N] {
  type Value = T;
  type Values = Rev<array::IntoIter<T, N>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    IntoIterator::into_iter(self).rev()
  }
}

impl<'s, T: Clone> ValueSource for &'s [T] {
  type Value = T;
  type Values = Cloned<Rev<slice::Iter<'s, T>>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.iter().rev().cloned()
  }
}

impl<'s, T: Clone> ValueSource for &'s Vec<T> {
  type Value = T;
  type Values = Cloned<Rev<slice::Iter<'s, T>>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.as_slice().into_values_iter()
  }
}

impl<'s, T: Clone, const N: usize> ValueSource for &'s [T; N] {
  type Value = T;
  type Values = Cloned<Rev<slice::Iter<'s, T>>>;

  #[inline(always)]
  fn into_values_iter(self) -> Self::Values {
    self.as_slice().into_values_iter()
  }
}

#[inline(always)]
fn log2_fast(x: usize) -> usize {
  8 * size_of::<usize>() - (x.leading_zeros() as usize) - 1
}

// Rebuilding takes O(len1 + len2) operations and about 2 * (len1 + len2) comparisons in the
// worst case, while sifting each of the `len2` new elements up takes O(len2 * log_2(len1 + len2))
// operations and about 1 * len2 * log_2(len1 + len2) comparisons in the worst case.
#[inline]
pub(crate) fn better_to_rebuild(len1: usize, len2: usize) -> bool {
  let total = len1 + len2;
  total > 1 && 2 * total < len2 * log2_fast(total)
}
