use self::heap_helpers::better_to_rebuild;
pub use self::{heap_helpers::*, heap_iterators::*};
use crate::errors::HeapError;
use alloc::vec::Vec;
use log::{debug, trace};

pub mod heap_helpers;
pub mod heap_iterators;
mod heap_trait_impls;

/// A priority queue implemented as a binary heap that lives directly inside a caller-owned
/// [`Vec`], rather than inside a container of its own.
///
/// A `SliceHeap` is a mutable borrow of a `Vec<T>` paired with a "less" function. The less
/// function compares elements by their *current positions* in the `Vec`: it is called as
/// `less(slice, i, j)` with the live contents of the `Vec` and must return `true` when the element
/// at `i` should come out of the heap before the element at `j`. Since the slice is handed over on
/// every call, the function always sees the elements exactly as the sift operations have
/// rearranged them so far.
///
/// Every mutation happens in place: once the `SliceHeap` is dropped, the caller's `Vec` holds the
/// remaining elements in heap order.
///
/// It is a logic error for the less function to not describe a strict weak ordering, or for an
/// element to be modified in a way that changes its ordering while it is in the heap (unless
/// [`fix`] is called for it afterwards).
///
/// # Examples
///
/// ```
/// use sliceheap::SliceHeap;
///
/// let mut scores = vec![3, 2, 4, 5, 1, 0, 6];
/// {
///   // A max-heap, since "less" here means "greater".
///   let mut heap = SliceHeap::on(&mut scores, |s: &[i32], i, j| s[i] > s[j]);
///   assert_eq!(heap.peek(), Ok(&6));
///
///   heap.push(8);
///   heap.push(7);
///   assert_eq!(heap.len(), 9);
///
///   assert_eq!(heap.pop(), Ok(8));
///   assert_eq!(heap.pop(), Ok(7));
///   assert_eq!(heap.pop(), Ok(6));
/// }
/// // The caller still owns whatever is left, laid out as a heap.
/// assert_eq!(scores.len(), 6);
/// assert_eq!(scores[0], 5);
/// ```
///
/// # Time complexity
///
/// | [push]   | [pop]    | [peek] | [initialize] |
/// |----------|----------|--------|--------------|
/// | O(log n) | O(log n) | O(1)   | O(n)         |
///
/// [push]: #method.push
/// [pop]: #method.pop
/// [peek]: #method.peek
/// [initialize]: #method.initialize
/// [`fix`]: #method.fix
pub struct SliceHeap<'a, T, F> {
  pub(crate) data: &'a mut Vec<T>,
  pub(crate) less: F,
}

impl<'a, T, F> SliceHeap<'a, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  /// Binds a `SliceHeap` to `data` and `less` without reordering anything.
  ///
  /// If `data` may already hold elements that are not in heap order, call
  /// [`initialize`](#method.initialize) before relying on the heap, or use [`on`](#method.on)
  /// instead.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = Vec::new();
  /// let mut heap = SliceHeap::bind(&mut v, |s: &[u8], i, j| s[i] < s[j]);
  /// heap.push(4);
  /// heap.push(1);
  /// assert_eq!(heap.peek(), Ok(&1));
  /// ```
  #[inline(always)]
  pub fn bind(data: &'a mut Vec<T>, less: F) -> Self {
    SliceHeap { data, less }
  }

  /// Binds a `SliceHeap` to `data` and `less`, then reorders `data` into a heap.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![3, 2, 4, 5, 1, 0, 6];
  /// let heap = SliceHeap::on(&mut v, |s: &[i32], i, j| s[i] > s[j]);
  /// assert_eq!(heap.as_slice(), [6, 5, 4, 2, 1, 0, 3]);
  /// ```
  #[inline]
  pub fn on(data: &'a mut Vec<T>, less: F) -> Self {
    let mut heap = Self::bind(data, less);
    heap.initialize();
    heap
  }

  /// Reorders the backing `Vec` so that the heap property holds for every element in it.
  ///
  /// This is the usual bottom-up construction: every parent, from the last one back to the root,
  /// is sifted down into place. Calling it on a `Vec` that is already a heap leaves it unchanged.
  ///
  /// # Time complexity
  ///
  /// O(n), with at most about 2n comparisons.
  #[inline]
  pub fn initialize(&mut self) {
    let len = self.len();
    trace!("initializing heap over {} elements", len);
    let mut n = len / 2;
    while n > 0 {
      n -= 1;
      self.sift_down_range(n, len);
    }
  }

  /// Returns the element that would be popped next, or [`HeapError::Empty`] if the backing `Vec`
  /// is empty.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::*;
  /// let mut v = Vec::<i32>::new();
  /// let mut heap = SliceHeap::min_on(&mut v);
  /// assert_eq!(heap.peek(), Err(HeapError::Empty));
  /// heap.push(5);
  /// heap.push(2);
  /// assert_eq!(heap.peek(), Ok(&2));
  /// ```
  ///
  /// # Time complexity
  ///
  /// Cost is O(1) in the worst case.
  #[inline]
  pub fn peek(&self) -> Result<&T, HeapError> {
    self.data.first().ok_or_else(|| reported(HeapError::Empty))
  }

  /// Appends `item` to the backing `Vec`, then moves it up towards the root for as long as it is
  /// "less" than its parent.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = Vec::new();
  /// let mut heap = SliceHeap::max_on(&mut v);
  /// heap.push(3);
  /// heap.push(5);
  /// heap.push(1);
  /// assert_eq!(heap.len(), 3);
  /// assert_eq!(heap.peek(), Ok(&5));
  /// ```
  ///
  /// # Time complexity
  ///
  /// O(log n) swaps in the worst case, plus the amortized O(1) cost of `Vec::push`.
  #[inline]
  pub fn push(&mut self, item: T) {
    self.data.push(item);
    let last = self.data.len() - 1;
    self.sift_up(last);
  }

  /// Removes the root of the heap and returns it, or returns [`HeapError::Empty`] if the backing
  /// `Vec` is empty.
  ///
  /// The root is swapped with the last element, popped off the end of the `Vec`, and the element
  /// that took its place is sifted down.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::*;
  /// let mut v = vec![1, 3];
  /// let mut heap = SliceHeap::max_on(&mut v);
  /// assert_eq!(heap.pop(), Ok(3));
  /// assert_eq!(heap.pop(), Ok(1));
  /// assert_eq!(heap.pop(), Err(HeapError::Empty));
  /// ```
  ///
  /// # Time complexity
  ///
  /// The worst case cost of `pop` on a heap containing *n* elements is O(log n).
  #[inline]
  pub fn pop(&mut self) -> Result<T, HeapError> {
    let end = match self.data.len() {
      0 => return Err(reported(HeapError::Empty)),
      len => len - 1,
    };
    self.data.swap(0, end);
    let item = self.data.pop();
    self.sift_down_range(0, end);
    item.ok_or(HeapError::Empty)
  }

  /// Removes and returns the element at `index`, keeping the rest of the backing `Vec` in heap
  /// order. Returns [`HeapError::OutOfBounds`] if there is no such position.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::*;
  /// let mut v = vec![10, 20, 30, 40];
  /// let mut heap = SliceHeap::min_on(&mut v);
  /// let index = heap.as_slice().iter().position(|&x| x == 30).unwrap();
  /// assert_eq!(heap.remove(index), Ok(30));
  /// assert_eq!(heap.remove(7), Err(HeapError::OutOfBounds { index: 7, len: 3 }));
  /// assert!(heap.is_heap());
  /// ```
  ///
  /// # Time complexity
  ///
  /// O(log n).
  pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
    let len = self.data.len();
    HeapError::check_index(index, len).map_err(reported)?;
    let end = len - 1;
    if index != end {
      self.data.swap(index, end);
      if !self.sift_down_range(index, end) {
        self.sift_up(index);
      }
    }
    self.data.pop().ok_or(HeapError::Empty)
  }

  /// Restores heap order after the element at `index` was changed in a way that may have altered
  /// its ordering.
  ///
  /// This is cheaper than removing the element and pushing it again.
  ///
  /// # Panics
  ///
  /// Panics if `index` is out of bounds.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![(3, 'c'), (1, 'a'), (2, 'b')];
  /// let mut heap = SliceHeap::min_on(&mut v);
  /// assert_eq!(heap.peek(), Ok(&(1, 'a')));
  /// drop(heap);
  /// // Bump the root's priority directly in the caller's vector...
  /// v[0].0 = 9;
  /// // ...and let the heap put it back where it belongs.
  /// let mut heap = SliceHeap::bind(&mut v, sliceheap::ascending);
  /// heap.fix(0);
  /// assert_eq!(heap.peek(), Ok(&(2, 'b')));
  /// ```
  ///
  /// # Time complexity
  ///
  /// O(log n).
  pub fn fix(&mut self, index: usize) {
    let len = self.data.len();
    assert!(
      index < len,
      "fix index (is {}) should be < len (is {})",
      index,
      len
    );
    if !self.sift_down_range(index, len) {
      self.sift_up(index);
    }
  }

  /// Returns whether the element at position `i` should come out of the heap before the element
  /// at position `j`, evaluated against the current contents of the backing `Vec`.
  ///
  /// # Panics
  ///
  /// Panics if either position is out of bounds.
  #[inline]
  pub fn less(&self, i: usize, j: usize) -> bool {
    let len = self.data.len();
    assert!(
      i < len && j < len,
      "less positions ({}, {}) should both be < len (is {})",
      i,
      j,
      len
    );
    self.prefers(i, j)
  }

  /// The same as [`less`](#method.less), but returns [`HeapError::OutOfBounds`] for an invalid
  /// position instead of panicking.
  #[inline]
  pub fn try_less(&self, i: usize, j: usize) -> Result<bool, HeapError> {
    let len = self.data.len();
    HeapError::check_index(i, len)?;
    HeapError::check_index(j, len)?;
    Ok(self.prefers(i, j))
  }

  /// Checks whether the heap property currently holds for every element of the backing `Vec`.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![1, 2, 3];
  /// let mut heap = SliceHeap::bind(&mut v, sliceheap::descending);
  /// assert!(!heap.is_heap());
  /// heap.initialize();
  /// assert!(heap.is_heap());
  /// ```
  pub fn is_heap(&self) -> bool {
    (1..self.data.len()).all(|child| !self.prefers(child, (child - 1) / 2))
  }

  /// Pushes every key of `source` onto the heap, one [`push`](#method.push) at a time.
  ///
  /// The order in which a map yields its keys is up to the map (and is unspecified for
  /// `HashMap`), so the intermediate layout of the heap may vary between runs. The order in which
  /// the keys are later popped does not.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// use std::collections::HashMap;
  ///
  /// let map: HashMap<&str, i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
  /// let mut keys = Vec::new();
  /// let mut heap = SliceHeap::min_on(&mut keys);
  /// heap.push_keys(&map);
  /// assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), ["a", "b", "c"]);
  /// ```
  pub fn push_keys<S>(&mut self, source: S)
  where S: KeySource<Key = T> {
    for key in source.into_keys_iter() {
      self.push(key);
    }
  }

  /// Pushes every value of `source` onto the heap, one [`push`](#method.push) at a time.
  ///
  /// `source` can be a map (owned or borrowed), in which case its values are used, or a
  /// `Vec`, array or slice. Sequences are pushed starting from their last element. Borrowed
  /// sources are left untouched; their elements are cloned.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let extra = [7, 3, 9];
  /// let mut v = vec![5];
  /// let mut heap = SliceHeap::max_on(&mut v);
  /// heap.push_values(&extra);
  /// assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), [9, 7, 5, 3]);
  /// assert_eq!(extra, [7, 3, 9]);
  /// ```
  pub fn push_values<S>(&mut self, source: S)
  where S: ValueSource<Value = T> {
    for value in source.into_values_iter() {
      self.push(value);
    }
  }

  /// Returns an iterator which pops elements in heap order.
  /// Any elements the iterator has not yielded are popped (and dropped) when it is dropped.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![1, 2, 3, 4, 5];
  /// let mut heap = SliceHeap::min_on(&mut v);
  /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
  /// assert!(heap.is_empty());
  /// ```
  #[inline(always)]
  pub fn drain_sorted(&mut self) -> SliceHeapDrainSorted<'_, 'a, T, F> {
    SliceHeapDrainSorted { inner: self }
  }

  /// Moves the element at `position` up while it is "less" than its parent.
  #[inline]
  fn sift_up(&mut self, mut position: usize) {
    while position > 0 {
      let parent = (position - 1) / 2;
      if !self.prefers(position, parent) {
        break;
      }
      self.data.swap(parent, position);
      position = parent;
    }
  }

  /// Moves the element at `position` down, within `data[..end]`, while one of its children is
  /// "less" than it. Returns whether it moved at all.
  #[inline]
  fn sift_down_range(&mut self, position: usize, end: usize) -> bool {
    let mut hole = position;
    let mut child = 2 * hole + 1;
    while child < end {
      let right = child + 1;
      // compare with the preferred of the two children
      if right < end && self.prefers(right, child) {
        child = right;
      }
      // if we are already in order, stop.
      if !self.prefers(child, hole) {
        break;
      }
      self.data.swap(hole, child);
      hole = child;
      child = 2 * hole + 1;
    }
    hole > position
  }

  #[inline(always)]
  fn prefers(&self, i: usize, j: usize) -> bool {
    (self.less)(self.data.as_slice(), i, j)
  }

  /// Appends everything in `iter` and restores heap order, either by sifting each new element up
  /// or by rebuilding from scratch, whichever is expected to be cheaper.
  pub(crate) fn extend_desugared<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    let old_len = self.data.len();
    self.data.extend(iter);
    let added = self.data.len() - old_len;
    if better_to_rebuild(old_len, added) {
      self.initialize();
    } else {
      for position in old_len..self.data.len() {
        self.sift_up(position);
      }
    }
  }
}

impl<'a, T: Ord> SliceHeap<'a, T, PositionOrder<T>> {
  /// Binds a min-heap (smallest element first) to `data` using `T`'s [`Ord`] implementation, and
  /// initializes it.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![3, 1, 2];
  /// let mut heap = SliceHeap::min_on(&mut v);
  /// assert_eq!(heap.pop(), Ok(1));
  /// ```
  #[inline(always)]
  pub fn min_on(data: &'a mut Vec<T>) -> Self {
    SliceHeap::on(data, ascending as PositionOrder<T>)
  }

  /// Binds a max-heap (greatest element first) to `data` using `T`'s [`Ord`] implementation, and
  /// initializes it.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![3, 1, 2];
  /// let mut heap = SliceHeap::max_on(&mut v);
  /// assert_eq!(heap.pop(), Ok(3));
  /// ```
  #[inline(always)]
  pub fn max_on(data: &'a mut Vec<T>) -> Self {
    SliceHeap::on(data, descending as PositionOrder<T>)
  }
}

impl<'a, T, F> SliceHeap<'a, T, F> {
  /// Returns the number of elements in the backing `Vec`.
  ///
  /// # Examples
  ///
  /// Basic usage:
  /// ```
  /// # use sliceheap::SliceHeap;
  /// let mut v = vec![1, 3];
  /// let heap = SliceHeap::min_on(&mut v);
  /// assert_eq!(heap.len(), 2);
  /// ```
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Checks if the backing `Vec` is empty.
  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Returns the backing `Vec` as a slice, in heap layout.
  #[inline(always)]
  pub fn as_slice(&self) -> &[T] {
    self.data.as_slice()
  }

  /// Exchanges the elements at positions `i` and `j` of the backing `Vec`.
  ///
  /// This is the primitive the sift operations are built from. Calling it directly may break the
  /// heap property; [`initialize`](#method.initialize) or [`fix`](#method.fix) restore it.
  ///
  /// # Panics
  ///
  /// Panics if either position is out of bounds.
  #[inline(always)]
  pub fn swap(&mut self, i: usize, j: usize) {
    self.data.swap(i, j);
  }

  /// The same as [`swap`](#method.swap), but returns [`HeapError::OutOfBounds`] for an invalid
  /// position instead of panicking.
  #[inline]
  pub fn try_swap(&mut self, i: usize, j: usize) -> Result<(), HeapError> {
    let len = self.data.len();
    HeapError::check_index(i, len)?;
    HeapError::check_index(j, len)?;
    self.data.swap(i, j);
    Ok(())
  }

  /// Gives back the borrow of the backing `Vec`, ending the life of the `SliceHeap`.
  #[inline(always)]
  pub fn into_inner(self) -> &'a mut Vec<T> {
    self.data
  }
}

#[inline(always)]
fn reported(err: HeapError) -> HeapError {
  debug!("{}", err);
  err
}
