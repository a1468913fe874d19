use super::SliceHeap;
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;

/// A sorted "draining" iterator over the elements of a [`SliceHeap`].
///
/// This struct is created by the [`drain_sorted`] method on [`SliceHeap`]. See its
/// documentation for more.
///
/// [`drain_sorted`]: struct.SliceHeap.html#method.drain_sorted
/// [`SliceHeap`]: struct.SliceHeap.html
pub struct SliceHeapDrainSorted<'h, 'a, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  pub(crate) inner: &'h mut SliceHeap<'a, T, F>,
}

impl<T, F> Iterator for SliceHeapDrainSorted<'_, '_, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  type Item = T;

  #[inline(always)]
  fn next(&mut self) -> Option<T> {
    self.inner.pop().ok()
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let exact = self.inner.len();
    (exact, Some(exact))
  }
}

impl<T, F> ExactSizeIterator for SliceHeapDrainSorted<'_, '_, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  #[inline(always)]
  fn len(&self) -> usize {
    self.inner.len()
  }
}

impl<T, F> FusedIterator for SliceHeapDrainSorted<'_, '_, T, F> where F: Fn(&[T], usize, usize) -> bool
{}

impl<T: Debug, F> Debug for SliceHeapDrainSorted<'_, '_, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_tuple("SliceHeapDrainSorted")
      .field(&self.inner.as_slice())
      .finish()
  }
}

impl<T, F> Drop for SliceHeapDrainSorted<'_, '_, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  /// Removes heap elements in heap order.
  #[inline]
  fn drop(&mut self) {
    while self.inner.pop().is_ok() {}
  }
}
