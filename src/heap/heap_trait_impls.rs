use super::SliceHeap;
use core::fmt::{self, Debug, Formatter};

#[cfg(feature = "serde_support")]
use serde::{Serialize, Serializer};

impl<T: Debug, F> Debug for SliceHeap<'_, T, F> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.debug_list().entries(self.data.iter()).finish()
  }
}

impl<T, F> AsRef<[T]> for SliceHeap<'_, T, F> {
  #[inline(always)]
  fn as_ref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T, F> Extend<T> for SliceHeap<'_, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  #[inline(always)]
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.extend_desugared(iter);
  }
}

impl<'b, T: 'b + Copy, F> Extend<&'b T> for SliceHeap<'_, T, F>
where F: Fn(&[T], usize, usize) -> bool
{
  #[inline(always)]
  fn extend<I: IntoIterator<Item = &'b T>>(&mut self, iter: I) {
    self.extend_desugared(iter.into_iter().copied());
  }
}

/// Serializes the backing `Vec` as a sequence, in heap layout.
#[cfg(feature = "serde_support")]
impl<T: Serialize, F> Serialize for SliceHeap<'_, T, F> {
  #[inline(always)]
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: Serializer {
    self.as_slice().serialize(serializer)
  }
}
