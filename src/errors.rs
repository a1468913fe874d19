use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "std")]
use std::error::Error;

/// The ways in which an operation on a [`SliceHeap`](crate::SliceHeap) can fail.
///
/// Both variants describe misuse by the caller rather than anything transient, so there is never
/// any point in retrying the operation that produced them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum HeapError {
  /// An element was requested from a heap whose backing `Vec` is empty.
  Empty,
  /// A position was passed that does not exist in the backing `Vec`.
  OutOfBounds {
    /// The offending position.
    index: usize,
    /// The length of the backing `Vec` at the time of the call.
    len: usize,
  },
}

impl HeapError {
  #[inline(always)]
  pub(crate) fn check_index(index: usize, len: usize) -> core::result::Result<(), HeapError> {
    if index < len {
      Ok(())
    } else {
      Err(HeapError::OutOfBounds { index, len })
    }
  }
}

impl Display for HeapError {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter) -> Result {
    match self {
      HeapError::Empty => write!(f, "Attempted to access the top of an empty heap!"),
      HeapError::OutOfBounds { index, len } => write!(
        f,
        "Heap position {} is out of bounds (length is {})!",
        index, len
      ),
    }
  }
}

#[cfg(feature = "std")]
impl Error for HeapError {}
