//! A binary heap that lives inside a `Vec` you already own.
//!
//! [`SliceHeap`] borrows a `Vec<T>` together with a "less" function over positions in it, and
//! keeps that `Vec` in binary heap order as elements are pushed and popped. There is no dedicated
//! container type to define: the heap is an adapter over the caller's storage, and whatever is
//! left in it when the adapter goes away is still the caller's.
//!
//! ```
//! use sliceheap::SliceHeap;
//!
//! let mut a = vec![3, 2, 4, 5, 1, 0, 6];
//! let mut heap = SliceHeap::on(&mut a, |s: &[i32], i, j| s[i] < s[j]);
//! for i in 7..10 {
//!   heap.push(i);
//! }
//! let mut expected = 0;
//! while let Ok(smallest) = heap.pop() {
//!   assert_eq!(smallest, expected);
//!   expected += 1;
//! }
//! assert!(a.is_empty());
//! ```
//!
//! The crate is `no_std` (it needs `alloc`). The default `std` feature adds `HashMap` support to
//! [`SliceHeap::push_keys`] and [`SliceHeap::push_values`] and an implementation of
//! `std::error::Error` for [`HeapError`]. The `serde_support` feature makes [`SliceHeap`]
//! serializable.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use crate::errors::*;
pub use crate::heap::*;

mod errors;
mod heap;
