#![doc = include_str!("../README.md")]
//! # Design overview
//!
//! [`SegmentedDeque`] keeps its elements in fixed-size blocks of
//! `max(16, 4096 / size_of::<T>())` slots and tracks them through a
//! contiguous *control array* of block pointers. Three nested spans over
//! the control array describe the state: the control bounds, the slots
//! holding currently-owned blocks, and the slots whose blocks hold live
//! elements. The first and last live blocks may be partially occupied;
//! interior blocks are always full.
//!
//! Because growth manipulates block pointers rather than elements,
//! references to existing elements survive every end insertion, including
//! the ones that reallocate the control array. Iterators do not: any
//! mutation that changes the length may reseat block pointers under them.
//!
//! ## Operation costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_back` / `push_front` | amortised O(1), worst case one block allocation |
//! | `pop_back` / `pop_front` | O(1) |
//! | indexing | O(1), one extra indirection |
//! | `insert` / `remove` | O(min(i, len - i)) element moves |
//! | iteration | O(len), block-seam hop every B elements |
//!
//! ## Example
//!
//! ```
//! use segmented_deque::{AnyDeque, SegmentedDeque};
//!
//! let mut d: SegmentedDeque<u32> = (0..100).collect();
//! d.push_front(999);
//! assert_eq!(d[0], 999);
//! assert_eq!(d.len(), 101);
//!
//! // generic code can stay backend-agnostic
//! fn drain_all<T>(deque: &mut dyn AnyDeque<T>) -> usize {
//!     let mut n = 0;
//!     while deque.pop_front().is_some() {
//!         n += 1;
//!     }
//!     n
//! }
//! assert_eq!(drain_all(&mut d), 101);
//! ```

mod deque;
mod iter;
mod raw;

pub use deque::{AnyDeque, SegmentedDeque};
pub use iter::{IntoIter, Iter, IterMut};
