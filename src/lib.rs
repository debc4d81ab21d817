//! Owning sequence containers built around stable anchor positions.
//!
//! The crate currently provides one container, [`ForwardList`]: a singly linked
//! list with O(1) front insertion and O(1) splicing after any known position.
//! Positions are addressed through cursors anchored one step *before* the
//! element they act on, so the front of the list needs no special case.
//!
//! ```
//! use anchor_collections::ForwardList;
//!
//! let mut list: ForwardList<i32> = [1, 2, 3].into_iter().collect();
//! list.push_front(0);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.remove_next();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
//! ```

#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::forward::{Cursor, CursorMut, ForwardList, IntoIter, Iter, IterMut};
