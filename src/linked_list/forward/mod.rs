//! # Owning forward list
//!
//! A singly linked list that owns its nodes, addressed through cursors.
//!
//! ## Core components
//!
//! - [`ForwardList`]: the container itself.
//! - [`Cursor`] and [`CursorMut`]: position handles. Both start at either the
//!   anchor (one step before the first element) or the first element, and
//!   share one stepping routine; the mutable flavor additionally splices
//!   elements in and out *after* its position.
//! - [`Iter`], [`IterMut`], [`IntoIter`]: plain forward iterators over the
//!   same chain.
//!
//! ## The anchor position
//!
//! Every structural edit is phrased as "after this position". The anchor is a
//! permanent position in front of the first element, so inserting or removing
//! at the front goes through the same code path as any interior splice:
//!
//! ```
//! use anchor_collections::ForwardList;
//!
//! let mut list: ForwardList<i32> = [2, 3].into_iter().collect();
//!
//! let mut cursor = list.cursor_before_front_mut();
//! cursor.insert_after(1);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

mod cursor;
mod list;
mod node;

pub use cursor::{Cursor, CursorMut, IntoIter, Iter, IterMut};
pub use list::ForwardList;

#[cfg(test)]
mod tests;
