use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;

use super::cursor::{Cursor, CursorMut, IntoIter, Iter, IterMut};
use super::node::{Node, NodePtr};

/// An owning singly linked list.
///
/// `head` is the link a sentinel node would carry: it points at the first
/// element, or at nothing when the list is empty. The sentinel itself never
/// materializes as a node; the "one step before the front" position lives in
/// the cursor types instead, so front edits share the interior splice path.
///
/// Invariant: `count` equals the number of nodes reachable from `head`, and
/// every reachable node is owned by this list alone.
pub struct ForwardList<T> {
    pub(super) head: Option<NodePtr<T>>,
    pub(super) count: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        ForwardList {
            head: None,
            count: 0,
            marker: PhantomData,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Moves `value` to the front of the list. O(1).
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::allocate(value, self.head));
        self.count += 1;
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = unsafe { Node::release(self.head?) };
        self.head = node.next;
        self.count -= 1;
        Some(node.value)
    }

    /// A shared reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// A unique reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Releases every node. Safe to call on an already-empty list.
    pub fn clear(&mut self) {
        // Iterative teardown; a recursive Drop chain would overflow the stack
        // on long lists.
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists in O(1), without allocating.
    ///
    /// `core::mem::swap` on the lists themselves is equivalent.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.count, &mut other.count);
    }

    /// An iterator over shared references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// An iterator over unique references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// A cursor at the anchor position, one step before the first element.
    pub fn cursor_before_front(&self) -> Cursor<'_, T> {
        Cursor::anchor(self)
    }

    /// A cursor at the first element, or at the end position if the list is
    /// empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        let mut cursor = Cursor::anchor(self);
        cursor.move_next();
        cursor
    }

    /// A mutable cursor at the anchor position. [`CursorMut::insert_after`]
    /// and [`CursorMut::remove_next`] from here edit the front of the list.
    pub fn cursor_before_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::anchor(self)
    }

    /// A mutable cursor at the first element, or at the end position if the
    /// list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = CursorMut::anchor(self);
        cursor.move_next();
        cursor
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    /// Builds a list whose traversal order matches the iterator's order.
    ///
    /// Front insertion reverses its input, so the values are staged in a LIFO
    /// buffer first and pushed back out in reverse.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let staged: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in staged.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends the iterator's values at the back, preserving their order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.cursor_before_front_mut();
        while tail.peek_next().is_some() {
            tail.move_next();
        }
        for value in iter {
            tail.insert_after(value);
            tail.move_next();
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap: the replacement chain is built as an independent list
    /// and only then exchanged in, so a panic while cloning leaves `self`
    /// exactly as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut staged = source.clone();
        self.swap(&mut staged);
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    /// Two lists are equal iff they have the same length and equal values at
    /// every position in traversal order.
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    /// Lexicographic: the first unequal pair decides; a strict prefix is less
    /// than the longer list.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send> Send for ForwardList<T> {}
unsafe impl<T: Sync> Sync for ForwardList<T> {}
