use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::list::ForwardList;
use super::node::{Node, NodePtr};

/// A traversal position inside one list.
///
/// `Anchor` is the permanent position one step before the first element (the
/// role a sentinel node plays in other renditions); `End` is one past the
/// last element. Both cursor flavors and every advance go through this one
/// type, so the walking logic exists exactly once.
enum Pos<T> {
    Anchor,
    Node(NodePtr<T>),
    End,
}

impl<T> Pos<T> {
    /// The position one step forward. `End` saturates.
    ///
    /// # Safety
    ///
    /// A `Node` position must point into a live chain, and `head` must be the
    /// current head link of the list this position belongs to.
    unsafe fn step(self, head: Option<NodePtr<T>>) -> Pos<T> {
        match self {
            Pos::Anchor => head.map_or(Pos::End, Pos::Node),
            Pos::Node(node) => unsafe { (*node.as_ptr()).next }.map_or(Pos::End, Pos::Node),
            Pos::End => Pos::End,
        }
    }

    #[inline]
    fn node(self) -> Option<NodePtr<T>> {
        match self {
            Pos::Node(node) => Some(node),
            Pos::Anchor | Pos::End => None,
        }
    }
}

impl<T> Clone for Pos<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pos<T> {}

impl<T> PartialEq for Pos<T> {
    /// Node positions compare by node identity, never by value.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pos::Anchor, Pos::Anchor) | (Pos::End, Pos::End) => true,
            (Pos::Node(a), Pos::Node(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Eq for Pos<T> {}

impl<T> fmt::Debug for Pos<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pos::Anchor => f.write_str("anchor"),
            Pos::Node(node) => write!(f, "{:p}", node.as_ptr()),
            Pos::End => f.write_str("end"),
        }
    }
}

/// A read-only position handle into a [`ForwardList`].
///
/// Holds a shared borrow of the list, so the chain cannot change underneath
/// it; copies of a cursor keep traversing independently.
pub struct Cursor<'a, T> {
    pos: Pos<T>,
    head: Option<NodePtr<T>>,
    _list: PhantomData<&'a ForwardList<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn anchor(list: &'a ForwardList<T>) -> Self {
        Cursor {
            pos: Pos::Anchor,
            head: list.head,
            _list: PhantomData,
        }
    }

    /// Advances to the next position. A no-op at the end position.
    pub fn move_next(&mut self) {
        self.pos = unsafe { self.pos.step(self.head) };
    }

    /// The element at the cursor, or `None` at the anchor or end position.
    pub fn current(&self) -> Option<&'a T> {
        let node = self.pos.node()?;
        Some(unsafe { &(*node.as_ptr()).value })
    }

    /// The element one step ahead of the cursor, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        let node = unsafe { self.pos.step(self.head) }.node()?;
        Some(unsafe { &(*node.as_ptr()).value })
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// The end position; compares equal to any list's end.
impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Cursor {
            pos: Pos::End,
            head: None,
            _list: PhantomData,
        }
    }
}

impl<T> PartialEq<Cursor<'_, T>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialEq<CursorMut<'_, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).finish()
    }
}

/// A position handle that can rewrite the list it points into.
///
/// The cursor owns the unique borrow of its list for as long as it lives, so
/// it can never address a foreign list and the node under it can never be
/// freed behind its back. Structural edits happen *after* the cursor's
/// position, which keeps them O(1) on a singly linked chain and lets the
/// anchor position cover the front of the list uniformly.
pub struct CursorMut<'a, T> {
    list: &'a mut ForwardList<T>,
    pos: Pos<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn anchor(list: &'a mut ForwardList<T>) -> Self {
        CursorMut {
            pos: Pos::Anchor,
            list,
        }
    }

    /// Advances to the next position. A no-op at the end position.
    pub fn move_next(&mut self) {
        self.pos = unsafe { self.pos.step(self.list.head) };
    }

    /// The element at the cursor, or `None` at the anchor or end position.
    pub fn current(&mut self) -> Option<&mut T> {
        let node = self.pos.node()?;
        Some(unsafe { &mut (*node.as_ptr()).value })
    }

    /// The element one step ahead of the cursor, if any.
    pub fn peek_next(&self) -> Option<&T> {
        let node = unsafe { self.pos.step(self.list.head) }.node()?;
        Some(unsafe { &(*node.as_ptr()).value })
    }

    /// A read-only view of the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            pos: self.pos,
            head: self.list.head,
            _list: PhantomData,
        }
    }

    /// Splices `value` in immediately after the cursor's position; the new
    /// element becomes the cursor's successor. At the anchor this is exactly
    /// [`ForwardList::push_front`]. O(1).
    ///
    /// # Panics
    ///
    /// Panics at the end position, where no node exists to splice after.
    pub fn insert_after(&mut self, value: T) {
        match self.pos {
            Pos::Anchor => self.list.push_front(value),
            Pos::Node(node) => unsafe {
                let node_ptr = node.as_ptr();
                (*node_ptr).next = Some(Node::allocate(value, (*node_ptr).next));
                self.list.count += 1;
            },
            Pos::End => panic!("cannot insert after the end position"),
        }
    }

    /// Unlinks and returns the element immediately after the cursor's
    /// position, or `None` if the cursor is at the last element or beyond.
    /// At the anchor this is exactly [`ForwardList::pop_front`]. O(1).
    ///
    /// The cursor itself stays where it is; only the removed node's position
    /// is invalidated.
    pub fn remove_next(&mut self) -> Option<T> {
        match self.pos {
            Pos::Anchor => self.list.pop_front(),
            Pos::Node(node) => unsafe {
                let node_ptr = node.as_ptr();
                let victim = (*node_ptr).next?;
                (*node_ptr).next = (*victim.as_ptr()).next;
                self.list.count -= 1;
                Some(Node::release(victim).value)
            },
            Pos::End => None,
        }
    }
}

impl<T> PartialEq<CursorMut<'_, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &CursorMut<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialEq<Cursor<'_, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'_, T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.pos).finish()
    }
}

/// An iterator over shared references to a list's elements.
pub struct Iter<'a, T> {
    next: Option<NodePtr<T>>,
    _list: PhantomData<&'a ForwardList<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a ForwardList<T>) -> Self {
        Iter {
            next: list.head,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?.as_ptr();
        self.next = unsafe { (*node).next };
        Some(unsafe { &(*node).value })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            _list: PhantomData,
        }
    }
}

/// An iterator over unique references to a list's elements.
pub struct IterMut<'a, T> {
    next: Option<NodePtr<T>>,
    _list: PhantomData<&'a mut ForwardList<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut ForwardList<T>) -> Self {
        IterMut {
            next: list.head,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?.as_ptr();
        self.next = unsafe { (*node).next };
        Some(unsafe { &mut (*node).value })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// A draining iterator that consumes the list front to back.
pub struct IntoIter<T> {
    list: ForwardList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: ForwardList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
