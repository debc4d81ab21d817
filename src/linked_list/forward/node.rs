use alloc::boxed::Box;
use core::ptr::NonNull;

/// A heap-allocated cell in a [`ForwardList`](super::ForwardList).
///
/// The list is the sole owner of every node reachable from its head link;
/// nodes are created by [`Node::allocate`] and reclaimed exactly once by
/// [`Node::release`].
pub(super) struct Node<T> {
    pub(super) next: Option<NodePtr<T>>,
    pub(super) value: T,
}

pub(super) type NodePtr<T> = NonNull<Node<T>>;

impl<T> Node<T> {
    /// Moves `value` into a fresh heap node linked to `next`.
    pub(super) fn allocate(value: T, next: Option<NodePtr<T>>) -> NodePtr<T> {
        NonNull::from(Box::leak(Box::new(Node { next, value })))
    }

    /// Reclaims a node previously produced by [`Node::allocate`], handing its
    /// contents back by value.
    ///
    /// # Safety
    ///
    /// `ptr` must have come from [`Node::allocate`] and must not be released
    /// twice. No reference into the node may outlive this call.
    pub(super) unsafe fn release(ptr: NodePtr<T>) -> Node<T> {
        unsafe { *Box::from_raw(ptr.as_ptr()) }
    }
}
