//! Linked list containers.
//!
//! [`forward`] holds the owning singly linked list. Unlike an intrusive list,
//! the container allocates and owns its nodes: values move into the list on
//! insertion and move back out on removal, and the chain is torn down when the
//! list is dropped.

pub mod forward;
