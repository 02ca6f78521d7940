use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> so that take_node can move the value back out of the
// heap. A Link is the only owner of the node it points to; cursors copy the pointer without taking
// ownership.

pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// # Safety
    /// The node must still be owned by a live chain for the whole of `'a`.
    pub const unsafe fn value<'a>(self) -> &'a T {
        // SAFETY: Liveness is upheld by the caller.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be owned by a live chain for the whole of `'a` and no other reference
    /// to its value may exist during that time.
    pub const unsafe fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: Liveness and uniqueness are upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    /// # Safety
    /// The node must still be owned by a live chain.
    pub const unsafe fn next(self) -> Link<T> {
        // SAFETY: Liveness is upheld by the caller.
        unsafe { (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The node must still be owned by a live chain for the whole of `'a`.
    pub const unsafe fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: Liveness is upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims ownership of the node, leaving every copy of this pointer dangling.
    ///
    /// # Safety
    /// The node must have been created by [`NodePtr::from_node`] and not taken before. The link
    /// that owned it must be rewritten before the chain is walked again.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and is taken at most once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn as_ptr(self) -> *mut Node<T> {
        self.0.as_ptr()
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// The head cell of a chain. It holds no value, only the link to the first node.
pub(crate) struct Sentinel<T> {
    pub next: Link<T>,
}

pub(crate) struct SentinelPtr<T>(pub NonNull<Sentinel<T>>);

impl<T> SentinelPtr<T> {
    pub fn alloc() -> SentinelPtr<T> {
        SentinelPtr(NonNull::from(Box::leak(Box::new(Sentinel { next: None }))))
    }

    /// # Safety
    /// The sentinel must still be owned by its list.
    pub const unsafe fn next(self) -> Link<T> {
        // SAFETY: Liveness is upheld by the caller.
        unsafe { (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The sentinel must still be owned by its list for the whole of `'a`.
    pub const unsafe fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: Liveness is upheld by the caller.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// # Safety
    /// The sentinel must have come from [`SentinelPtr::alloc`] and must not be used afterwards.
    pub unsafe fn free(self) {
        // SAFETY: Upheld by the caller.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for SentinelPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SentinelPtr<T> {}

impl<T> PartialEq for SentinelPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for SentinelPtr<T> {}
