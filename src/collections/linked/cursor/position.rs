use derive_more::IsVariant;

use crate::collections::linked::sequence::{Link, NodePtr, SentinelPtr};
use crate::util::error::CursorError;

/// The location shared by [`Cursor`](super::Cursor) and [`CursorMut`](super::CursorMut). The
/// variant is checked before any pointer is followed, so misuse of an end or before-begin cursor
/// is reported rather than dereferenced.
#[derive(IsVariant)]
pub(crate) enum Position<T> {
    /// The sentinel of a list, preceding its first element.
    BeforeBegin(SentinelPtr<T>),
    Node(NodePtr<T>),
    /// One past the last element. Also the position of a default-constructed cursor.
    End,
}

use Position::*;

impl<T> Position<T> {
    pub(crate) fn from_link(link: Link<T>) -> Position<T> {
        match link {
            Some(node) => Node(node),
            None => End,
        }
    }

    /// # Safety
    /// A `Node` or `BeforeBegin` position must still be owned by a live list.
    pub(crate) unsafe fn advance(&mut self) -> Result<(), CursorError> {
        *self = match *self {
            // SAFETY: Liveness is upheld by the caller.
            BeforeBegin(sentinel) => Position::from_link(unsafe { sentinel.next() }),
            // SAFETY: Liveness is upheld by the caller.
            Node(node) => Position::from_link(unsafe { node.next() }),
            End => return Err(CursorError::PastTheEnd),
        };
        Ok(())
    }

    pub(crate) const fn node(&self) -> Result<NodePtr<T>, CursorError> {
        match self {
            BeforeBegin(_) => Err(CursorError::BeforeBegin),
            Node(node) => Ok(*node),
            End => Err(CursorError::PastTheEnd),
        }
    }

    /// Returns the link owned by this position, the one that insert and erase after rewrite.
    ///
    /// # Safety
    /// A `Node` or `BeforeBegin` position must still be owned by a live list for the whole of
    /// `'a`, and no other reference to that link may exist during that time.
    pub(crate) unsafe fn link_after<'a>(&self) -> Result<&'a mut Link<T>, CursorError> {
        match self {
            // SAFETY: Liveness and uniqueness are upheld by the caller.
            BeforeBegin(sentinel) => Ok(unsafe { sentinel.next_mut() }),
            // SAFETY: Liveness and uniqueness are upheld by the caller.
            Node(node) => Ok(unsafe { node.next_mut() }),
            End => Err(CursorError::PastTheEnd),
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BeforeBegin(a), BeforeBegin(b)) => a == b,
            (Node(a), Node(b)) => a == b,
            (End, End) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}
