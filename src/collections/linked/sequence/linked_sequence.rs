use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::{Iter, IterMut, Link, Node, NodePtr, SentinelPtr};
use crate::collections::linked::cursor::{Cursor, CursorMut, Position};
#[doc(inline)]
pub use crate::util::error::CursorError;
use crate::util::result::ResultExtension;

/// A list with links in one direction, headed by a sentinel. See also: [`Cursor`] and
/// [`CursorMut`] for positional insertion and removal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedSequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `pop_front` | `O(1)` |
/// | `insert_after` | `O(1)` |
/// | `erase_after` | `O(1)` |
/// | `swap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// There is no tail pointer, so `push_back` walks the whole chain every time. Keeping a cursor to
/// the last node and using `insert_after` on it gives `O(1)` appends instead.
///
/// The sentinel is allocated once when the sequence is created and never moves, even when the
/// LinkedSequence itself does. A cursor from [`before_begin`](LinkedSequence::before_begin) stays
/// valid for as long as the sequence is alive.
pub struct LinkedSequence<T> {
    pub(crate) sentinel: SentinelPtr<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

// SAFETY: A LinkedSequence uniquely owns its sentinel and every node, the same as a Box<T> would.
unsafe impl<T: Send> Send for LinkedSequence<T> {}

// SAFETY: Shared access never mutates any node.
unsafe impl<T: Sync> Sync for LinkedSequence<T> {}

impl<T> LinkedSequence<T> {
    /// Creates a new LinkedSequence with no elements.
    pub fn new() -> LinkedSequence<T> {
        LinkedSequence {
            sentinel: SentinelPtr::alloc(),
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedSequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the LinkedSequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the sequence, if it exists.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: The first node is owned by self, which is borrowed for the returned lifetime.
        self.head().map(|node| unsafe { node.value() })
    }

    /// Returns a mutable reference to the first element in the sequence, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: The first node is owned by self, which is mutably borrowed for the returned
        // lifetime.
        self.head().map(|node| unsafe { node.value_mut() })
    }

    /// Add the provided element to the front of the LinkedSequence.
    pub fn push_front(&mut self, value: T) {
        let link = self.head_mut();
        *link = Some(NodePtr::from_node(Node {
            value,
            next: *link,
        }));
        self.len += 1;
    }

    /// Add the provided element to the back of the LinkedSequence. This walks the entire
    /// sequence to find the last node.
    pub fn push_back(&mut self, value: T) {
        let mut link = self.head_mut();
        while let Some(node) = *link {
            // SAFETY: Every node reachable from the sentinel is owned by self.
            link = unsafe { node.next_mut() };
        }
        *link = Some(NodePtr::from_node(Node { value, next: None }));
        self.len += 1;
    }

    /// Removes the first element from the sequence and returns it, if the sequence isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let link = self.head_mut();
        let node = (*link)?;
        // SAFETY: The node is the first in the chain, owned by self and unlinked right after.
        let Node { value, next } = unsafe { node.take_node() };
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Removes all elements from the LinkedSequence. Nodes are released one at a time, so the
    /// length of the sequence has no effect on stack usage.
    ///
    /// If an element panics while being dropped, the sequence is already empty and the rest of the
    /// elements are still dropped while unwinding.
    pub fn clear(&mut self) {
        let mut chain = DetachedChain(self.head_mut().take());
        let released = mem::take(&mut self.len);
        chain.release();
        log::trace!("cleared LinkedSequence, released {released} nodes");
    }

    /// Exchanges the contents of two LinkedSequences. Only the first links and lengths are
    /// swapped; each sequence keeps its own sentinel, so before-begin cursors are unaffected.
    pub fn swap(&mut self, other: &mut LinkedSequence<T>) {
        mem::swap(self.head_mut(), other.head_mut());
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Inserts `value` directly after `pos`, returning a cursor to the new element. `pos` may be
    /// the before-begin position, in which case this is equivalent to
    /// [`push_front`](LinkedSequence::push_front).
    ///
    /// # Safety
    /// `pos` must have come from this LinkedSequence and the node it points to must not have been
    /// erased.
    ///
    /// # Panics
    /// Panics if `pos` is the end position.
    pub unsafe fn insert_after(&mut self, pos: impl Into<Cursor<T>>, value: T) -> CursorMut<T> {
        // SAFETY: Upheld by the caller.
        unsafe { self.try_insert_after(pos, value) }.throw()
    }

    /// Inserts `value` directly after `pos`, returning a cursor to the new element, or an [`Err`]
    /// rather than panicking if `pos` is the end position.
    ///
    /// # Safety
    /// `pos` must have come from this LinkedSequence and the node it points to must not have been
    /// erased.
    pub unsafe fn try_insert_after(
        &mut self,
        pos: impl Into<Cursor<T>>,
        value: T,
    ) -> Result<CursorMut<T>, CursorError> {
        let pos: Cursor<T> = pos.into();
        // SAFETY: The position belongs to self, which is mutably borrowed.
        let link = unsafe { pos.pos.link_after()? };
        let node = NodePtr::from_node(Node {
            value,
            next: *link,
        });
        *link = Some(node);
        self.len += 1;
        Ok(CursorMut::at(Position::Node(node)))
    }

    /// Drops the element directly after `pos`, returning a cursor to the element that now follows
    /// `pos`, which is the end position if the erased element was the last.
    ///
    /// # Safety
    /// `pos` must have come from this LinkedSequence and the node it points to must not have been
    /// erased. Any other cursor to the erased element is left dangling.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or is followed by no element.
    pub unsafe fn erase_after(&mut self, pos: impl Into<Cursor<T>>) -> CursorMut<T> {
        // SAFETY: Upheld by the caller.
        unsafe { self.try_erase_after(pos) }.throw()
    }

    /// Drops the element directly after `pos`, returning a cursor to the element that now follows
    /// `pos`, or an [`Err`] rather than panicking if there is nothing to erase.
    ///
    /// # Safety
    /// `pos` must have come from this LinkedSequence and the node it points to must not have been
    /// erased. Any other cursor to the erased element is left dangling.
    pub unsafe fn try_erase_after(
        &mut self,
        pos: impl Into<Cursor<T>>,
    ) -> Result<CursorMut<T>, CursorError> {
        let pos: Cursor<T> = pos.into();
        // SAFETY: Upheld by the caller.
        unsafe { self.try_remove_after(pos)?; }
        // SAFETY: pos is still alive, only the node after it was removed.
        let next = unsafe { *pos.pos.link_after()? };
        Ok(CursorMut::at(Position::from_link(next)))
    }

    /// Removes the element directly after `pos` and returns it.
    ///
    /// # Safety
    /// `pos` must have come from this LinkedSequence and the node it points to must not have been
    /// erased. Any other cursor to the removed element is left dangling.
    ///
    /// # Panics
    /// Panics if `pos` is the end position or is followed by no element.
    pub unsafe fn remove_after(&mut self, pos: impl Into<Cursor<T>>) -> T {
        // SAFETY: Upheld by the caller.
        unsafe { self.try_remove_after(pos) }.throw()
    }

    /// Removes the element directly after `pos` and returns it, or an [`Err`] rather than
    /// panicking if there is nothing to remove.
    ///
    /// # Safety
    /// `pos` must have come from this LinkedSequence and the node it points to must not have been
    /// erased. Any other cursor to the removed element is left dangling.
    pub unsafe fn try_remove_after(&mut self, pos: impl Into<Cursor<T>>) -> Result<T, CursorError> {
        let pos: Cursor<T> = pos.into();
        // SAFETY: The position belongs to self, which is mutably borrowed.
        let link = unsafe { pos.pos.link_after()? };
        let node = (*link).ok_or(CursorError::NoSuccessor)?;
        // SAFETY: The node is owned through link, which is rewritten to skip it straight away.
        let Node { value, next } = unsafe { node.take_node() };
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Returns a cursor to the first element, or the end position if the sequence is empty.
    pub fn begin(&mut self) -> CursorMut<T> {
        CursorMut::at(Position::from_link(self.head()))
    }

    /// Returns a read-only cursor to the first element, or the end position if the sequence is
    /// empty.
    pub fn cbegin(&self) -> Cursor<T> {
        Cursor::at(Position::from_link(self.head()))
    }

    /// Returns the position one past the last element.
    pub fn end(&mut self) -> CursorMut<T> {
        CursorMut::at(Position::End)
    }

    /// Returns the read-only position one past the last element.
    pub fn cend(&self) -> Cursor<T> {
        Cursor::at(Position::End)
    }

    /// Returns a cursor to the sentinel before the first element. It can't be dereferenced, but
    /// can be advanced or passed to [`insert_after`](LinkedSequence::insert_after) and
    /// [`erase_after`](LinkedSequence::erase_after) to modify the front of the sequence.
    pub fn before_begin(&mut self) -> CursorMut<T> {
        CursorMut::at(Position::BeforeBegin(self.sentinel))
    }

    /// Returns a read-only cursor to the sentinel before the first element.
    pub fn cbefore_begin(&self) -> Cursor<T> {
        Cursor::at(Position::BeforeBegin(self.sentinel))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedSequence<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> LinkedSequence<T> {
    pub(crate) fn head(&self) -> Link<T> {
        // SAFETY: The sentinel lives as long as self.
        unsafe { self.sentinel.next() }
    }

    pub(crate) fn head_mut(&mut self) -> &mut Link<T> {
        // SAFETY: The sentinel lives as long as self, which is mutably borrowed.
        unsafe { self.sentinel.next_mut() }
    }

    #[cfg(test)]
    pub(crate) fn verify_len(&self) {
        let mut count = 0;
        let mut curr = self.head();
        while let Some(node) = curr {
            count += 1;
            // SAFETY: Every node reachable from the sentinel is owned by self.
            curr = unsafe { node.next() };
        }
        assert_eq!(count, self.len, "Cached length should match the number of linked nodes.");
    }
}

/// Exchanges the contents of two LinkedSequences. See [`LinkedSequence::swap`].
pub fn swap<T>(lhs: &mut LinkedSequence<T>, rhs: &mut LinkedSequence<T>) {
    lhs.swap(rhs);
}

impl<T> FromIterator<T> for LinkedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedSequence::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Holding on to the last link, rather than calling push_back, keeps this linear.
        // SAFETY: The sentinel lives as long as self.
        let mut link = unsafe { self.sentinel.next_mut() };
        while let Some(node) = *link {
            // SAFETY: Every node reachable from the sentinel is owned by self.
            link = unsafe { node.next_mut() };
        }
        for value in iter {
            let node = NodePtr::from_node(Node { value, next: None });
            *link = Some(node);
            self.len += 1;
            // SAFETY: The node was just linked into self.
            link = unsafe { node.next_mut() };
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        // Copy then swap, so a panicking clone leaves self as it was.
        let mut copy = source.clone();
        self.swap(&mut copy);
        log::trace!("replaced {} elements with {} cloned elements", copy.len, self.len);
    }
}

impl<T> Drop for LinkedSequence<T> {
    fn drop(&mut self) {
        // Dropped after clear returns, or while unwinding out of it.
        let _sentinel = SentinelGuard(self.sentinel);
        self.clear();
    }
}

/// A chain that has been unlinked from its sentinel. Dropping it releases whatever nodes
/// [`release`](DetachedChain::release) didn't get to.
struct DetachedChain<T>(Link<T>);

impl<T> DetachedChain<T> {
    fn release(&mut self) {
        while let Some(node) = self.0 {
            // SAFETY: The chain is detached, so each node is reached and taken exactly once.
            let Node { value, next } = unsafe { node.take_node() };
            // The link moves on before the value is dropped, so a panicking drop resumes from the
            // following node.
            self.0 = next;
            drop(value);
        }
    }
}

impl<T> Drop for DetachedChain<T> {
    fn drop(&mut self) {
        self.release();
    }
}

struct SentinelGuard<T>(SentinelPtr<T>);

impl<T> Drop for SentinelGuard<T> {
    fn drop(&mut self) {
        // SAFETY: Only created in LinkedSequence's Drop, after which the sentinel is never used.
        unsafe { self.0.free(); }
    }
}

impl<T: Debug> Debug for LinkedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedSequence")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugContents<'a, T>(&'a LinkedSequence<T>);

impl<T: Debug> Debug for DebugContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
