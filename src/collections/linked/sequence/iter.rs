use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedSequence, Link};

impl<T> IntoIterator for LinkedSequence<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // The iterator owns the sequence and pops from the front, so dropping it part way through
    // releases the remaining nodes through LinkedSequence's Drop.
    pub(crate) list: LinkedSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedSequence<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            curr: self.head(),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // Only the remaining chain is tracked. The nodes themselves are never modified, apart from the
    // values handed out.
    pub(crate) curr: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

// SAFETY: IterMut hands out unique references to the elements, the same as &mut T would.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

// SAFETY: A shared IterMut only exposes its remaining length.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        // SAFETY: The sequence is mutably borrowed for 'a and each node is yielded once, so the
        // returned references never alias.
        unsafe {
            self.curr = node.next();
            self.len -= 1;
            Some(node.value_mut())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedSequence<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            curr: self.head(),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) curr: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

// SAFETY: Iter only hands out shared references to the elements, the same as &T would.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

// SAFETY: As above, shared access never mutates any node.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.curr?;
        // SAFETY: The sequence is borrowed for 'a, so no node can be removed or modified.
        unsafe {
            self.curr = node.next();
            self.len -= 1;
            Some(node.value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            curr: self.curr,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}
