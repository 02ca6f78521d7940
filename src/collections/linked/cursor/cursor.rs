use std::fmt::{self, Debug, Formatter};

use super::Position;
use crate::util::error::CursorError;
use crate::util::result::ResultExtension;

/// A read-only position within a [`LinkedSequence`](crate::LinkedSequence). See
/// [`LinkedSequence::cbegin`](crate::LinkedSequence::cbegin),
/// [`cend`](crate::LinkedSequence::cend) and
/// [`cbefore_begin`](crate::LinkedSequence::cbefore_begin) to create one.
///
/// Cursors don't borrow the sequence they came from. They are plain, copyable markers that the
/// sequence accepts back in [`insert_after`](crate::LinkedSequence::insert_after) and
/// [`erase_after`](crate::LinkedSequence::erase_after). Because of this, any method that follows
/// the cursor into a node is `unsafe`: the node must not have been erased in the meantime.
///
/// Misuse that can be detected without following a pointer, dereferencing or advancing an end
/// cursor, or dereferencing a before-begin cursor, is reported as a [`CursorError`].
pub struct Cursor<T> {
    pub(crate) pos: Position<T>,
}

/// A position within a [`LinkedSequence`](crate::LinkedSequence) which allows the element it
/// points to to be modified. See [`LinkedSequence::begin`](crate::LinkedSequence::begin),
/// [`end`](crate::LinkedSequence::end) and
/// [`before_begin`](crate::LinkedSequence::before_begin) to create one.
///
/// A CursorMut converts into a [`Cursor`] with [`From`], but not the other way around. Both kinds
/// can be compared with each other.
pub struct CursorMut<T> {
    pub(crate) pos: Position<T>,
}

macro_rules! impl_cursor {
    ($cursor:ident) => {
        impl<T> $cursor<T> {
            pub(crate) const fn at(pos: Position<T>) -> $cursor<T> {
                $cursor { pos }
            }

            /// Returns true if the cursor is positioned past the last element.
            pub const fn is_end(&self) -> bool {
                self.pos.is_end()
            }

            /// Returns true if the cursor is positioned on the sentinel before the first element.
            pub const fn is_before_begin(&self) -> bool {
                self.pos.is_before_begin()
            }

            /// Moves the cursor to the following node, returning an [`Err`] rather than panicking
            /// if the cursor is already at the end.
            ///
            /// # Safety
            /// The node (or sentinel) the cursor points to must not have been dropped.
            pub unsafe fn try_advance(&mut self) -> Result<&mut Self, CursorError> {
                // SAFETY: Upheld by the caller.
                unsafe { self.pos.advance()?; }
                Ok(self)
            }

            /// Moves the cursor to the following node.
            ///
            /// # Safety
            /// The node (or sentinel) the cursor points to must not have been dropped.
            ///
            /// # Panics
            /// Panics if the cursor is at the end.
            pub unsafe fn advance(&mut self) -> &mut Self {
                // SAFETY: Upheld by the caller.
                unsafe { self.try_advance() }.throw()
            }

            /// Moves the cursor to the following node and returns a copy of its previous
            /// position.
            ///
            /// # Safety
            /// The node (or sentinel) the cursor points to must not have been dropped.
            pub unsafe fn try_advance_post(&mut self) -> Result<Self, CursorError> {
                let prev = *self;
                // SAFETY: Upheld by the caller.
                unsafe { self.pos.advance()?; }
                Ok(prev)
            }

            /// Moves the cursor to the following node and returns a copy of its previous
            /// position.
            ///
            /// # Safety
            /// The node (or sentinel) the cursor points to must not have been dropped.
            ///
            /// # Panics
            /// Panics if the cursor is at the end.
            pub unsafe fn advance_post(&mut self) -> Self {
                // SAFETY: Upheld by the caller.
                unsafe { self.try_advance_post() }.throw()
            }

            /// Returns a reference to the element at the cursor, returning an [`Err`] rather than
            /// panicking if the cursor is at the end or before the beginning.
            ///
            /// # Safety
            /// The node the cursor points to must outlive `'a` and must not be modified during
            /// `'a`.
            pub unsafe fn try_get<'a>(&self) -> Result<&'a T, CursorError> {
                // SAFETY: Upheld by the caller.
                Ok(unsafe { self.pos.node()?.value() })
            }

            /// Returns a reference to the element at the cursor.
            ///
            /// # Safety
            /// The node the cursor points to must outlive `'a` and must not be modified during
            /// `'a`.
            ///
            /// # Panics
            /// Panics if the cursor is at the end or before the beginning.
            pub unsafe fn get<'a>(&self) -> &'a T {
                // SAFETY: Upheld by the caller.
                unsafe { self.try_get() }.throw()
            }
        }

        impl<T> Default for $cursor<T> {
            fn default() -> Self {
                $cursor::at(Position::End)
            }
        }

        impl<T> Clone for $cursor<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $cursor<T> {}

        impl<T> PartialEq for $cursor<T> {
            fn eq(&self, other: &Self) -> bool {
                self.pos == other.pos
            }
        }

        impl<T> Eq for $cursor<T> {}

        impl<T> Debug for $cursor<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($cursor)).field(&DebugPosition(&self.pos)).finish()
            }
        }
    };
    ($cursor:ident, $($rest:ident),+) => {
        impl_cursor!($cursor);
        impl_cursor!($($rest),+);
    };
}

impl_cursor! {
    Cursor,
    CursorMut
}

impl<T> CursorMut<T> {
    /// Returns a read-only copy of this cursor.
    pub const fn as_cursor(&self) -> Cursor<T> {
        Cursor::at(self.pos)
    }

    /// Returns a mutable reference to the element at the cursor, returning an [`Err`] rather than
    /// panicking if the cursor is at the end or before the beginning.
    ///
    /// # Safety
    /// The node the cursor points to must outlive `'a` and no other reference to its element may
    /// exist during `'a`.
    pub unsafe fn try_get_mut<'a>(&mut self) -> Result<&'a mut T, CursorError> {
        // SAFETY: Upheld by the caller.
        Ok(unsafe { self.pos.node()?.value_mut() })
    }

    /// Returns a mutable reference to the element at the cursor.
    ///
    /// # Safety
    /// The node the cursor points to must outlive `'a` and no other reference to its element may
    /// exist during `'a`.
    ///
    /// # Panics
    /// Panics if the cursor is at the end or before the beginning.
    pub unsafe fn get_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { self.try_get_mut() }.throw()
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(value: CursorMut<T>) -> Self {
        Cursor::at(value.pos)
    }
}

impl<T> PartialEq<CursorMut<T>> for Cursor<T> {
    fn eq(&self, other: &CursorMut<T>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialEq<Cursor<T>> for CursorMut<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.pos == other.pos
    }
}

// Positions are printed by address only, reading the element would need the node to be alive.
struct DebugPosition<'a, T>(&'a Position<T>);

impl<T> Debug for DebugPosition<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Position::BeforeBegin(sentinel) => f
                .debug_tuple("BeforeBegin")
                .field(&sentinel.0.as_ptr())
                .finish(),
            Position::Node(node) => f.debug_tuple("Node").field(&node.as_ptr()).finish(),
            Position::End => f.write_str("End"),
        }
    }
}
