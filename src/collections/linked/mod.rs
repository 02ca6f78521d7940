//! Linked collection types. Primarily revolves around [`LinkedSequence`] and its accompanying
//! [`Cursor`] and [`CursorMut`] types.

pub mod cursor;
pub mod sequence;

#[doc(inline)]
pub use cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use sequence::{LinkedSequence, swap};
