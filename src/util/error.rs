use derive_more::{Display, Error, IsVariant};

/// A precondition violation reported by a [`Cursor`](crate::Cursor),
/// [`CursorMut`](crate::CursorMut) or by a positional method of
/// [`LinkedSequence`](crate::LinkedSequence).
#[derive(Debug, Display, Error, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// The cursor is past the last element, so it can't be advanced, dereferenced or used as an
    /// insertion point.
    #[display("Cursor is positioned past the end of the sequence!")]
    PastTheEnd,
    /// The cursor is on the sentinel before the first element, which holds no value.
    #[display("Cursor is positioned before the beginning of the sequence and holds no value!")]
    BeforeBegin,
    /// There is no element after the cursor to erase.
    #[display("No element follows the cursor!")]
    NoSuccessor,
}
