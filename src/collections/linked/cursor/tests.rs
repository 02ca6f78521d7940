#![cfg(test)]

use super::*;
use crate::collections::linked::LinkedSequence;
use crate::util::error::CursorError;
use crate::util::panic::assert_panics;

#[test]
fn test_walk_to_end() {
    let list = LinkedSequence::from([1, 2, 3]);
    let mut seen = Vec::new();
    let mut cursor = list.cbegin();
    let end = list.cend();
    // SAFETY: The list isn't modified while the cursor walks it.
    unsafe {
        while cursor != end {
            seen.push(*cursor.get());
            cursor.advance();
        }
        assert_eq!(cursor.try_advance().err(), Some(CursorError::PastTheEnd));
    }
    assert_eq!(seen, [1, 2, 3]);
}

#[test]
fn test_advance_post() {
    let list = LinkedSequence::from(['x', 'y']);
    let mut cursor = list.cbegin();
    // SAFETY: The list isn't modified.
    unsafe {
        let prev = cursor.advance_post();
        assert_eq!(*prev.get(), 'x', "Postfix advance should return the old position.");
        assert_eq!(*cursor.get(), 'y');
        let prev = cursor.try_advance_post().expect("cursor isn't at the end");
        assert_eq!(*prev.get(), 'y');
        assert!(cursor.is_end());
    }
}

#[test]
fn test_before_begin() {
    let mut list = LinkedSequence::from([5]);
    let mut cursor = list.before_begin();
    assert!(cursor.is_before_begin());
    assert!(!cursor.is_end());
    // SAFETY: The list isn't modified.
    unsafe {
        assert_eq!(cursor.try_get(), Err(CursorError::BeforeBegin));
        assert_eq!(cursor.try_get_mut().err(), Some(CursorError::BeforeBegin));
        cursor.advance();
        assert_eq!(*cursor.get(), 5, "Advancing before-begin should reach the first element.");
    }
    assert_eq!(cursor, list.begin());

    let mut empty = LinkedSequence::<i32>::new();
    let mut cursor = empty.cbefore_begin();
    // SAFETY: The list isn't modified.
    unsafe { cursor.advance(); }
    assert_eq!(cursor, empty.end(), "Advancing before-begin of an empty list should reach end.");
}

#[test]
fn test_mutate_through_cursor() {
    let mut list = LinkedSequence::from([1, 2, 3]);
    let mut cursor = list.begin();
    // SAFETY: No other reference to the elements is live while they are written.
    unsafe {
        while !cursor.is_end() {
            *cursor.get_mut() *= 2;
            cursor.advance();
        }
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
}

#[test]
fn test_equality_across_kinds() {
    let mut list = LinkedSequence::from([1, 2]);
    let begin = list.begin();
    let cbegin = list.cbegin();
    assert_eq!(begin, cbegin);
    assert_eq!(cbegin, begin);
    assert_eq!(Cursor::from(begin), cbegin, "Widening should keep the position.");
    assert_eq!(begin.as_cursor(), cbegin);

    let mut second = cbegin;
    // SAFETY: The list isn't modified.
    unsafe { second.advance(); }
    assert_ne!(second, cbegin);
    assert_ne!(begin, second);

    assert_ne!(list.cbefore_begin(), cbegin);
    assert_eq!(list.end(), list.cend());

    let other = LinkedSequence::from([1, 2]);
    assert_ne!(
        other.cbegin(),
        cbegin,
        "Cursors into different sequences should differ even with equal values."
    );
    assert_ne!(
        other.cbefore_begin(),
        list.cbefore_begin(),
        "Each sequence should have its own sentinel."
    );
}

#[test]
fn test_default_is_end() {
    let cursor = Cursor::<i32>::default();
    let cursor_mut = CursorMut::<i32>::default();
    assert!(cursor.is_end());
    assert_eq!(cursor, cursor_mut);
    assert_eq!(cursor, LinkedSequence::<i32>::new().cend());
    // SAFETY: The end position is rejected before any pointer is followed.
    unsafe {
        assert_eq!(cursor.try_get(), Err(CursorError::PastTheEnd));
    }
}

#[test]
fn test_end_misuse_panics() {
    assert_panics!({
        let mut cursor = Cursor::<i32>::default();
        // SAFETY: The end position is rejected before any pointer is followed.
        unsafe { cursor.advance(); }
    }, with CursorError::PastTheEnd);

    assert_panics!({
        let cursor = CursorMut::<i32>::default();
        // SAFETY: The end position is rejected before any pointer is followed.
        unsafe { cursor.get(); }
    }, with CursorError::PastTheEnd);

    assert_panics!({
        let mut cursor = CursorMut::<i32>::default();
        // SAFETY: The end position is rejected before any pointer is followed.
        unsafe { cursor.advance_post(); }
    }, "Postfix advance past the end should panic.");

    assert_panics!({
        let list = LinkedSequence::from([1]);
        let cursor = list.cbefore_begin();
        // SAFETY: The before-begin position is rejected before any pointer is followed.
        unsafe { cursor.get(); }
    }, with CursorError::BeforeBegin);
}

#[test]
fn test_cursor_survives_list_move() {
    let mut list = LinkedSequence::from([1, 2]);
    let pos = list.before_begin();
    let first = list.cbegin();
    let mut moved = list;
    // SAFETY: Moving the sequence doesn't move its sentinel or nodes.
    unsafe {
        assert_eq!(*first.get(), 1);
        moved.insert_after(pos, 0);
    }
    assert_eq!(moved.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Cursor::<u8>::default()), "Cursor(End)");
    assert_eq!(format!("{:?}", CursorMut::<u8>::default()), "CursorMut(End)");
}
