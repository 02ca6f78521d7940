//! A singly-linked sequence container with sentinel-headed storage and cursor-based positional
//! mutation.
//!
//! # Purpose
//! [`LinkedSequence`] is a reusable building block for code that needs ordered, node-based storage
//! with stable `insert_after` / `erase_after` operations. Unlike a contiguous collection, inserting
//! or removing next to a known position doesn't move any other element, so cursors to nodes
//! elsewhere in the sequence stay valid.
//!
//! # Cursors
//! Traversal for reading and writing elements is done through ordinary iterators
//! ([`LinkedSequence::iter`], [`LinkedSequence::iter_mut`]). Positional mutation is done through
//! [`Cursor`] and [`CursorMut`], which are lightweight copyable markers: they don't borrow the
//! sequence, so they can be handed back to it for insertion and removal. The price of this is that
//! the compiler can't tell when a cursor's node has been erased, which is why every method that
//! follows a cursor into a node is `unsafe`.
//!
//! # Error Handling
//! Misuse of a cursor that can be detected without touching memory (advancing past the end,
//! dereferencing the end or before-begin positions, erasing after the last element) is reported.
//! Following the conventions of the rest of the crate, each such operation comes in two forms:
//! `try_*` methods return a [`Result`] with a [`CursorError`], while the plain methods panic with
//! the error's message. Before panicking, the error is logged through the [`log`] facade.
//!
//! # Dependencies
//! This crate depends on some derive macros for its error type, because they're helpful and remove
//! the need for some very repetitive programming, and on `log` for diagnostics. No logger is
//! installed by the crate itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::linked::{Cursor, CursorMut, LinkedSequence, swap};
#[doc(inline)]
pub use collections::linked::sequence::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use util::error::CursorError;
