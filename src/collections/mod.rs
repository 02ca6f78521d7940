//! General-purpose collection types.
//!
//! # Purpose
//! At the moment this holds a single singly-linked sequence. It is written to be a building block
//! for client code that needs ordered, node-based storage where inserting or erasing next to a
//! known position leaves every other position intact.

pub mod linked;
