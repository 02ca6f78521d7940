use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::LinkedSequence;

impl<T: PartialEq> PartialEq for LinkedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedSequence<T> {}

/// Sequences are ordered lexicographically by their elements.
///
/// `le` and `ge` are the negations of `gt` and `lt` respectively. For element types with a total
/// order this is identical to the default behaviour, but if two elements are incomparable (such as
/// `f64::NAN`) both `a <= b` and `a >= b` hold.
impl<T: PartialOrd> PartialOrd for LinkedSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }

    fn le(&self, other: &Self) -> bool {
        !(self > other)
    }

    fn ge(&self, other: &Self) -> bool {
        !(self < other)
    }
}

impl<T: Ord> Ord for LinkedSequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}
