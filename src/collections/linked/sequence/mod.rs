mod cmp;
mod iter;
mod linked_sequence;
mod node;
#[cfg(test)]
mod proptests;

pub use iter::*;
pub use linked_sequence::*;
pub(crate) use node::*;
