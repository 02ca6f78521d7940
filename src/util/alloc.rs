use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times values sharing the same counter have been dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a value with a fresh counter, starting at zero.
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops recorded so far.
    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
