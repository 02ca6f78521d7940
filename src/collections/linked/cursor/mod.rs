mod cursor;
mod position;
#[cfg(test)]
mod tests;

pub use cursor::*;
pub(crate) use position::*;
