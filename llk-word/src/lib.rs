//! Finite sequences of grammar symbols (`Word`) and set algebra over them
//! (`WordSet`), with the length-`k` truncation semantics the rest of the
//! workbench builds on.

mod word;
mod word_set;

pub use self::word::Word;
pub use self::word_set::WordSet;
