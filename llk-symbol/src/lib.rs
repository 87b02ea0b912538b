//! An opaque symbol type for context-free grammars, plus a `SymbolSource`
//! that interns textual names and hands out fresh `Symbol`s for them.
//!
//! Symbols are distinguished by their IDs alone; two `Symbol`s are equal
//! iff they were generated (or parsed) from the same `SymbolSource`.

mod source;
mod symbol;

pub use self::source::{SymbolName, SymbolSource};
pub use self::symbol::{Symbol, SymbolRepr};
