//! The LL(k) conflict analyzer and LL(k) parse table construction.

mod analyzer;
mod table;

pub use self::analyzer::{analyze, Conflict, LlReport, Lookahead};
pub use self::table::LlTable;
