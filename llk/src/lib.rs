//! The LL(k) grammar analysis workbench: FIRST_k/FOLLOW_k computation,
//! LL(k) conflict analysis, LL(k) table construction, and a pushdown
//! recognizer with parse-tree building.
//!
//! This crate is a thin umbrella over the workbench's component crates,
//! re-exported here so a caller needs only one dependency. Each component
//! also ships standalone, for callers who only need, say, `Word`/`WordSet`
//! algebra without the rest.

pub use llk_classify_ll::{analyze, Conflict, LlReport, LlTable, Lookahead};
pub use llk_grammar::{Grammar, GrammarError, MalformedLine, Rule};
pub use llk_predict::PredictEngine;
pub use llk_recognizer::{drive, render_dot, render_indented, Action, Observer, Parser, TreeBuilder, TreeNode};
pub use llk_symbol::{Symbol, SymbolName, SymbolRepr, SymbolSource};
pub use llk_word::{Word, WordSet};

/// Re-exports the names most programs reach for, for a single `use
/// llk::prelude::*;`.
pub mod prelude {
    pub use crate::{
        analyze, drive, Action, Conflict, Grammar, GrammarError, LlReport, LlTable, Lookahead,
        Observer, Parser, PredictEngine, Rule, Symbol, SymbolSource, TreeBuilder, Word, WordSet,
    };
}
