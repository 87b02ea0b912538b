use llk_symbol::Symbol;
use llk_word::Word;

/// A single production, `lhs -> rhs`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rule {
    pub lhs: Symbol,
    pub rhs: Word,
}

impl Rule {
    pub fn new(lhs: Symbol, rhs: Word) -> Self {
        Rule { lhs, rhs }
    }
}
