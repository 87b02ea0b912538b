use llk_grammar::Grammar;
use llk_symbol::Symbol;

/// The outcome of a single recognizer [`step`](crate::Parser::step).
///
/// `Init` is the state before the first step. `Pop` and `Expand` are taken
/// while recognition is ongoing; `Accept` and `Error` are terminal and no
/// further steps change them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// No step has run yet.
    Init,
    /// The stack top matched the buffer's lookahead symbol and was popped.
    Pop(Symbol),
    /// The table predicted rule `n` for the stack top; its reversed
    /// right-hand side replaced the stack top.
    Expand(usize),
    /// Stack and buffer are both exhausted: the input is in the language.
    Accept,
    /// Neither a terminal match nor a table entry applies.
    Error,
}

impl Action {
    /// Returns `true` for the two states [`step`](crate::Parser::step) never
    /// leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Accept | Action::Error)
    }

    /// A short human-readable label, used by [`Parser::render_step`](crate::Parser::render_step).
    pub fn render(&self, grammar: &Grammar) -> String {
        match self {
            Action::Init => "init".to_string(),
            Action::Pop(sym) => format!("pop {}", grammar.symbols().name_of(*sym)),
            Action::Expand(n) => format!("expand ({n})"),
            Action::Accept => "accept".to_string(),
            Action::Error => "error".to_string(),
        }
    }
}
