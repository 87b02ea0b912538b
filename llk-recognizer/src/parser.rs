use llk_classify_ll::LlTable;
use llk_grammar::Grammar;
use llk_word::Word;

use crate::action::Action;

/// A stack-based LL(k) recognizer.
///
/// The stack grows to the right: its last symbol is the top. It starts as
/// `$^k · top`, the augmented axiom above `k` end markers. The buffer starts
/// as `input · $^k`. [`step`] repeatedly pops a stack symbol: if it is a
/// terminal, it must match the buffer's head (consumed on match); if it is
/// a non-terminal, the table predicts which rule expands it, and the rule's
/// reversed right-hand side replaces the popped symbol. Recognition ends
/// when the stack is empty: `Accept` if the buffer is empty too, `Error`
/// otherwise. A table miss is also an `Error`.
///
/// [`step`]: Parser::step
pub struct Parser<'g> {
    grammar: &'g Grammar,
    table: &'g LlTable,
    k: usize,
    stack: Word,
    buffer: Word,
    action: Action,
}

impl<'g> Parser<'g> {
    /// Builds a recognizer for `input`, ready to run `step` against `table`.
    pub fn new(grammar: &'g Grammar, table: &'g LlTable, k: usize, input: &Word) -> Self {
        let end_markers = Word::single(grammar.dollar()).repeat(k);
        let buffer = input.concat(&end_markers);
        let stack = end_markers.concat(&Word::single(grammar.top()));
        Parser {
            grammar,
            table,
            k,
            stack,
            buffer,
            action: Action::Init,
        }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// The stack, top (the most recently pushed symbol) last.
    pub fn stack(&self) -> &Word {
        &self.stack
    }

    /// The remaining unconsumed input, including its trailing `$^k`.
    pub fn buffer(&self) -> &Word {
        &self.buffer
    }

    /// The action the most recent `step` took (`Init` before the first).
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns `true` once recognition has reached `Accept` or `Error`.
    pub fn is_done(&self) -> bool {
        self.action.is_terminal()
    }

    /// Advances the recognizer by exactly one action. A no-op once `is_done`
    /// is `true`, so callers may keep stepping past termination safely.
    pub fn step(&mut self) {
        if self.is_done() {
            return;
        }

        let Some(top) = self.stack.as_slice().last().copied() else {
            self.action = if self.buffer.is_empty() {
                Action::Accept
            } else {
                Action::Error
            };
            return;
        };

        if self.grammar.is_terminal(top) {
            if self.buffer.head() == Some(top) {
                log::trace!("step: matched terminal {}", self.grammar.symbols().name_of(top));
                self.stack = self.stack.slice(0..self.stack.len() - 1);
                self.buffer = self.buffer.tail();
                self.action = Action::Pop(top);
            } else {
                self.action = Action::Error;
            }
            return;
        }

        let lookahead = self.buffer.prefix(self.k);
        match self.table.at(top, &lookahead) {
            Some(rule) => {
                log::trace!(
                    "step: expanding {} with rule {rule}",
                    self.grammar.symbols().name_of(top)
                );
                let rhs = self.grammar.rule(rule).rhs.reverse();
                self.stack = self.stack.slice(0..self.stack.len() - 1).concat(&rhs);
                self.action = Action::Expand(rule);
            }
            None => {
                self.action = Action::Error;
            }
        }
    }

    /// A padding width suitable for [`render_step`](Parser::render_step)
    /// columns, derived from how long the buffer started out.
    pub fn step_width(input: &Word) -> usize {
        (input.len() + 1) * 3
    }

    /// One trace line: stack, buffer and action, the first two columns
    /// padded to `width`.
    pub fn render_step(&self, width: usize) -> String {
        let source = self.grammar.symbols();
        format!(
            "{:<width$} {:<width$} {}",
            self.stack.render(source),
            self.buffer.render(source),
            self.action.render(self.grammar),
        )
    }
}
