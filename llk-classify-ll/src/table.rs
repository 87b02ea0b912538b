use std::collections::HashMap;

use llk_grammar::Grammar;
use llk_symbol::Symbol;
use llk_word::Word;

use crate::analyzer::LlReport;

const ERROR: i64 = -1;

/// Dense two-dimensional dispatch from `(non-terminal, lookahead word)` to
/// a rule index. Immutable once built, and safe to share across any
/// number of independent recognizers.
pub struct LlTable {
    nonterminal_index: HashMap<Symbol, usize>,
    word_index: HashMap<Word, usize>,
    words: Vec<Word>,
    cells: Vec<i64>,
    num_words: usize,
}

impl LlTable {
    /// Builds the table from an LL(k) verdict's per-production lookaheads.
    ///
    /// # Panics
    ///
    /// Panics if `report` holds conflicts: a non-LL(k) grammar has no
    /// table, by construction — there are no partial tables.
    pub fn build(grammar: &Grammar, report: &LlReport) -> LlTable {
        assert!(
            report.is_ll(),
            "cannot build an LL table from a grammar with unresolved conflicts"
        );

        let nonterminal_index: HashMap<Symbol, usize> = grammar
            .names()
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i))
            .collect();

        let mut word_index = HashMap::new();
        let mut words = Vec::new();
        for la in report.lookaheads() {
            for w in la.set.iter() {
                if !word_index.contains_key(w) {
                    word_index.insert(w.clone(), words.len());
                    words.push(w.clone());
                }
            }
        }

        let num_nonterminals = nonterminal_index.len();
        let num_words = words.len();
        let mut cells = vec![ERROR; num_nonterminals * num_words];

        for la in report.lookaheads() {
            let row = nonterminal_index[&la.nonterminal];
            for w in la.set.iter() {
                let col = word_index[w];
                let cell = &mut cells[row * num_words + col];
                debug_assert_eq!(*cell, ERROR, "LL(k) table cell written twice");
                *cell = la.rule as i64;
            }
        }

        LlTable {
            nonterminal_index,
            word_index,
            words,
            cells,
            num_words,
        }
    }

    /// Looks up the rule to apply when predicting `nonterminal` on
    /// `lookahead`. `None` covers both an explicit ERROR cell and a
    /// `lookahead`/`nonterminal` never seen while building the table.
    pub fn at(&self, nonterminal: Symbol, lookahead: &Word) -> Option<usize> {
        let row = *self.nonterminal_index.get(&nonterminal)?;
        let col = *self.word_index.get(lookahead)?;
        let cell = self.cells[row * self.num_words + col];
        (cell != ERROR).then_some(cell as usize)
    }

    /// Every distinct lookahead word the table was built with, in a stable
    /// (but otherwise unspecified) order matching `render`'s columns.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// A plain-text grid: one header row of lookahead words, one row per
    /// non-terminal, cells holding a rule index or `ERR`.
    pub fn render(&self, grammar: &Grammar) -> String {
        let source = grammar.symbols();
        let mut out = String::new();
        out.push_str("\t");
        for (i, w) in self.words.iter().enumerate() {
            if i > 0 {
                out.push('\t');
            }
            out.push_str(&w.render(source));
        }
        out.push('\n');
        for &name in grammar.names() {
            out.push_str(&source.name_of(name));
            let row = self.nonterminal_index[&name];
            for col in 0..self.num_words {
                out.push('\t');
                let cell = self.cells[row * self.num_words + col];
                if cell == ERROR {
                    out.push_str("ERR");
                } else {
                    out.push_str(&cell.to_string());
                }
            }
            out.push('\n');
        }
        out
    }
}
