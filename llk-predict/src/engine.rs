use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use llk_grammar::Grammar;
use llk_symbol::Symbol;
use llk_word::{Word, WordSet};

/// Computes FIRST_k, FOLLOW_k and the composed `firstfollow` lookahead
/// relation for a single [`Grammar`], memoising FIRST results across calls.
///
/// FOLLOW_k threads an explicit guard set of non-terminals currently being
/// unwound and is deliberately left unmemoised: the guard is part of
/// what makes a FOLLOW query distinct, and caching it would either need the
/// guard in the cache key or risk serving a result computed under a
/// different guard.
pub struct PredictEngine<'g> {
    grammar: &'g Grammar,
    first_cache: RefCell<HashMap<(usize, Word), WordSet>>,
}

impl<'g> PredictEngine<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        PredictEngine {
            grammar,
            first_cache: RefCell::new(HashMap::new()),
        }
    }

    /// FIRST_k(alpha): the set of length-`k` (or shorter, if alpha derives
    /// a shorter terminal word) prefixes of terminal strings derivable
    /// from `alpha`.
    pub fn first(&self, k: usize, alpha: &Word) -> WordSet {
        if k == 0 || alpha.is_empty() {
            return WordSet::singleton(Word::epsilon());
        }
        if let Some(hit) = self.first_cache.borrow().get(&(k, alpha.clone())) {
            return hit.clone();
        }

        let a = alpha.head().unwrap();
        let beta = alpha.tail();
        let result = if self.grammar.is_terminal(a) {
            log::trace!("first({k}, ...): {:?} is terminal, recursing on tail", a);
            let tail_set = self.first(k - 1, &beta);
            let head = Word::single(a);
            tail_set.iter().map(|p| head.concat(p)).collect()
        } else {
            let mut result = WordSet::new();
            for (idx, rule) in self.grammar.productions_of(a) {
                if rule.rhs.head() == Some(a) {
                    log::trace!(
                        "first({k}, ...): skipping immediate left-recursive rule {idx}"
                    );
                    continue;
                }
                let gamma_beta = rule.rhs.concat(&beta);
                result.union_with(&self.first(k, &gamma_beta));
            }
            result
        };

        self.first_cache
            .borrow_mut()
            .insert((k, alpha.clone()), result.clone());
        result
    }

    /// FOLLOW_k(x): the set of length-`k` prefixes of terminal strings that
    /// can immediately follow `x` in some sentential form derived from the
    /// augmented axiom, right-padded with `$` to length `k`.
    pub fn follow(&self, k: usize, x: Symbol) -> WordSet {
        self.follow_guarded(k, x, &BTreeSet::new())
    }

    /// `firstfollow(k, y, beta)`: the composition used both internally by
    /// FOLLOW and, with an empty guard, by the LL analyzer to build a
    /// per-production lookahead set.
    pub fn firstfollow(&self, k: usize, y: Symbol, beta: &Word) -> WordSet {
        self.firstfollow_guarded(k, y, beta, &BTreeSet::new())
    }

    fn follow_guarded(&self, k: usize, x: Symbol, guard: &BTreeSet<Symbol>) -> WordSet {
        if guard.contains(&x) {
            log::trace!("follow({k}, {:?}): guard hit, short-circuiting to empty set", x);
            return WordSet::new();
        }
        if x == self.grammar.top() {
            let dollar = Word::single(self.grammar.dollar());
            return WordSet::singleton(dollar.repeat(k));
        }
        if k == 0 {
            return WordSet::singleton(Word::epsilon());
        }

        let mut new_guard = guard.clone();
        new_guard.insert(x);

        let mut result = WordSet::new();
        for (idx, rule) in self.grammar.rules().iter().enumerate() {
            let gamma = &rule.rhs;
            for i in 0..gamma.len() {
                if gamma.as_slice()[i] == x {
                    log::trace!("follow({k}, {:?}): visiting rule {idx} at position {i}", x);
                    let beta = gamma.slice(i + 1..gamma.len());
                    result.union_with(&self.firstfollow_guarded(k, rule.lhs, &beta, &new_guard));
                }
            }
        }
        result
    }

    fn firstfollow_guarded(
        &self,
        k: usize,
        y: Symbol,
        beta: &Word,
        guard: &BTreeSet<Symbol>,
    ) -> WordSet {
        let prefixes = self.first(k, beta);
        let mut result = WordSet::new();
        for p in prefixes.iter() {
            if p.len() < k {
                let continuations = self.follow_guarded(k - p.len(), y, guard);
                for f in continuations.iter() {
                    result.insert(p.concat(f).prefix(k));
                }
            } else {
                result.insert(p.clone());
            }
        }
        result
    }
}
