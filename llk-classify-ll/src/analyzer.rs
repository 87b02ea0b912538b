use std::collections::HashMap;

use llk_grammar::Grammar;
use llk_predict::PredictEngine;
use llk_symbol::Symbol;
use llk_word::{Word, WordSet};

/// A single production's computed lookahead set.
#[derive(Clone, Debug)]
pub struct Lookahead {
    pub rule: usize,
    pub nonterminal: Symbol,
    pub rhs: Word,
    pub set: WordSet,
}

/// A pairwise conflict between two productions of the same non-terminal:
/// their lookahead sets overlap, so no single lookahead word picks between
/// them.
#[derive(Clone, Debug)]
pub struct Conflict {
    pub nonterminal: Symbol,
    pub rule_a: usize,
    pub rule_b: usize,
    pub overlap: WordSet,
}

/// The result of LL(k) analysis: either a clean verdict with every
/// production's lookahead set, or a full conflict report. All conflicts in
/// the grammar are enumerated; analysis never stops at the first one.
#[derive(Clone, Debug)]
pub enum LlReport {
    Ll {
        lookaheads: Vec<Lookahead>,
    },
    Conflicts {
        lookaheads: Vec<Lookahead>,
        conflicts: Vec<Conflict>,
    },
}

impl LlReport {
    pub fn is_ll(&self) -> bool {
        matches!(self, LlReport::Ll { .. })
    }

    pub fn lookaheads(&self) -> &[Lookahead] {
        match self {
            LlReport::Ll { lookaheads } | LlReport::Conflicts { lookaheads, .. } => lookaheads,
        }
    }

    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            LlReport::Ll { .. } => &[],
            LlReport::Conflicts { conflicts, .. } => conflicts,
        }
    }
}

/// Computes `lookahead(k, X, gamma) = firstfollow(k, X, gamma)` for every
/// production and decides whether `grammar` is LL(`k`): every pair of
/// productions of the same non-terminal must have disjoint lookahead sets.
pub fn analyze(grammar: &Grammar, k: usize) -> LlReport {
    let engine = PredictEngine::new(grammar);
    let lookaheads: Vec<Lookahead> = grammar
        .rules()
        .iter()
        .enumerate()
        .map(|(idx, rule)| {
            log::trace!("analyze: computing lookahead for rule {idx}");
            let set = engine.firstfollow(k, rule.lhs, &rule.rhs);
            Lookahead {
                rule: idx,
                nonterminal: rule.lhs,
                rhs: rule.rhs.clone(),
                set,
            }
        })
        .collect();

    let mut by_nonterminal: HashMap<Symbol, Vec<usize>> = HashMap::new();
    for la in &lookaheads {
        by_nonterminal
            .entry(la.nonterminal)
            .or_default()
            .push(la.rule);
    }

    let mut conflicts = Vec::new();
    for (&nonterminal, rule_idxs) in &by_nonterminal {
        for i in 0..rule_idxs.len() {
            for j in (i + 1)..rule_idxs.len() {
                let a = &lookaheads[rule_idxs[i]];
                let b = &lookaheads[rule_idxs[j]];
                if a.rhs == b.rhs {
                    // Identical alternatives aren't a usable conflict signal.
                    continue;
                }
                let overlap = a.set.intersection(&b.set);
                if !overlap.is_empty() {
                    log::trace!(
                        "analyze: conflict between rules {} and {} on nonterminal",
                        a.rule,
                        b.rule
                    );
                    conflicts.push(Conflict {
                        nonterminal,
                        rule_a: a.rule,
                        rule_b: b.rule,
                        overlap,
                    });
                }
            }
        }
    }

    if conflicts.is_empty() {
        LlReport::Ll { lookaheads }
    } else {
        conflicts.sort_by_key(|c| (c.rule_a, c.rule_b));
        LlReport::Conflicts {
            lookaheads,
            conflicts,
        }
    }
}
