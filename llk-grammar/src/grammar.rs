use std::collections::HashSet;

use llk_symbol::{Symbol, SymbolSource};
use llk_word::Word;

use crate::rule::Rule;

/// An ordered list of rules plus the derived sets a grammar carries:
/// which symbols are non-terminals (`names`), which are terminals
/// (`tokens`), and the synthetic augmented axiom (`top`).
///
/// A `Grammar` is immutable after construction. It is always augmented:
/// rule 0 is the synthetic `top -> A` production, where `A` is the head
/// of the first user rule; user rules retain their original order from
/// index 1.
#[derive(Clone, Debug)]
pub struct Grammar {
    pub(crate) symbols: SymbolSource,
    pub(crate) rules: Vec<Rule>,
    pub(crate) names: Vec<Symbol>,
    pub(crate) names_set: HashSet<Symbol>,
    pub(crate) tokens: HashSet<Symbol>,
    pub(crate) top: Symbol,
    pub(crate) dollar: Symbol,
}

impl Grammar {
    /// Augments `user_rules` with a synthetic start rule and classifies
    /// every symbol reachable from the rule set as a name or a token.
    ///
    /// `dollar` must already be interned in `symbols`; it is unconditionally
    /// added to `tokens` even if no user rule mentions it.
    ///
    /// # Panics
    ///
    /// Panics if `user_rules` is empty; callers (e.g. the text-format
    /// parser) are expected to have already turned that case into a fatal
    /// [`GrammarError::EmptyGrammar`](crate::GrammarError::EmptyGrammar).
    pub fn augment(user_rules: Vec<Rule>, mut symbols: SymbolSource, dollar: Symbol) -> Grammar {
        assert!(
            !user_rules.is_empty(),
            "Grammar::augment requires at least one rule"
        );

        let mut candidate = String::from("S'");
        while symbols.is_taken(&candidate) {
            candidate.push('\'');
        }
        let top = symbols.intern(candidate);

        let first_lhs = user_rules[0].lhs;
        let mut rules = Vec::with_capacity(user_rules.len() + 1);
        rules.push(Rule::new(top, Word::single(first_lhs)));
        rules.extend(user_rules);

        let mut names = Vec::with_capacity(rules.len());
        let mut names_set = HashSet::with_capacity(rules.len());
        names.push(top);
        names_set.insert(top);
        for rule in &rules {
            if names_set.insert(rule.lhs) {
                names.push(rule.lhs);
            }
        }

        let mut tokens = HashSet::new();
        for rule in &rules {
            for sym in rule.rhs.as_slice() {
                if !names_set.contains(sym) {
                    tokens.insert(*sym);
                }
            }
        }
        tokens.insert(dollar);

        Grammar {
            symbols,
            rules,
            names,
            names_set,
            tokens,
            top,
            dollar,
        }
    }

    /// All rules, rule 0 being the synthetic augmented start.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule at `idx`.
    pub fn rule(&self, idx: usize) -> &Rule {
        &self.rules[idx]
    }

    /// Non-terminals, augmented axiom first.
    pub fn names(&self) -> &[Symbol] {
        &self.names
    }

    /// Terminals, including the end-of-input marker.
    pub fn tokens(&self) -> &HashSet<Symbol> {
        &self.tokens
    }

    /// The augmented axiom, `S'` (primed until free of collisions).
    pub fn top(&self) -> Symbol {
        self.top
    }

    /// The end-of-input marker, `$`.
    pub fn dollar(&self) -> Symbol {
        self.dollar
    }

    /// The symbol interner backing this grammar's names.
    pub fn symbols(&self) -> &SymbolSource {
        &self.symbols
    }

    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.names_set.contains(&sym)
    }

    pub fn is_terminal(&self, sym: Symbol) -> bool {
        !self.is_nonterminal(sym)
    }

    /// Rule indices and rules whose left-hand side is `x`, in rule order.
    pub fn productions_of(&self, x: Symbol) -> impl Iterator<Item = (usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| rule.lhs == x)
    }

    /// Renders `LHS -> RHS` for the rule at `idx`.
    pub fn render_rule(&self, idx: usize) -> String {
        let rule = &self.rules[idx];
        format!(
            "{} -> {}",
            self.symbols.name_of(rule.lhs),
            rule.rhs.render(&self.symbols)
        )
    }

    /// Renders every rule, numbered from 0, one per line.
    pub fn render_numbered(&self) -> String {
        (0..self.rules.len())
            .map(|idx| format!("{}: {}", idx, self.render_rule(idx)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
