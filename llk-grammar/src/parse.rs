use llk_symbol::{Symbol, SymbolSource};
use llk_word::Word;

use crate::error::{GrammarError, MalformedLine};
use crate::grammar::Grammar;
use crate::rule::Rule;

impl Grammar {
    /// Parses a grammar from its line-oriented text form.
    ///
    /// `source` names the text for diagnostics (typically a file path);
    /// it has no bearing on parsing itself. Malformed lines are collected
    /// and returned alongside the successfully parsed grammar rather than
    /// aborting parsing; an empty rule set is the one fatal error.
    pub fn parse(text: &str, source: &str) -> Result<(Grammar, Vec<MalformedLine>), GrammarError> {
        let mut symbols = SymbolSource::new();
        let dollar = symbols.intern("$");

        let mut user_rules = Vec::new();
        let mut malformed = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line, &mut symbols) {
                Some(rule) => user_rules.push(rule),
                None => malformed.push(MalformedLine {
                    source: source.to_string(),
                    line: line_no,
                    text: line.to_string(),
                }),
            }
        }

        if user_rules.is_empty() {
            return Err(GrammarError::EmptyGrammar {
                source: source.to_string(),
            });
        }

        let grammar = Grammar::augment(user_rules, symbols, dollar);
        Ok((grammar, malformed))
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Parses one already-trimmed, non-empty, comment-free line into a rule.
/// Returns `None` on any malformed shape: no `->`, or an LHS that is not
/// exactly one symbol.
fn parse_line(line: &str, symbols: &mut SymbolSource) -> Option<Rule> {
    let sep = line.find("->")?;
    let lhs_part = line[..sep].trim();
    let rhs_part = line[sep + 2..].trim();

    let mut lhs_tokens = lhs_part.split_whitespace();
    let lhs_name = lhs_tokens.next()?;
    if lhs_tokens.next().is_some() {
        return None;
    }

    let lhs = symbols.intern(lhs_name);
    let rhs_symbols: Vec<Symbol> = rhs_part
        .split_whitespace()
        .map(|name| symbols.intern(name))
        .collect();

    Some(Rule::new(lhs, Word::from_symbols(rhs_symbols)))
}
