use llk_classify_ll::{analyze, LlReport, LlTable};
use llk_grammar::Grammar;
use llk_word::Word;

const G0: &str = "\
S -> a a b
S -> a R
R -> a b
R -> b c R
R -> d R b
";

#[test]
fn test_g0_conflict_is_not_resolved_by_more_lookahead() {
    // G0's "S -> a R" can derive "a a b" via "R -> a b", the very same
    // string as "S -> a a b": a genuine ambiguity, not merely a shortage
    // of lookahead. No k resolves it.
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    for k in 1..=3 {
        let report = analyze(&grammar, k);
        assert!(!report.is_ll(), "G0 should still conflict at k={k}");
        assert!(!report.conflicts().is_empty());
    }
}

#[test]
fn test_extra_lookahead_resolves_a_genuine_first_first_conflict() {
    // A -> a A | a b: not LL(1) (both alternatives start with "a"), but
    // LL(2) resolves it ("a a" vs "a b").
    let text = "A -> a A\nA -> a b\n";
    let (grammar, _) = Grammar::parse(text, "aa_ab").unwrap();
    assert!(!analyze(&grammar, 1).is_ll());
    assert!(analyze(&grammar, 2).is_ll());
}

#[test]
fn test_conflict_report_names_both_rules() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let report = analyze(&grammar, 1);
    let conflicts = report.conflicts();
    assert!(!conflicts.is_empty());
    let s = grammar.symbols().get("S").unwrap();
    assert!(conflicts.iter().all(|c| c.nonterminal == s));
    for c in conflicts {
        assert!(!c.overlap.is_empty());
    }
}

#[test]
fn test_unambiguous_grammar_is_ll1() {
    let text = "S -> a B\nS -> b C\nB -> x\nC -> y\n";
    let (grammar, _) = Grammar::parse(text, "unambig").unwrap();
    let report = analyze(&grammar, 1);
    assert!(report.is_ll());
    assert_eq!(report.lookaheads().len(), grammar.rules().len());
}

#[test]
fn test_table_lookup_matches_lookaheads() {
    let text = "S -> a B\nS -> b C\nB -> x\nC -> y\n";
    let (grammar, _) = Grammar::parse(text, "unambig").unwrap();
    let report = analyze(&grammar, 1);
    let table = LlTable::build(&grammar, &report);

    let s = grammar.symbols().get("S").unwrap();
    let a = grammar.symbols().get("a").unwrap();
    let b = grammar.symbols().get("b").unwrap();
    let unseen = llk_symbol::Symbol::from(900usize);

    assert_eq!(table.at(s, &Word::single(a)), Some(1));
    assert_eq!(table.at(s, &Word::single(b)), Some(2));
    assert_eq!(table.at(s, &Word::single(unseen)), None);
}

#[test]
#[should_panic]
fn test_building_table_from_conflicting_report_panics() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let report = analyze(&grammar, 1);
    let _ = LlTable::build(&grammar, &report);
}

#[test]
fn test_table_render_has_header_and_err_cells() {
    let text = "S -> a B\nS -> b C\nB -> x\nC -> y\n";
    let (grammar, _) = Grammar::parse(text, "unambig").unwrap();
    let report = analyze(&grammar, 1);
    let table = LlTable::build(&grammar, &report);
    let rendered = table.render(&grammar);
    assert!(rendered.contains("ERR"));
    assert!(rendered.lines().count() == grammar.names().len() + 1);
}
