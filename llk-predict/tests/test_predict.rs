use llk_grammar::Grammar;
use llk_predict::PredictEngine;
use llk_word::{Word, WordSet};
use test_case::test_case;

const G0: &str = "\
S -> a a b
S -> a R
R -> a b
R -> b c R
R -> d R b
";

fn word_set(source: &llk_symbol::SymbolSource, words: &[&[&str]]) -> WordSet {
    words
        .iter()
        .map(|syms| Word::from_symbols(syms.iter().map(|n| source.get(n).unwrap())))
        .collect()
}

#[test]
fn test_first_0_is_always_epsilon() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let a = grammar.symbols().get("a").unwrap();
    let r = grammar.symbols().get("R").unwrap();
    let alpha = Word::from_symbols([a, r]);
    let first0 = engine.first(0, &alpha);
    assert_eq!(first0, WordSet::singleton(Word::epsilon()));
}

#[test]
fn test_first_1_of_a_r() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let a = grammar.symbols().get("a").unwrap();
    let r = grammar.symbols().get("R").unwrap();
    let alpha = Word::from_symbols([a, r]);
    let expected = word_set(grammar.symbols(), &[&["a"]]);
    assert_eq!(engine.first(1, &alpha), expected);
}

#[test]
fn test_first_2_of_a_r() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let a = grammar.symbols().get("a").unwrap();
    let r = grammar.symbols().get("R").unwrap();
    let alpha = Word::from_symbols([a, r]);
    let expected = word_set(
        grammar.symbols(),
        &[&["a", "a"], &["a", "b"], &["a", "d"]],
    );
    assert_eq!(engine.first(2, &alpha), expected);
}

#[test]
fn test_first_3_of_a_r() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let a = grammar.symbols().get("a").unwrap();
    let r = grammar.symbols().get("R").unwrap();
    let alpha = Word::from_symbols([a, r]);
    let expected = word_set(
        grammar.symbols(),
        &[
            &["a", "a", "b"],
            &["a", "b", "c"],
            &["a", "d", "a"],
            &["a", "d", "b"],
            &["a", "d", "d"],
        ],
    );
    assert_eq!(engine.first(3, &alpha), expected);
}

#[test]
fn test_follow_1_of_s_and_r() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let s = grammar.symbols().get("S").unwrap();
    let r = grammar.symbols().get("R").unwrap();

    let follow_s = engine.follow(1, s);
    assert_eq!(follow_s, word_set(grammar.symbols(), &[&["$"]]));

    let follow_r = engine.follow(1, r);
    assert_eq!(follow_r, word_set(grammar.symbols(), &[&["$"], &["b"]]));
}

#[test]
fn test_follow_2_of_r() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let r = grammar.symbols().get("R").unwrap();
    let follow_r = engine.follow(2, r);
    let expected = word_set(
        grammar.symbols(),
        &[&["b", "$"], &["b", "b"], &["$", "$"]],
    );
    assert_eq!(follow_r, expected);
}

#[test]
fn test_follow_of_top_is_unconditional_dollar_padding() {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let top = grammar.top();
    let dollar = grammar.dollar();
    for k in 0..4 {
        let expected = WordSet::singleton(Word::single(dollar).repeat(k));
        assert_eq!(engine.follow(k, top), expected);
    }
}

#[test]
fn test_direct_left_recursion_terminates() {
    // E -> E + T | T ; T -> a
    let text = "E -> E plus T\nE -> T\nT -> a\n";
    let (grammar, _) = Grammar::parse(text, "lr").unwrap();
    let engine = PredictEngine::new(&grammar);
    let e = grammar.symbols().get("E").unwrap();
    let first = engine.first(2, &Word::single(e));
    let expected = word_set(grammar.symbols(), &[&["a"], &["a", "plus"]]);
    assert_eq!(first, expected);
}

#[test_case(0, 1)]
#[test_case(1, 1)]
#[test_case(2, 3)]
#[test_case(3, 5)]
fn test_first_k_of_a_r_grows_with_k(k: usize, expected_len: usize) {
    let (grammar, _) = Grammar::parse(G0, "g0").unwrap();
    let engine = PredictEngine::new(&grammar);
    let a = grammar.symbols().get("a").unwrap();
    let r = grammar.symbols().get("R").unwrap();
    let alpha = Word::from_symbols([a, r]);
    assert_eq!(engine.first(k, &alpha).len(), expected_len);
}

#[test]
fn test_chain_of_nonterminals_terminates() {
    // S -> A, A -> B, B -> b: a straight chain through two intermediate
    // nonterminals with no recursion at all, so it needs no left-recursion
    // guard to terminate, only ordinary structural recursion through each
    // hop.
    let text = "S -> A c\nA -> B\nB -> b\n";
    let (grammar, _) = Grammar::parse(text, "chain").unwrap();
    let engine = PredictEngine::new(&grammar);
    let s = grammar.symbols().get("S").unwrap();
    let first = engine.first(2, &Word::single(s));
    let expected = word_set(grammar.symbols(), &[&["b", "c"]]);
    assert_eq!(first, expected);
}
