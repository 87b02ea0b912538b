use llk_grammar::{Grammar, GrammarError};

const G0: &str = "\
S -> a a b
S -> a R
R -> a b
R -> b c R
R -> d R b
";

#[test]
fn test_parse_augments_with_rule_zero() {
    let (grammar, malformed) = Grammar::parse(G0, "g0.txt").unwrap();
    assert!(malformed.is_empty());
    assert_eq!(grammar.rules().len(), 6);
    assert_eq!(grammar.rule(0).rhs.len(), 1);
    let s = grammar.symbols().get("S").unwrap();
    assert_eq!(grammar.rule(0).rhs.head(), Some(s));
    assert_eq!(grammar.top(), grammar.rule(0).lhs);
}

#[test]
fn test_names_and_tokens_are_disjoint() {
    let (grammar, _) = Grammar::parse(G0, "g0.txt").unwrap();
    for &tok in grammar.tokens() {
        assert!(!grammar.is_nonterminal(tok));
    }
    for &name in grammar.names() {
        assert!(!grammar.tokens().contains(&name));
    }
    let dollar = grammar.dollar();
    assert!(grammar.tokens().contains(&dollar));
}

#[test]
fn test_top_is_inserted_first_in_names() {
    let (grammar, _) = Grammar::parse(G0, "g0.txt").unwrap();
    assert_eq!(grammar.names()[0], grammar.top());
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    let text = "# a leading comment\n\nS -> a # trailing comment\n\n";
    let (grammar, malformed) = Grammar::parse(text, "t.txt").unwrap();
    assert!(malformed.is_empty());
    assert_eq!(grammar.rules().len(), 2);
}

#[test]
fn test_malformed_lines_are_collected_not_fatal() {
    let text = "S -> a\nthis line has no arrow\nA B -> c\nR -> b\n";
    let (grammar, malformed) = Grammar::parse(text, "t.txt").unwrap();
    assert_eq!(malformed.len(), 2);
    assert_eq!(malformed[0].line, 2);
    assert_eq!(malformed[1].line, 3);
    // rule 0 (synthetic) + S -> a + R -> b
    assert_eq!(grammar.rules().len(), 3);
}

#[test]
fn test_empty_grammar_is_fatal() {
    let err = Grammar::parse("# just a comment\n\n", "empty.txt").unwrap_err();
    assert_eq!(
        err,
        GrammarError::EmptyGrammar {
            source: "empty.txt".to_string()
        }
    );
}

#[test]
fn test_epsilon_rhs_is_allowed() {
    let text = "S -> A\nA ->\n";
    let (grammar, malformed) = Grammar::parse(text, "t.txt").unwrap();
    assert!(malformed.is_empty());
    let a_rule = grammar
        .rules()
        .iter()
        .find(|r| grammar.symbols().name_of(r.lhs) == "A")
        .unwrap();
    assert!(a_rule.rhs.is_empty());
}

#[test]
fn test_augmented_axiom_is_fresh_even_if_user_defines_s_prime() {
    let text = "S' -> a\nA -> b\n";
    let (grammar, _) = Grammar::parse(text, "t.txt").unwrap();
    // The user's "S'" rule must survive as its own non-terminal, distinct
    // from the synthetic axiom, which is forced to a further-primed name.
    let user_s_prime = grammar.symbols().get("S'").unwrap();
    assert_ne!(grammar.top(), user_s_prime);
    assert_eq!(grammar.symbols().name_of(grammar.top()), "S''");
    // rule 0 still expands to the first user rule's LHS.
    assert_eq!(grammar.rule(0).rhs.head(), Some(user_s_prime));
}

#[test]
fn test_render_rule_and_numbered_listing() {
    let (grammar, _) = Grammar::parse("S -> a b\n", "t.txt").unwrap();
    assert_eq!(grammar.render_rule(1), "S -> a b");
    let listing = grammar.render_numbered();
    assert!(listing.starts_with("0: S'"));
    assert!(listing.contains("1: S -> a b"));
}
