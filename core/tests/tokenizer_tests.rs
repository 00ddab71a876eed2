use std::borrow::Cow;
use tweetdex_core::tokenizer::{fold_term, terms, tokenize};
use tweetdex_core::TermFolding;

#[test]
fn it_keeps_tokens_verbatim() {
    let toks: Vec<&str> = tokenize("Running Runners RUN! The café's menu.").collect();
    assert_eq!(toks, vec!["Running", "Runners", "RUN!", "The", "café's", "menu."]);
}

#[test]
fn it_restarts_from_a_clone() {
    let toks = tokenize("a b c");
    let first: Vec<&str> = toks.clone().collect();
    let second: Vec<&str> = toks.collect();
    assert_eq!(first, second);
}

#[test]
fn it_folds_case_punctuation_and_compatibility_forms() {
    assert_eq!(fold_term("Café's").as_deref(), Some("cafés"));
    assert_eq!(fold_term("ＢＡＨＮ").as_deref(), Some("bahn"));
    assert_eq!(fold_term("[NEWLINE]"), None);
    assert_eq!(fold_term("\"#@!"), None);
}

#[test]
fn it_does_not_remove_stopwords() {
    let words: Vec<Cow<str>> = terms("The quick brown fox and the lazy dog", TermFolding::Folded).collect();
    assert!(words.iter().any(|w| w == "the"));
    assert!(words.iter().any(|w| w == "and"));
    assert_eq!(words.len(), 8);
}
