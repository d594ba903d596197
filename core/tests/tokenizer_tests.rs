use search_core::tokenizer::{tokenize, StopWords};

#[test]
fn it_normalizes_and_folds_diacritics() {
    let words = tokenize("Café's MENU: naïve crème-brûlée, 2 for £10!", &StopWords::new());
    assert_eq!(words, vec!["cafes", "menu", "naive", "cremebrulee", "2", "for", "10"]);
}

#[test]
fn it_filters_stopwords() {
    let stop = StopWords::from_lines(["the", "and"]);
    let words = tokenize("The quick brown fox and the lazy dog", &stop);
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words.len(), 5);
}

#[test]
fn it_keeps_order_and_duplicates() {
    let words = tokenize("to be or not to be", &StopWords::from_lines(["or"]));
    assert_eq!(words, vec!["to", "be", "not", "to", "be"]);
}
