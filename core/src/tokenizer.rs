use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_TERM: Regex = Regex::new(r"[^a-z0-9\s]").expect("valid regex");
}

/// Terms excluded from indexing and from query matching.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Build from raw lines; each line is trimmed and lower-cased.
    /// A blank line inserts the empty string, which never matches a term.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop = Self::new();
        for line in lines {
            stop.insert(line.as_ref());
        }
        stop
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.trim().to_lowercase())
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

/// Lower-case, fold diacritics (NFKD) and drop everything but ASCII letters,
/// digits and whitespace. Joined words such as `don't` collapse to `dont`.
pub fn normalize(text: &str) -> String {
    let folded = text.nfkd().collect::<String>().to_lowercase();
    NON_TERM.replace_all(&folded, "").into_owned()
}

/// Normalize a single query word. Interior whitespace is removed so the
/// result is always a single term (possibly empty).
pub fn normalize_term(raw: &str) -> String {
    normalize(raw).split_whitespace().collect()
}

/// Tokenize text into terms, in order and with duplicates, minus stopwords.
pub fn tokenize(text: &str, stopwords: &StopWords) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|term| !stopwords.contains(term))
        .map(str::to_owned)
        .collect()
}
