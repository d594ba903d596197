use crate::query::Operator;
use crate::rank::RankedHit;
use crate::tokenizer::normalize_term;
use crate::DocId;
use serde::Serialize;

/// One input line classified into a query form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    And(String, String),
    Or(String, String),
    /// Normalized terms interleaved with literal `AND` / `OR` tokens.
    Mixed(Vec<String>),
    Ranked(Vec<String>),
    Empty,
}

fn operator_word(word: &str) -> Option<Operator> {
    if word.eq_ignore_ascii_case("and") {
        Some(Operator::And)
    } else if word.eq_ignore_ascii_case("or") {
        Some(Operator::Or)
    } else {
        None
    }
}

impl Query {
    /// Three words with an operator in the middle are pairwise; any other
    /// operator word makes the line mixed; everything else is ranked.
    pub fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Query::Empty;
        }

        if words.len() == 3 {
            if let Some(op) = operator_word(words[1]) {
                let (t1, t2) = (normalize_term(words[0]), normalize_term(words[2]));
                return match op {
                    Operator::And => Query::And(t1, t2),
                    Operator::Or => Query::Or(t1, t2),
                };
            }
        }

        if words.iter().any(|w| operator_word(w).is_some()) {
            let tokens = words
                .iter()
                .map(|w| match operator_word(w) {
                    Some(op) => op.as_str().to_string(),
                    None => normalize_term(w),
                })
                .collect();
            return Query::Mixed(tokens);
        }

        let terms: Vec<String> = words
            .iter()
            .map(|w| normalize_term(w))
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() { Query::Empty } else { Query::Ranked(terms) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "results", rename_all = "snake_case")]
pub enum QueryResult {
    Documents(Vec<DocId>),
    Ranked(Vec<RankedHit>),
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        match self {
            QueryResult::Documents(ids) => ids.is_empty(),
            QueryResult::Ranked(hits) => hits.is_empty(),
        }
    }
}
