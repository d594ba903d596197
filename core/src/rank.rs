use crate::index::InvertedIndex;
use crate::DocId;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedHit {
    pub doc_id: DocId,
    pub score: usize,
}

/// Score each document by the summed frequency of the query terms it
/// contains. A term repeated in the query counts once per repetition.
/// Ordered by score descending, then doc id ascending.
pub fn rank<S: AsRef<str>>(index: &InvertedIndex, terms: &[S]) -> Vec<RankedHit> {
    let mut scores: HashMap<DocId, usize> = HashMap::new();
    for term in terms {
        let term = term.as_ref();
        let docs: HashSet<DocId> = index.postings(term).iter().copied().collect();
        for doc_id in docs {
            *scores.entry(doc_id).or_insert(0) += index.term_frequency(doc_id, term);
        }
    }

    let mut hits: Vec<RankedHit> = scores
        .into_iter()
        .map(|(doc_id, score)| RankedHit { doc_id, score })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score).then(a.doc_id.cmp(&b.doc_id)));
    hits
}

pub fn rank_top<S: AsRef<str>>(index: &InvertedIndex, terms: &[S], limit: usize) -> Vec<RankedHit> {
    let mut hits = rank(index, terms);
    hits.truncate(limit);
    hits
}
