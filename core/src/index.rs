use crate::DocId;
use std::collections::HashMap;

/// Forward store (doc id -> term sequence) and inverted store
/// (term -> one posting per occurrence). Both are only handed out as
/// borrowed slices, so query code cannot mutate them.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    docs: HashMap<DocId, Vec<String>>,
    postings: HashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Store a tokenized document. A duplicate id replaces the earlier
    /// document, and its old postings are withdrawn first so the two stores
    /// keep mirroring each other.
    pub fn add_document(&mut self, doc_id: DocId, terms: Vec<String>) {
        if let Some(previous) = self.docs.remove(&doc_id) {
            self.withdraw(doc_id, &previous);
        }
        for term in &terms {
            self.postings.entry(term.clone()).or_default().push(doc_id);
        }
        self.docs.insert(doc_id, terms);
    }

    fn withdraw(&mut self, doc_id: DocId, terms: &[String]) {
        for term in terms {
            if let Some(list) = self.postings.get_mut(term) {
                list.retain(|&d| d != doc_id);
                if list.is_empty() {
                    self.postings.remove(term);
                }
            }
        }
    }

    /// Posting list for a term; unknown terms have an empty list.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn document(&self, doc_id: DocId) -> Option<&[String]> {
        self.docs.get(&doc_id).map(Vec::as_slice)
    }

    /// Occurrences of `term` in the document's term sequence.
    pub fn term_frequency(&self, doc_id: DocId, term: &str) -> usize {
        self.document(doc_id)
            .map(|terms| terms.iter().filter(|t| *t == term).count())
            .unwrap_or(0)
    }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn doc_ids(&self) -> Vec<DocId> {
        let mut ids: Vec<DocId> = self.docs.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// True when the (term, doc) occurrence multisets of both stores agree.
    pub fn is_consistent(&self) -> bool {
        let mut from_docs: HashMap<(&str, DocId), usize> = HashMap::new();
        for (doc_id, terms) in &self.docs {
            for term in terms {
                *from_docs.entry((term.as_str(), *doc_id)).or_insert(0) += 1;
            }
        }
        let mut from_postings: HashMap<(&str, DocId), usize> = HashMap::new();
        for (term, list) in &self.postings {
            if list.is_empty() {
                return false;
            }
            for doc_id in list {
                *from_postings.entry((term.as_str(), *doc_id)).or_insert(0) += 1;
            }
        }
        from_docs == from_postings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn one_posting_per_occurrence() {
        let mut index = InvertedIndex::new();
        index.add_document(1, terms(&["rust", "fast", "rust"]));
        index.add_document(2, terms(&["rust"]));
        assert_eq!(index.postings("rust"), &[1, 1, 2]);
        assert_eq!(index.postings("fast"), &[1]);
        assert_eq!(index.term_frequency(1, "rust"), 2);
        assert!(index.postings("missing").is_empty());
        assert!(index.is_consistent());
    }

    #[test]
    fn duplicate_id_is_last_write_wins() {
        let mut index = InvertedIndex::new();
        index.add_document(7, terms(&["old", "shared"]));
        index.add_document(8, terms(&["shared"]));
        index.add_document(7, terms(&["new", "shared"]));

        assert_eq!(index.document(7), Some(&terms(&["new", "shared"])[..]));
        assert!(index.postings("old").is_empty());
        assert_eq!(index.postings("shared"), &[8, 7]);
        assert_eq!(index.num_docs(), 2);
        assert_eq!(index.num_terms(), 2);
        assert!(index.is_consistent());
    }

    #[test]
    fn empty_document_is_stored() {
        let mut index = InvertedIndex::new();
        index.add_document(3, Vec::new());
        assert_eq!(index.doc_ids(), vec![3]);
        assert_eq!(index.num_terms(), 0);
        assert!(index.is_consistent());
    }
}
