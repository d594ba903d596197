use crate::dispatch::{Query, QueryResult};
use crate::index::InvertedIndex;
use crate::loader::{read_documents, read_stopwords, LoadReport};
use crate::rank::RankedHit;
use crate::tokenizer::{tokenize, StopWords};
use crate::{query, rank, DocId};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Owns the stopword set and both index stores. Loading mutates it;
/// every query takes `&self`.
#[derive(Debug, Default, Clone)]
pub struct SearchEngine {
    stopwords: StopWords,
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    /// Load stopwords, then documents, from disk.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(stopwords: P, documents: Q) -> Result<(Self, LoadReport)> {
        let mut engine = Self::new();
        engine.load_stop_words(stopwords)?;
        let report = engine.load_documents(documents)?;
        Ok((engine, report))
    }

    pub fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening stopwords {}", path.display()))?;
        self.load_stop_words_from(BufReader::new(f))
            .with_context(|| format!("loading stopwords {}", path.display()))
    }

    /// Stopwords only affect documents loaded afterwards.
    pub fn load_stop_words_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let stop = read_stopwords(reader)?;
        tracing::info!(count = stop.len(), "loaded stopwords");
        self.stopwords = stop;
        Ok(())
    }

    pub fn load_documents<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening documents {}", path.display()))?;
        self.load_documents_from(BufReader::new(f))
            .with_context(|| format!("loading documents {}", path.display()))
    }

    pub fn load_documents_from<R: BufRead>(&mut self, reader: R) -> Result<LoadReport> {
        let (records, skipped) = read_documents(reader)?;
        let loaded = records.len();
        for record in records {
            let terms = tokenize(&record.text, &self.stopwords);
            self.index.add_document(record.id, terms);
        }
        tracing::info!(
            loaded,
            skipped = skipped.len(),
            num_docs = self.index.num_docs(),
            num_terms = self.index.num_terms(),
            "ingested documents"
        );
        Ok(LoadReport { loaded, skipped })
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn stop_words(&self) -> &StopWords { &self.stopwords }

    pub fn and_query(&self, t1: &str, t2: &str) -> Vec<DocId> {
        query::and_query(&self.index, t1, t2)
    }

    pub fn or_query(&self, t1: &str, t2: &str) -> Vec<DocId> {
        query::or_query(&self.index, t1, t2)
    }

    pub fn mixed_query<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<DocId> {
        query::mixed_query(&self.index, tokens)
    }

    pub fn rank<S: AsRef<str>>(&self, terms: &[S]) -> Vec<RankedHit> {
        rank::rank(&self.index, terms)
    }

    pub fn rank_top<S: AsRef<str>>(&self, terms: &[S], limit: usize) -> Vec<RankedHit> {
        rank::rank_top(&self.index, terms, limit)
    }

    pub fn execute(&self, q: &Query) -> QueryResult {
        self.execute_limited(q, None)
    }

    /// Run a query keeping at most `limit` results when one is given.
    pub fn execute_limited(&self, q: &Query, limit: Option<usize>) -> QueryResult {
        tracing::debug!(query = ?q, ?limit, "executing query");
        let mut ids = match q {
            Query::Ranked(terms) => {
                return QueryResult::Ranked(match limit {
                    Some(k) => self.rank_top(terms.as_slice(), k),
                    None => self.rank(terms.as_slice()),
                });
            }
            Query::And(t1, t2) => self.and_query(t1, t2),
            Query::Or(t1, t2) => self.or_query(t1, t2),
            Query::Mixed(tokens) => self.mixed_query(tokens.as_slice()),
            Query::Empty => Vec::new(),
        };
        if let Some(k) = limit {
            ids.truncate(k);
        }
        QueryResult::Documents(ids)
    }
}
