use crate::tokenizer::StopWords;
use crate::DocId;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead};

/// One `id,text` record from a document source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: DocId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    Blank,
    MissingText,
    InvalidId(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Blank => write!(f, "blank line"),
            SkipReason::MissingText => write!(f, "no text field after the document id"),
            SkipReason::InvalidId(raw) => write!(f, "invalid document id {raw:?}"),
        }
    }
}

/// A record that was dropped during loading; loading itself continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// 1-based line number in the source.
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Like `BufRead::lines`, but bytes that are not UTF-8 decode to U+FFFD
/// instead of failing the whole source.
fn lossy_lines<R: BufRead>(mut reader: R) -> impl Iterator<Item = io::Result<String>> {
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    })
}

pub fn read_stopwords<R: BufRead>(reader: R) -> Result<StopWords> {
    let mut stop = StopWords::new();
    for line in lossy_lines(reader) {
        let line = line.context("reading stopword source")?;
        stop.insert(&line);
    }
    Ok(stop)
}

/// Only ever checked against the first line of a source.
pub fn is_header(id_field: &str) -> bool {
    let id = id_field.trim().to_lowercase();
    id == "id" || id.contains("document id")
}

fn parse_record(line: &str) -> Result<DocumentRecord, SkipReason> {
    if line.trim().is_empty() {
        return Err(SkipReason::Blank);
    }
    let (id, text) = match line.split_once(',') {
        Some((id, text)) => (id.trim(), text.trim()),
        None => return Err(SkipReason::MissingText),
    };
    let id: DocId = id.parse().map_err(|_| SkipReason::InvalidId(id.to_string()))?;
    Ok(DocumentRecord { id, text: text.to_string() })
}

/// Parse a document source. Malformed records are skipped and returned
/// alongside the good ones; only I/O failures are errors.
pub fn read_documents<R: BufRead>(reader: R) -> Result<(Vec<DocumentRecord>, Vec<SkippedRecord>)> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for (idx, line) in lossy_lines(reader).enumerate() {
        let line = line.with_context(|| format!("reading document source at line {}", idx + 1))?;
        if idx == 0 {
            let id_field = line.split(',').next().unwrap_or_default();
            if is_header(id_field) {
                tracing::debug!(line = %line, "skipping header record");
                continue;
            }
        }
        match parse_record(&line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!(line_number = idx + 1, %reason, "skipping document record");
                skipped.push(SkippedRecord { line_number: idx + 1, line, reason });
            }
        }
    }
    Ok((records, skipped))
}
