use anyhow::Result;
use search_core::{LoadReport, Query, QueryResult, SearchEngine};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter your query (AND, OR, or Rank), or type 'exit' to quit:";
pub const FAREWELL: &str = "Exiting search engine.";
pub const NO_RESULTS: &str = "No documents found.";

/// Plain-text rendering, one line per document.
pub fn render(result: &QueryResult) -> String {
    if result.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let lines: Vec<String> = match result {
        QueryResult::Documents(ids) => ids.iter().map(|id| format!("Document {id}\n")).collect(),
        QueryResult::Ranked(hits) => hits
            .iter()
            .map(|hit| format!("Document {} (Score: {})\n", hit.doc_id, hit.score))
            .collect(),
    };
    lines.concat()
}

pub fn render_json(result: &QueryResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn stats(engine: &SearchEngine, report: &LoadReport) -> String {
    format!(
        "documents: {}\nterms: {}\nstopwords: {}\nskipped records: {}\n",
        engine.index().num_docs(),
        engine.index().num_terms(),
        engine.stop_words().len(),
        report.skipped.len()
    )
}

/// Prompt, read a line, answer it, until `exit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(engine: &SearchEngine, input: R, mut out: W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            writeln!(out, "{FAREWELL}")?;
            break;
        }
        if line.is_empty() {
            continue;
        }
        tracing::debug!(line, "query received");
        let result = engine.execute(&Query::parse(line));
        write!(out, "{}", render(&result))?;
    }
    Ok(())
}
