use search_cli::{render, render_json, run_repl, stats, FAREWELL, NO_RESULTS, PROMPT};
use search_core::{QueryResult, RankedHit, SearchEngine};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn engine() -> SearchEngine {
    let dir = tempdir().unwrap();
    let stop = dir.path().join("stop.txt");
    let docs = dir.path().join("dataset.csv");
    fs::write(&stop, "the\nis\n").unwrap();
    fs::write(&docs, "id,text\n1,The cat is black\n2,The dog is black\n3,cat cat dog\n").unwrap();
    let (engine, report) = SearchEngine::load(&stop, &docs).unwrap();
    assert_eq!(report.loaded, 3);
    engine
}

fn session(input: &str) -> String {
    let engine = engine();
    let mut out = Vec::new();
    run_repl(&engine, Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn repl_answers_each_form_until_exit() {
    let out = session("cat AND black\ncat or dog\ncat\nbird\nEXIT\ncat\n");
    let expected = [
        PROMPT,
        "Document 1",
        PROMPT,
        "Document 1",
        "Document 2",
        "Document 3",
        PROMPT,
        "Document 3 (Score: 2)",
        "Document 1 (Score: 1)",
        PROMPT,
        NO_RESULTS,
        PROMPT,
        FAREWELL,
    ];
    assert_eq!(out.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn repl_stops_at_end_of_input_and_skips_blank_lines() {
    let out = session("\n   \n");
    assert_eq!(out.lines().filter(|l| *l == PROMPT).count(), 3);
    assert!(!out.contains(FAREWELL));
}

#[test]
fn repl_runs_mixed_queries() {
    let out = session("dog or cat and black\nexit\n");
    let docs: Vec<&str> = out.lines().filter(|l| l.starts_with("Document")).collect();
    assert_eq!(docs, vec!["Document 1", "Document 2", "Document 3"]);
}

#[test]
fn render_text_and_json() {
    let ranked = QueryResult::Ranked(vec![
        RankedHit { doc_id: 3, score: 2 },
        RankedHit { doc_id: 1, score: 1 },
    ]);
    assert_eq!(render(&ranked), "Document 3 (Score: 2)\nDocument 1 (Score: 1)\n");
    assert_eq!(render(&QueryResult::Documents(vec![4, 2])), "Document 4\nDocument 2\n");
    assert_eq!(render(&QueryResult::Documents(Vec::new())), format!("{NO_RESULTS}\n"));

    let top = engine().execute_limited(&search_core::Query::parse("cat"), Some(1));
    let json: serde_json::Value = serde_json::from_str(&render_json(&top).unwrap()).unwrap();
    assert_eq!(json["kind"], "ranked");
    assert_eq!(json["results"].as_array().unwrap().len(), 1);
    assert_eq!(json["results"][0]["doc_id"], 3);
}

#[test]
fn stats_summarize_the_load() {
    let engine = engine();
    let report = Default::default();
    let text = stats(&engine, &report);
    assert!(text.contains("documents: 3"));
    assert!(text.contains("terms: 3"));
    assert!(text.contains("stopwords: 2"));
}
