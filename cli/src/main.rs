use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::{render, render_json, run_repl, stats};
use search_core::{Query, SearchEngine};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Boolean and term-frequency search over a small CSV corpus", long_about = None)]
struct Cli {
    /// Stopword file, one word per line
    #[arg(long, global = true, env = "SEARCH_STOPWORDS", default_value = "resources/stop.txt")]
    stopwords: String,
    /// Document file of `id,text` records
    #[arg(long, global = true, env = "SEARCH_DOCUMENTS", default_value = "resources/dataset.csv")]
    documents: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (the default)
    Repl,
    /// Run a single query and exit
    Query {
        /// Query text, e.g. "rust AND index" or "inverted index"
        text: String,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Keep at most this many results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print index statistics
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let (engine, report) = SearchEngine::load(&cli.stopwords, &cli.documents)?;
    for skipped in &report.skipped {
        eprintln!("Skipping line {} ({}): {}", skipped.line_number, skipped.reason, skipped.line);
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&engine, io::stdin().lock(), io::stdout().lock()),
        Commands::Query { text, json, limit } => {
            let result = engine.execute_limited(&Query::parse(&text), limit);
            if json {
                println!("{}", render_json(&result)?);
            } else {
                print!("{}", render(&result));
            }
            Ok(())
        }
        Commands::Stats => {
            print!("{}", stats(&engine, &report));
            Ok(())
        }
    }
}
