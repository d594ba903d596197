pub mod dispatch;
pub mod engine;
pub mod index;
pub mod loader;
pub mod query;
pub mod rank;
pub mod tokenizer;

pub type DocId = u32;

pub use dispatch::{Query, QueryResult};
pub use engine::SearchEngine;
pub use index::InvertedIndex;
pub use loader::{LoadReport, SkipReason, SkippedRecord};
pub use rank::RankedHit;
pub use tokenizer::StopWords;
