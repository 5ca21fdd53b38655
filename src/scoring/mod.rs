//! Résumé-to-job scoring pipeline: extract signals, score dimensions,
//! rank the batch

pub mod extractor;
pub mod ranker;
pub mod scorer;
pub mod vocabulary;

pub use extractor::{JobSignals, Level, SignalExtractor};
pub use ranker::{enrich_and_rank, JobRanker};
pub use scorer::ScoreBreakdown;
