//! Job ranker library: score job postings against a résumé and rank them

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod job;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{JobRankerError, Result};
pub use job::JobPosting;
pub use scoring::{enrich_and_rank, JobRanker};
