//! Job posting records exchanged with the surrounding job-search tooling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single job posting as supplied by an external collaborator.
///
/// Only `title` and `description` are read for scoring; fields absent from
/// the input deserialize to empty strings rather than failing. Any other
/// fields on the record are carried through `extra` untouched, so a batch
/// survives the annotate-and-rank round trip intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, alias = "jobTitle")]
    pub title: String,

    #[serde(default, alias = "jobDescription")]
    pub description: String,

    /// Match score in [0, 100], attached by the ranker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,

    /// Short human-readable reasons behind the score, in dimension order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_reasons: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            match_score: None,
            match_reasons: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}
