//! Batch scoring and ranking of job postings

use crate::error::Result;
use crate::job::JobPosting;
use crate::scoring::extractor::SignalExtractor;
use crate::scoring::scorer::{self, ScoreBreakdown};
use log::debug;

/// Scores a batch of job postings against one résumé and ranks them.
pub struct JobRanker {
    extractor: SignalExtractor,
}

impl JobRanker {
    /// Create a ranker over the default skill vocabulary.
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: SignalExtractor::new()?,
        })
    }

    /// Create a ranker recognizing additional vocabulary terms.
    pub fn with_custom_terms(additional_terms: &[String]) -> Result<Self> {
        Ok(Self {
            extractor: SignalExtractor::with_custom_terms(additional_terms)?,
        })
    }

    /// Score every posting against the résumé, attach `match_score` and
    /// `match_reasons`, and return the batch reordered by descending
    /// score.
    ///
    /// Takes ownership of the batch and returns it annotated; the sort is
    /// stable, so postings with equal scores keep their input order. An
    /// empty résumé is valid and simply matches very little.
    pub fn enrich_and_rank(&self, mut jobs: Vec<JobPosting>, resume_text: &str) -> Vec<JobPosting> {
        for job in &mut jobs {
            let breakdown = self.score_job(job, resume_text);
            debug!(
                "scored '{}': skills {:.1} + level {:.1} + title {:.1} -> {}",
                job.title,
                breakdown.skill_score,
                breakdown.level_score,
                breakdown.title_score,
                breakdown.total()
            );
            job.match_score = Some(breakdown.total());
            job.match_reasons = breakdown.reasons;
        }

        jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        jobs
    }

    /// Score a single posting, returning the per-dimension breakdown.
    pub fn score_job(&self, job: &JobPosting, resume_text: &str) -> ScoreBreakdown {
        let signals = self
            .extractor
            .extract(&job.title, &job.description, resume_text);
        scorer::score(&signals, resume_text)
    }
}

/// Score and rank a batch with the default vocabulary.
///
/// Convenience wrapper over [`JobRanker`] for callers that score one batch
/// and move on.
pub fn enrich_and_rank(jobs: Vec<JobPosting>, resume_text: &str) -> Result<Vec<JobPosting>> {
    Ok(JobRanker::new()?.enrich_and_rank(jobs, resume_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(jobs: &[JobPosting]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn test_every_job_annotated_in_range() {
        let jobs = vec![
            JobPosting::new("Senior Rust Engineer", "rust, aws, docker"),
            JobPosting::new("", ""),
            JobPosting::new("Intern", "entry role, no experience needed"),
        ];
        let ranked = enrich_and_rank(jobs, "mid-level rust developer, aws").unwrap();

        assert_eq!(ranked.len(), 3);
        for job in &ranked {
            let score = job.match_score.expect("score attached");
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_ranking_is_descending() {
        let jobs = vec![
            JobPosting::new("Data Entry Clerk", "typing"),
            JobPosting::new("Python Engineer", "python, aws"),
        ];
        let ranked = enrich_and_rank(jobs, "python and aws engineer").unwrap();

        let scores: Vec<u8> = ranked.iter().map(|j| j.match_score.unwrap()).collect();
        assert!(scores[0] >= scores[1]);
        assert_eq!(ranked[0].title, "Python Engineer");
    }

    #[test]
    fn test_ties_keep_input_order() {
        // identical postings necessarily score identically
        let jobs = vec![
            JobPosting::new("Backend Engineer A", "python services"),
            JobPosting::new("Backend Engineer B", "python services"),
            JobPosting::new("Backend Engineer C", "python services"),
        ];
        let ranked = enrich_and_rank(jobs, "python").unwrap();

        assert_eq!(
            titles(&ranked),
            vec!["Backend Engineer A", "Backend Engineer B", "Backend Engineer C"]
        );
    }

    #[test]
    fn test_blank_record_scores_the_defaults() {
        // no recognized skills -> flat 25, mid vs mid -> default 15, no title -> 0
        let ranked = enrich_and_rank(vec![JobPosting::new("", "")], "plain resume").unwrap();
        assert_eq!(ranked[0].match_score, Some(40));
        assert!(ranked[0].match_reasons.is_empty());
    }

    #[test]
    fn test_negative_total_clamps_to_zero() {
        // senior posting, junior resume, zero overlap, no title match
        let jobs = vec![JobPosting::new("Senior Architect", "python, aws, docker")];
        let ranked = enrich_and_rank(jobs, "junior intern, knows racket").unwrap();

        assert_eq!(ranked[0].match_score, Some(0));
        assert!(ranked[0]
            .match_reasons
            .iter()
            .any(|r| r.starts_with("Warning")));
    }
}
