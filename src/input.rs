//! Input loading: résumé text and job batches
//!
//! Résumés are read as plain text (TXT or MD); no PDF/DOCX extraction.
//! Job batches arrive as a JSON array of posting records.

use crate::error::{JobRankerError, Result};
use crate::job::JobPosting;
use log::{info, warn};
use std::path::Path;

/// Read the résumé as plain text.
pub fn load_resume(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        JobRankerError::InvalidInput(format!("Cannot read resume {}: {}", path.display(), e))
    })?;

    if text.trim().is_empty() {
        warn!("Resume {} is empty; most signals will not match", path.display());
    }
    info!("Loaded resume ({} characters)", text.len());

    Ok(text)
}

/// Load a batch of job postings from a JSON array file.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        JobRankerError::InvalidInput(format!("Cannot read jobs file {}: {}", path.display(), e))
    })?;

    let jobs: Vec<JobPosting> = serde_json::from_str(&raw).map_err(|e| {
        JobRankerError::InvalidInput(format!(
            "Jobs file {} is not a JSON array of postings: {}",
            path.display(),
            e
        ))
    })?;

    info!("Loaded {} job postings", jobs.len());
    Ok(jobs)
}

/// Write a ranked batch back out as pretty-printed JSON.
pub fn save_jobs(path: &Path, jobs: &[JobPosting]) -> Result<()> {
    let content = serde_json::to_string_pretty(jobs)?;
    std::fs::write(path, content)?;
    info!("Saved ranked batch to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("job-ranker-test-{}", name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_jobs_array() {
        let path = temp_file(
            "jobs.json",
            r#"[{"jobTitle": "Engineer", "jobDescription": "rust"}, {"title": "Analyst"}]"#,
        );
        let jobs = load_jobs(&path).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Engineer");
        assert_eq!(jobs[1].description, "");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_jobs_rejects_non_array() {
        let path = temp_file("not-array.json", r#"{"title": "Engineer"}"#);
        assert!(load_jobs(&path).is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_resume_fails() {
        assert!(load_resume(Path::new("/nonexistent/resume.txt")).is_err());
    }
}
