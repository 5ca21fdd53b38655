//! Output rendering for ranked batches

use crate::error::Result;
use crate::job::JobPosting;
use crate::scoring::ScoreBreakdown;
use colored::{ColoredString, Colorize};

/// Console renderer with optional colors and per-dimension detail.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    top: Option<usize>,
}

/// JSON renderer for piping the ranked batch into other tooling.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, top: Option<usize>) -> Self {
        Self {
            use_colors,
            detailed,
            top,
        }
    }

    /// Render the ranked batch. `breakdowns` must parallel `jobs`; it is
    /// only consulted in detailed mode.
    pub fn format(&self, jobs: &[JobPosting], breakdowns: &[ScoreBreakdown]) -> String {
        let shown = self.top.unwrap_or(jobs.len()).min(jobs.len());
        let mut out = String::new();

        out.push_str(&format!(
            "Ranked {} posting{}{}\n\n",
            jobs.len(),
            if jobs.len() == 1 { "" } else { "s" },
            if shown < jobs.len() {
                format!(" (showing top {})", shown)
            } else {
                String::new()
            }
        ));

        for (idx, job) in jobs.iter().take(shown).enumerate() {
            let score = job.match_score.unwrap_or(0);
            let title: &str = if job.title.is_empty() {
                "(untitled posting)"
            } else {
                job.title.as_str()
            };

            out.push_str(&format!(
                "{:>3}. [{}] {}\n",
                idx + 1,
                self.paint_score(score),
                title
            ));

            for reason in &job.match_reasons {
                out.push_str(&format!("       - {}\n", reason));
            }

            if self.detailed {
                if let Some(breakdown) = breakdowns.get(idx) {
                    out.push_str(&format!(
                        "       skills {:>5.1} | level {:>5.1} | title {:>4.1}\n",
                        breakdown.skill_score, breakdown.level_score, breakdown.title_score
                    ));
                    if let Some(years) = breakdown.required_years {
                        out.push_str(&format!(
                            "       posting asks for {}+ years (not scored)\n",
                            years
                        ));
                    }
                }
            }
        }

        out
    }

    fn paint_score(&self, score: u8) -> ColoredString {
        let text = format!("{:>3}", score);
        if !self.use_colors {
            return text.as_str().normal();
        }
        match score {
            70..=100 => text.as_str().green().bold(),
            40..=69 => text.as_str().yellow(),
            _ => text.as_str().red(),
        }
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format(&self, jobs: &[JobPosting]) -> Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(jobs)?
        } else {
            serde_json::to_string(jobs)?
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked_job(title: &str, score: u8, reasons: &[&str]) -> JobPosting {
        let mut job = JobPosting::new(title, "");
        job.match_score = Some(score);
        job.match_reasons = reasons.iter().map(|r| r.to_string()).collect();
        job
    }

    #[test]
    fn test_console_lists_jobs_in_order() {
        let jobs = vec![
            ranked_job("Python Engineer", 75, &["Matches 2 key technical skills"]),
            ranked_job("Analyst", 40, &[]),
        ];
        let formatter = ConsoleFormatter::new(false, false, None);
        let out = formatter.format(&jobs, &[]);

        assert!(out.contains("Ranked 2 postings"));
        let python_pos = out.find("Python Engineer").unwrap();
        let analyst_pos = out.find("Analyst").unwrap();
        assert!(python_pos < analyst_pos);
        assert!(out.contains("Matches 2 key technical skills"));
    }

    #[test]
    fn test_console_top_cutoff() {
        let jobs = vec![
            ranked_job("First", 80, &[]),
            ranked_job("Second", 60, &[]),
            ranked_job("Third", 20, &[]),
        ];
        let formatter = ConsoleFormatter::new(false, false, Some(2));
        let out = formatter.format(&jobs, &[]);

        assert!(out.contains("showing top 2"));
        assert!(out.contains("Second"));
        assert!(!out.contains("Third"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let jobs = vec![ranked_job("SRE", 55, &[])];
        let out = JsonFormatter::new(true).format(&jobs).unwrap();
        let parsed: Vec<JobPosting> = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed[0].match_score, Some(55));
    }
}
