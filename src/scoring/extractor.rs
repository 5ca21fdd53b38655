//! Signal extraction from raw job and résumé text

use crate::error::{JobRankerError, Result};
use crate::scoring::vocabulary::{
    JUNIOR_KEYWORDS, SENIOR_KEYWORDS, SKILL_VOCABULARY, TITLE_STOP_WORDS,
};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Seniority classification for a job posting or a résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Junior,
    Mid,
    Senior,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Junior => write!(f, "junior"),
            Level::Mid => write!(f, "mid"),
            Level::Senior => write!(f, "senior"),
        }
    }
}

/// Signals extracted for one job relative to the résumé.
///
/// Pure data: produced by [`SignalExtractor::extract`] and consumed by the
/// dimension scorer, with no references back into the source text.
#[derive(Debug, Clone)]
pub struct JobSignals {
    /// Vocabulary terms found in the job's title + description.
    pub jd_skills: HashSet<String>,
    /// Vocabulary terms found in the résumé.
    pub resume_skills: HashSet<String>,
    /// Level classified from the job title only (the title carries more
    /// signal than the description).
    pub jd_level: Level,
    /// Level classified from the full résumé text.
    pub resume_level: Level,
    /// Required years of experience parsed from the job text, when the
    /// posting states one. Extracted and surfaced for display, but
    /// deliberately not folded into the score.
    pub required_years: Option<u32>,
    /// Domain-specific title tokens surviving stop-word removal, sorted.
    pub title_keywords: Vec<String>,
}

/// Extracts skill, level, experience, and title signals from free text.
///
/// Holds the compiled per-term skill patterns and the experience-years
/// pattern; build once and reuse across a batch.
pub struct SignalExtractor {
    skill_patterns: Vec<(String, Regex)>,
    years_pattern: Regex,
    title_stop_words: HashSet<&'static str>,
}

impl SignalExtractor {
    /// Create an extractor over the default skill vocabulary.
    pub fn new() -> Result<Self> {
        Self::with_custom_terms(&[])
    }

    /// Create an extractor recognizing additional vocabulary terms on top
    /// of the defaults.
    pub fn with_custom_terms(additional_terms: &[String]) -> Result<Self> {
        let mut terms: Vec<String> = SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect();
        terms.extend(additional_terms.iter().map(|t| t.trim().to_lowercase()));
        let mut seen = HashSet::new();
        terms.retain(|t| !t.is_empty() && seen.insert(t.clone()));

        let mut skill_patterns = Vec::with_capacity(terms.len());
        for term in terms {
            let pattern = whole_token_pattern(&term);
            let regex = Regex::new(&pattern).map_err(|e| {
                JobRankerError::Processing(format!(
                    "Failed to build matcher for vocabulary term '{}': {}",
                    term, e
                ))
            })?;
            skill_patterns.push((term, regex));
        }

        let years_pattern = Regex::new(r"(\d+)\+?\s*(?:year|yr)")
            .map_err(|e| JobRankerError::Processing(format!("Failed to build years pattern: {}", e)))?;

        Ok(Self {
            skill_patterns,
            years_pattern,
            title_stop_words: TITLE_STOP_WORDS.iter().copied().collect(),
        })
    }

    /// Extract the full signal bundle for one job against the résumé.
    ///
    /// Inputs may be any case and any length; matching is case-insensitive
    /// and empty strings are valid (they simply yield no matches).
    pub fn extract(&self, title: &str, description: &str, resume_text: &str) -> JobSignals {
        let title = title.to_lowercase();
        let jd_text = format!("{} {}", title, description.to_lowercase());
        let resume = resume_text.to_lowercase();

        JobSignals {
            jd_skills: self.skills_in(&jd_text),
            resume_skills: self.skills_in(&resume),
            jd_level: classify_level(&title),
            resume_level: classify_level(&resume),
            required_years: self.required_years(&jd_text),
            title_keywords: self.title_keywords(&title),
        }
    }

    /// Vocabulary terms present in `text` as whole tokens.
    ///
    /// Expects lowercased input. Whole-token means the occurrence is not
    /// embedded in a longer word: "java" does not hit inside "javascript",
    /// while "c++", "c#", and "node.js" match when bounded by whitespace
    /// or ordinary punctuation.
    pub fn skills_in(&self, text: &str) -> HashSet<String> {
        self.skill_patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(term, _)| term.clone())
            .collect()
    }

    /// Required experience years stated in the job text ("5+ years",
    /// "3 yrs"), if any. Expects lowercased input.
    pub fn required_years(&self, text: &str) -> Option<u32> {
        self.years_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Domain-specific tokens from a lowercased job title: word tokens
    /// minus the generic-role stop set, deduplicated and sorted.
    pub fn title_keywords(&self, title: &str) -> Vec<String> {
        let mut keywords: Vec<String> = title
            .unicode_words()
            .filter(|word| !self.title_stop_words.contains(word))
            .map(|word| word.to_string())
            .collect();
        keywords.sort();
        keywords.dedup();
        keywords
    }

    /// Number of vocabulary terms this extractor recognizes.
    pub fn vocabulary_size(&self) -> usize {
        self.skill_patterns.len()
    }
}

/// Classify a lowercased text as junior, mid, or senior.
///
/// Groups are checked in fixed priority order (senior first), first hit
/// wins; no hit means mid. Containment is substring-based, matching how
/// titles like "Sr. Engineering Lead" read in practice.
pub fn classify_level(text: &str) -> Level {
    if SENIOR_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Level::Senior;
    }
    if JUNIOR_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return Level::Junior;
    }
    Level::Mid
}

/// Build a whole-token pattern for a literal vocabulary term.
///
/// `\b` mishandles terms ending in non-word characters ("c++" followed by
/// a space has no trailing word boundary), so the escaped term is bracketed
/// by explicit boundary classes instead: a neighbor is a boundary unless it
/// could extend the token ([a-z0-9+#]).
fn whole_token_pattern(term: &str) -> String {
    format!(
        "(?:^|[^a-z0-9+#]){}(?:[^a-z0-9+#]|$)",
        regex::escape(term)
    )
}
