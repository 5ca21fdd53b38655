//! Fixed vocabulary and keyword tables used by signal extraction
//!
//! These are configuration data rather than behavior: read-only constants
//! shared by every scoring run. Additional vocabulary terms can be appended
//! via [`crate::config::VocabularyConfig`], but the tables themselves are
//! never mutated after startup.

/// Canonical technical-skill terms recognized in job and résumé text.
///
/// All lowercase lexical forms; several carry characters that are special
/// to regex syntax ("c++", "c#", "node.js") and must be escaped before use
/// in a pattern.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "go",
    "rust",
    "sql",
    "azure",
    "aws",
    "gcp",
    "docker",
    "kubernetes",
    "react",
    "node.js",
    "spring boot",
    "machine learning",
    "ai",
    "nlp",
    "racket",
    "solidity",
    "blockchain",
    "rest api",
    "microservices",
    "devops",
    "testing",
    "distributed systems",
];

/// Keywords marking a senior-level role or candidate. Checked before the
/// junior group; first group with a hit wins.
pub const SENIOR_KEYWORDS: &[&str] = &["senior", "staff", "lead", "architect"];

/// Keywords marking a junior-level role or candidate.
pub const JUNIOR_KEYWORDS: &[&str] = &["junior", "new grad", "entry", "intern"];

/// Generic role words stripped from job titles before title-keyword
/// matching, leaving only the domain-specific tokens.
pub const TITLE_STOP_WORDS: &[&str] = &[
    "software",
    "engineer",
    "developer",
    "senior",
    "junior",
    "full",
    "stack",
];
