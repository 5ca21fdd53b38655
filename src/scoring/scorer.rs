//! Dimension scoring: converts extracted signals into weighted sub-scores
//!
//! Three dimensions with a fixed point budget each: skills (50), level
//! (30, the only one that can go negative), title (20). The formulas are
//! the design and are intentionally not configurable.

use crate::scoring::extractor::{JobSignals, Level};

/// Point budget of the skill dimension.
pub const SKILL_WEIGHT: f64 = 50.0;
/// Point budget of the level dimension.
pub const LEVEL_WEIGHT: f64 = 30.0;
/// Point budget (and clamp) of the title dimension.
pub const TITLE_WEIGHT: f64 = 20.0;

/// Super-linear exponent on the skill-overlap ratio. Compresses weak
/// overlap toward zero while keeping near-full credit for strong overlap,
/// which separates candidates far more than a linear scale would.
const SKILL_EXPONENT: f64 = 1.5;

/// Points per matching title keyword, before the dimension clamp.
const TITLE_KEYWORD_BONUS: f64 = 10.0;

/// Sub-scores and reasons produced while scoring one job.
///
/// Transient: folded into the job record's `match_score`/`match_reasons`
/// and kept around only for detailed display.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub level_score: f64,
    pub title_score: f64,
    /// Reasons in dimension order: skill, level, title.
    pub reasons: Vec<String>,
    /// Required years parsed from the posting; surfaced for display,
    /// never scored.
    pub required_years: Option<u32>,
}

impl ScoreBreakdown {
    /// Final score: sub-scores summed, rounded to the nearest integer,
    /// clamped to [0, 100].
    pub fn total(&self) -> u8 {
        let sum = self.skill_score + self.level_score + self.title_score;
        sum.round().clamp(0.0, 100.0) as u8
    }
}

/// Score one job's signals against the résumé text.
///
/// `resume_text` may be any case; containment checks for the title
/// dimension are performed on a lowercased copy.
pub fn score(signals: &JobSignals, resume_text: &str) -> ScoreBreakdown {
    let resume = resume_text.to_lowercase();
    let mut reasons = Vec::new();

    let skill_score = score_skills(signals, &mut reasons);
    let level_score = score_level(signals.jd_level, signals.resume_level, &mut reasons);
    let title_score = score_title(&signals.title_keywords, &resume, &mut reasons);

    ScoreBreakdown {
        skill_score,
        level_score,
        title_score,
        reasons,
        required_years: signals.required_years,
    }
}

/// Skill dimension: `(|overlap| / |jdSkills|)^1.5 * 50`.
///
/// A posting naming no recognized technical term gets flat half credit:
/// an unclear posting should be neither penalized nor rewarded.
fn score_skills(signals: &JobSignals, reasons: &mut Vec<String>) -> f64 {
    if signals.jd_skills.is_empty() {
        return SKILL_WEIGHT / 2.0;
    }

    let overlap = signals
        .jd_skills
        .intersection(&signals.resume_skills)
        .count();
    let ratio = overlap as f64 / signals.jd_skills.len() as f64;

    if overlap > 0 {
        reasons.push(format!(
            "Matches {} key technical skill{}",
            overlap,
            if overlap == 1 { "" } else { "s" }
        ));
    }

    ratio.powf(SKILL_EXPONENT) * SKILL_WEIGHT
}

/// Level dimension: explicit outcome table over the (job, résumé) pair.
///
/// Named outcomes first; every remaining pair lands in the +15 default.
/// Mid/mid is deliberately in the default bucket: neither text showed a
/// level signal, which is not the same as a confirmed fit. Adding an
/// outcome is a one-line arm.
fn score_level(jd_level: Level, resume_level: Level, reasons: &mut Vec<String>) -> f64 {
    match (jd_level, resume_level) {
        (Level::Junior, Level::Junior) | (Level::Senior, Level::Senior) => {
            reasons.push(format!("Level is an exact fit ({})", jd_level));
            LEVEL_WEIGHT
        }
        // Applying below one's level still fits reasonably well.
        (Level::Junior, Level::Mid) => 20.0,
        // The only outcome that can pull the total below zero.
        (Level::Senior, Level::Junior) => {
            reasons.push("Warning: experience level may fall short of this role".to_string());
            -10.0
        }
        _ => 15.0,
    }
}

/// Title dimension: +10 per title keyword (longer than 2 chars) found in
/// the résumé by substring containment, clamped to the 20-point budget.
fn score_title(title_keywords: &[String], resume: &str, reasons: &mut Vec<String>) -> f64 {
    let bonus: f64 = title_keywords
        .iter()
        .filter(|kw| kw.len() > 2 && resume.contains(kw.as_str()))
        .map(|_| TITLE_KEYWORD_BONUS)
        .sum();

    if bonus > 0.0 {
        reasons.push("Strong match on the role's core domain".to_string());
    }

    bonus.min(TITLE_WEIGHT)
}
