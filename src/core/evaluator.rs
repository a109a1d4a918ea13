use crate::core::scoring::compute_base_score;
use crate::core::zodiac::evaluate_zodiac;
use crate::models::{CompatibilityReport, ZodiacMatch};

/// Highest reachable final score
pub const MAX_SCORE: u8 = 100;

/// Clamp the combined base score and bonus to the 0-100 scale
#[inline]
pub fn finalize_score(base_score: u8, bonus: u8) -> u8 {
    let combined = base_score as u16 + bonus as u16;
    combined.min(MAX_SCORE as u16) as u8
}

/// Headline fake-vs-real verdict for a final score
pub fn verdict_message(final_score: u8) -> &'static str {
    if final_score >= 80 {
        "Looks like REAL love!"
    } else if final_score >= 50 {
        "Could be real - give it time."
    } else if final_score >= 30 {
        "Cute crush vibes. See where it goes."
    } else {
        "Mostly for fun (fake meter high)!"
    }
}

/// Advice line for the detailed report.
///
/// Uses its own threshold table, narrower than the verdict tiers; the two
/// tables are intentionally kept separate.
pub fn advice_message(final_score: u8) -> &'static str {
    if final_score >= 90 {
        "Strong soulmate vibes! Keep nurturing this beautiful bond."
    } else if final_score >= 75 {
        "Great connection! Communication and trust will make it even stronger."
    } else if final_score >= 50 {
        "Nice chemistry! Take time to understand each other and grow together."
    } else if final_score >= 30 {
        "Cute crush energy. Go slow, be yourself, and see where it goes."
    } else {
        "Remember: this is just for fun! Focus on self-love and the right person will match your energy."
    }
}

/// Compatibility evaluator
///
/// Composes the name score, zodiac bonus, clamp, and message tables into a
/// full report. Stateless, so a single instance can be shared across
/// handlers with no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Name-derived base score on its own
    pub fn base_score(&self, name1: &str, name2: &str) -> u8 {
        compute_base_score(name1, name2)
    }

    /// Zodiac bonus and message on their own
    pub fn zodiac(&self, sign1: Option<&str>, sign2: Option<&str>) -> ZodiacMatch {
        evaluate_zodiac(sign1, sign2)
    }

    /// Build the full compatibility report for a pair of names and optional
    /// sign selections
    pub fn build_report(
        &self,
        name1: &str,
        name2: &str,
        sign1: Option<&str>,
        sign2: Option<&str>,
    ) -> CompatibilityReport {
        let base_score = compute_base_score(name1, name2);
        let zodiac = evaluate_zodiac(sign1, sign2);
        let final_score = finalize_score(base_score, zodiac.bonus);

        CompatibilityReport {
            base_score,
            zodiac_bonus: zodiac.bonus,
            final_score,
            verdict_message: verdict_message(final_score).to_string(),
            zodiac_message: zodiac.message,
            advice_message: advice_message(final_score).to_string(),
        }
    }
}
