// Core algorithm exports
pub mod evaluator;
pub mod scoring;
pub mod zodiac;

pub use evaluator::{advice_message, finalize_score, verdict_message, Evaluator, MAX_SCORE};
pub use scoring::compute_base_score;
pub use zodiac::{evaluate_zodiac, sign_match};
