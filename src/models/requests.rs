use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a pair of names
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(length(min = 1))]
    pub name1: String,
    #[validate(length(min = 1))]
    pub name2: String,
}

/// Request to evaluate a zodiac pairing on its own
///
/// Both selections are optional free text; missing or unrecognized signs are
/// valid inputs and simply earn no bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZodiacRequest {
    #[serde(default)]
    pub sign1: Option<String>,
    #[serde(default)]
    pub sign2: Option<String>,
}

/// Request for a full compatibility report
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReportRequest {
    #[validate(length(min = 1))]
    pub name1: String,
    #[validate(length(min = 1))]
    pub name2: String,
    #[serde(default)]
    pub sign1: Option<String>,
    #[serde(default)]
    pub sign2: Option<String>,
}
