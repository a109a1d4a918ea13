use crate::models::domain::{Element, ZodiacSign};
use serde::{Deserialize, Serialize};

/// Response for the name score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(rename = "baseScore")]
    pub base_score: u8,
}

/// One entry in the sign catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInfo {
    pub sign: ZodiacSign,
    pub element: Element,
}

/// Response for the sign catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignsResponse {
    pub signs: Vec<SignInfo>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
