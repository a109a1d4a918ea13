// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CompatibilityReport, Element, ParseZodiacError, ZodiacMatch, ZodiacSign};
pub use requests::{ReportRequest, ScoreRequest, ZodiacRequest};
pub use responses::{ErrorResponse, HealthResponse, ScoreResponse, SignInfo, SignsResponse};
