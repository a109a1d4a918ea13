use crate::core::Evaluator;
use crate::models::{
    ErrorResponse, HealthResponse, ReportRequest, ScoreRequest, ScoreResponse, SignInfo,
    SignsResponse, ZodiacRequest, ZodiacSign,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/signs", web::get().to(list_signs))
        .route("/compatibility/score", web::post().to(score_names))
        .route("/compatibility/zodiac", web::post().to(evaluate_zodiac))
        .route("/compatibility/report", web::post().to(build_report));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Sign catalog endpoint
///
/// GET /api/v1/compatibility/signs
///
/// Lists the twelve signs with their elements, in calendar order; clients
/// use this to populate their sign pickers.
async fn list_signs() -> impl Responder {
    let signs: Vec<SignInfo> = ZodiacSign::ALL
        .iter()
        .map(|sign| SignInfo {
            sign: *sign,
            element: sign.element(),
        })
        .collect();

    HttpResponse::Ok().json(SignsResponse { signs })
}

/// Name score endpoint
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "name1": "string",
///   "name2": "string"
/// }
/// ```
async fn score_names(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let base_score = state.evaluator.base_score(&req.name1, &req.name2);

    tracing::debug!("Scored name pair: base_score={}", base_score);

    HttpResponse::Ok().json(ScoreResponse { base_score })
}

/// Zodiac pairing endpoint
///
/// POST /api/v1/compatibility/zodiac
///
/// Request body:
/// ```json
/// {
///   "sign1": "Leo",
///   "sign2": "Libra"
/// }
/// ```
///
/// Both fields are optional; missing or unknown signs yield a zero bonus
/// rather than an error.
async fn evaluate_zodiac(
    state: web::Data<AppState>,
    req: web::Json<ZodiacRequest>,
) -> impl Responder {
    let result = state
        .evaluator
        .zodiac(req.sign1.as_deref(), req.sign2.as_deref());

    tracing::debug!("Evaluated zodiac pairing: bonus={}", result.bonus);

    HttpResponse::Ok().json(result)
}

/// Compatibility report endpoint
///
/// POST /api/v1/compatibility/report
///
/// Request body:
/// ```json
/// {
///   "name1": "string",
///   "name2": "string",
///   "sign1": "Leo",
///   "sign2": "Libra"
/// }
/// ```
async fn build_report(
    state: web::Data<AppState>,
    req: web::Json<ReportRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for report request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let report = state.evaluator.build_report(
        &req.name1,
        &req.name2,
        req.sign1.as_deref(),
        req.sign2.as_deref(),
    );

    tracing::info!(
        "Built report: base={}, bonus={}, final={}",
        report.base_score,
        report.zodiac_bonus,
        report.final_score
    );

    HttpResponse::Ok().json(report)
}
