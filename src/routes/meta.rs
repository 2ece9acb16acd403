use actix_web::{web, HttpResponse, Responder};
use crate::core::texts;
use crate::models::{HealthResponse, Language};
use super::{ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/texts/{language}", web::get().to(get_texts));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sessions: state.sessions.count(),
        timestamp: chrono::Utc::now(),
    })
}

/// String table for one language
///
/// GET /api/v1/texts/{language}
async fn get_texts(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let code = path.into_inner();
    let language = Language::from_code(&code)
        .ok_or_else(|| ApiError::NotFound(format!("Unsupported language: {}", code)))?;

    Ok(HttpResponse::Ok().json(texts(language)))
}
