// Route exports
pub mod chats;
pub mod meta;
pub mod sessions;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use crate::config::Settings;
use crate::core::{ProximityRanker, RankError};
use crate::models::{ErrorResponse, Language};
use crate::services::{ChatError, Roster, SessionError, SessionStore};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub roster: Arc<Roster>,
    pub ranker: ProximityRanker,
    pub reply_delay: Duration,
    pub default_language: Language,
}

impl AppState {
    pub fn new(settings: &Settings, roster: Roster) -> Self {
        Self {
            sessions: SessionStore::new(
                settings.sessions.max_sessions,
                Duration::from_secs(settings.sessions.idle_ttl_secs),
            ),
            roster: Arc::new(roster),
            ranker: ProximityRanker::new(),
            reply_delay: settings.chat.reply_delay(),
            default_language: settings.defaults.language,
        }
    }
}

/// Errors surfaced to HTTP clients as `ErrorResponse` JSON
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    /// Carries an already localized message
    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Conflict(_) => "conflict",
            ApiError::Unprocessable(_) => "validation_failed",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl From<RankError> for ApiError {
    fn from(err: RankError) -> Self {
        tracing::error!("Ranking failed: {}", err);
        ApiError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        tracing::info!("Request validation failed: {:?}", errors);
        ApiError::BadRequest(errors.to_string())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid JSON: {}", err)).into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::debug!("Path error on {}: {}", req.path(), err);
    ApiError::NotFound(format!("Invalid path: {}", err)).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(meta::configure)
            .configure(sessions::configure)
            .configure(chats::configure),
    );
}
