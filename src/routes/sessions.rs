use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::{nearby, texts, LocationReport, OnboardingError, ProfileDraft, SessionState};
use crate::models::{CreateSessionRequest, NearbyResponse, SessionResponse, SetLanguageRequest, SetThemeRequest, SubmitProfileRequest};
use super::{ApiError, AppState};

/// Configure all session-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/theme", web::put().to(set_theme))
        .route("/sessions/{id}/theme/toggle", web::post().to(toggle_theme))
        .route("/sessions/{id}/language", web::put().to(set_language))
        .route("/sessions/{id}/profile", web::post().to(submit_profile))
        .route("/sessions/{id}/profile", web::delete().to(clear_profile))
        .route("/sessions/{id}/location/request", web::post().to(request_location))
        .route("/sessions/{id}/location", web::post().to(report_location))
        .route("/sessions/{id}/nearby", web::get().to(get_nearby));
}

/// Create a session
///
/// POST /api/v1/sessions
///
/// Request body (optional; an empty body takes the defaults):
/// ```json
/// { "prefersDark": true, "language": "TH" }
/// ```
async fn create_session(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let req: CreateSessionRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!("Rejected session payload: {}", e);
            ApiError::BadRequest(format!("Invalid session payload: {}", e))
        })?
    };
    let language = req.language.unwrap_or(state.default_language);

    let session = state
        .sessions
        .create(SessionState::new(req.prefers_dark, language))
        .await;

    Ok(HttpResponse::Created().json(SessionResponse::new(session.id(), session.state().await)))
}

async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let session = state.sessions.get(id).await?;
    Ok(HttpResponse::Ok().json(SessionResponse::new(id, session.state().await)))
}

async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    state.sessions.remove(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Apply a state transition to a session and return the new snapshot
async fn transition<F>(state: &AppState, id: Uuid, f: F) -> Result<HttpResponse, ApiError>
where
    F: FnOnce(SessionState) -> SessionState,
{
    let session = state.sessions.get(id).await?;
    let next = session.update(f).await;
    Ok(HttpResponse::Ok().json(SessionResponse::new(id, next)))
}

async fn set_theme(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SetThemeRequest>,
) -> Result<HttpResponse, ApiError> {
    let theme = req.theme;
    transition(&state, path.into_inner(), |s| s.with_theme(theme)).await
}

async fn toggle_theme(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    transition(&state, path.into_inner(), SessionState::toggle_theme).await
}

async fn set_language(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SetLanguageRequest>,
) -> Result<HttpResponse, ApiError> {
    let language = req.language;
    transition(&state, path.into_inner(), |s| s.with_language(language)).await
}

/// Submit the onboarding form
///
/// POST /api/v1/sessions/{id}/profile
///
/// Request body:
/// ```json
/// { "name": "Mali", "mood": "Happy", "interests": ["Coffee", "Music"] }
/// ```
async fn submit_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<SubmitProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let id = path.into_inner();
    let session = state.sessions.get(id).await?;
    let language = session.state().await.language;

    let draft: ProfileDraft = req.into_inner().into();
    let profile = draft.submit().map_err(|e| match e {
        OnboardingError::IncompleteForm => {
            ApiError::Unprocessable(texts(language).fill_all_fields.to_string())
        }
        other => ApiError::Unprocessable(other.to_string()),
    })?;

    tracing::info!("Session {} onboarded as {}", id, profile.name);

    let next = session.update(|s| s.with_profile(Some(profile))).await;
    Ok(HttpResponse::Ok().json(SessionResponse::new(id, next)))
}

/// Sign out, returning the viewer to onboarding
async fn clear_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let session = state.sessions.get(id).await?;
    session.chats.close_all();
    let next = session.update(|s| s.with_profile(None)).await;
    Ok(HttpResponse::Ok().json(SessionResponse::new(id, next)))
}

/// Mark a location request as in flight
async fn request_location(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    transition(&state, path.into_inner(), SessionState::begin_location_request).await
}

/// Record the outcome of the client's location request
///
/// POST /api/v1/sessions/{id}/location
///
/// Request body, one of:
/// ```json
/// { "latitude": 13.7563, "longitude": 100.5018 }
/// { "error": "permission_denied" }
/// { "errorCode": 1 }
/// ```
async fn report_location(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<LocationReport>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let outcome = req.into_inner().resolve();

    match &outcome {
        Ok(coordinate) => tracing::debug!("Session {} located at {:?}", id, coordinate),
        Err(e) => tracing::info!("Session {} location failed: {}", id, e),
    }

    transition(&state, id, |s| {
        let s = s.begin_location_request();
        match outcome {
            Ok(coordinate) => s.with_location(coordinate),
            Err(error) => s.with_location_error(error),
        }
    })
    .await
}

/// Nearby people, nearest first
///
/// GET /api/v1/sessions/{id}/nearby
async fn get_nearby(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let session_state = state.sessions.get(id).await?.state().await;

    let people = nearby(&state.ranker, &session_state, state.roster.candidates())?;

    tracing::debug!("Returning {} nearby people for session {}", people.len(), id);

    Ok(HttpResponse::Ok().json(NearbyResponse {
        total_results: people.len(),
        location_message: session_state
            .location_error()
            .map(|e| e.message(session_state.language)),
        people,
    }))
}
