use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::texts;
use crate::models::{ChatResponse, SendMessageRequest};
use crate::services::ChatSession;
use super::{ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions/{id}/chats/{candidate_id}", web::post().to(open_chat))
        .route("/sessions/{id}/chats/{candidate_id}", web::get().to(get_chat))
        .route("/sessions/{id}/chats/{candidate_id}", web::delete().to(close_chat))
        .route("/sessions/{id}/chats/{candidate_id}/messages", web::post().to(send_message));
}

fn transcript(chat: &ChatSession) -> ChatResponse {
    ChatResponse {
        candidate_id: chat.candidate_id(),
        open: chat.is_open(),
        messages: chat.messages(),
    }
}

/// Open a chat window with a candidate
///
/// POST /api/v1/sessions/{id}/chats/{candidateId}
async fn open_chat(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u32)>,
) -> Result<HttpResponse, ApiError> {
    let (id, candidate_id) = path.into_inner();
    let session = state.sessions.get(id).await?;
    let session_state = session.state().await;

    let viewer = session_state.profile.as_ref().ok_or_else(|| {
        ApiError::Conflict("Complete onboarding before starting a chat".to_string())
    })?;

    // The viewer's own roster entry never shows up as a card
    let candidate = state
        .roster
        .get(candidate_id)
        .filter(|c| c.name != viewer.name)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown candidate: {}", candidate_id)))?;

    let chat = session.chats.open_with(candidate_id, || {
        let interest = candidate.interests.first().map_or("", |i| i.label());
        texts(session_state.language).greeting(interest)
    });

    Ok(HttpResponse::Ok().json(transcript(&chat)))
}

async fn get_chat(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u32)>,
) -> Result<HttpResponse, ApiError> {
    let (id, candidate_id) = path.into_inner();
    let chat = state.sessions.get(id).await?.chats.get(candidate_id)?;
    Ok(HttpResponse::Ok().json(transcript(&chat)))
}

/// Send a message; the canned reply lands after the configured delay
///
/// POST /api/v1/sessions/{id}/chats/{candidateId}/messages
///
/// Request body:
/// ```json
/// { "text": "hello!" }
/// ```
async fn send_message(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u32)>,
    req: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let (id, candidate_id) = path.into_inner();
    let session = state.sessions.get(id).await?;
    let chat = session.chats.get(candidate_id)?;
    let reply = texts(session.state().await.language).chat_auto_reply.to_string();

    if !chat.send(&req.text, reply, state.reply_delay)? {
        tracing::trace!("Ignoring blank message in session {}", id);
    }

    Ok(HttpResponse::Ok().json(transcript(&chat)))
}

/// Close a chat window, cancelling any pending reply
async fn close_chat(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, u32)>,
) -> Result<HttpResponse, ApiError> {
    let (id, candidate_id) = path.into_inner();
    state.sessions.get(id).await?.chats.close(candidate_id)?;
    Ok(HttpResponse::NoContent().finish())
}
