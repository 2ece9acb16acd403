use serde::{Deserialize, Serialize};
use crate::core::{NearbyCard, Screen, SessionState};
use crate::models::domain::ChatMessage;

/// Snapshot of a viewer session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: uuid::Uuid,
    pub screen: Screen,
    #[serde(flatten)]
    pub state: SessionState,
    #[serde(rename = "locationMessage")]
    pub location_message: Option<&'static str>,
}

impl SessionResponse {
    pub fn new(session_id: uuid::Uuid, state: SessionState) -> Self {
        Self {
            session_id,
            screen: state.screen(),
            location_message: state.location_message(),
            state,
        }
    }
}

/// Response for the nearby-people endpoint
#[derive(Debug, Clone, Serialize)]
pub struct NearbyResponse {
    pub people: Vec<NearbyCard>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    /// Set when the list is empty because location acquisition failed
    #[serde(rename = "locationMessage")]
    pub location_message: Option<&'static str>,
}

/// Transcript of a simulated chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: u32,
    pub open: bool,
    pub messages: Vec<ChatMessage>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
