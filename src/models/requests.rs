use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::ProfileDraft;
use crate::models::domain::{Interest, Language, Mood, Theme};

/// Request to open a new viewer session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Mirrors the client's `prefers-color-scheme: dark` media query
    #[serde(default, alias = "prefers_dark", rename = "prefersDark")]
    pub prefers_dark: bool,
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetThemeRequest {
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLanguageRequest {
    pub language: Language,
}

/// Onboarding form submission
///
/// Completeness is checked by `ProfileDraft::submit` so the viewer gets the
/// localized "fill out all fields" message; only hard limits live here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitProfileRequest {
    #[validate(length(max = 64))]
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[validate(length(max = 8))]
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl From<SubmitProfileRequest> for ProfileDraft {
    fn from(req: SubmitProfileRequest) -> Self {
        ProfileDraft {
            name: req.name,
            mood: req.mood,
            interests: req.interests,
        }
    }
}

/// Chat message from the viewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(max = 2000))]
    pub text: String,
}
