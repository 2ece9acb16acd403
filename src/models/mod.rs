// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, ChatMessage, Coordinate, CoordinateError, Interest, Language, Mood, RankedCandidate, Sender, Theme, UserProfile};
pub use requests::{CreateSessionRequest, SendMessageRequest, SetLanguageRequest, SetThemeRequest, SubmitProfileRequest};
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, NearbyResponse, SessionResponse};
