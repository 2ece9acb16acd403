use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a coordinate falls outside the valid degree ranges
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A point on the globe in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range or non-finite values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self { latitude, longitude };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check the degree ranges. NaN fails both range checks.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Lonely,
    Exploring,
    Creative,
    Chill,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Lonely,
        Mood::Exploring,
        Mood::Creative,
        Mood::Chill,
    ];

    /// Display label shown on profile cards
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊 Happy",
            Mood::Lonely => "😔 Lonely",
            Mood::Exploring => "🗺️ Exploring",
            Mood::Creative => "🎨 Creative",
            Mood::Chill => "☕ Chill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Coffee,
    Music,
    Art,
    Reading,
    Gaming,
    Coding,
    Sports,
    Movies,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::Coffee,
        Interest::Music,
        Interest::Art,
        Interest::Reading,
        Interest::Gaming,
        Interest::Coding,
        Interest::Sports,
        Interest::Movies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Coffee => "Coffee",
            Interest::Music => "Music",
            Interest::Art => "Art",
            Interest::Reading => "Reading",
            Interest::Gaming => "Gaming",
            Interest::Coding => "Coding",
            Interest::Sports => "Sports",
            Interest::Movies => "Movies",
        }
    }
}

/// Supported interface languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    EN,
    TH,
    JP,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::EN, Language::TH, Language::JP];

    /// Parse a locale code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EN" => Some(Language::EN),
            "TH" => Some(Language::TH),
            "JP" => Some(Language::JP),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Profile of the local viewer, produced by onboarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    pub mood: Mood,
    pub interests: Vec<Interest>,
}

/// A displayable user record from the seed roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    #[serde(rename = "photoUrl")]
    pub photo_url: String,
    pub mood: Mood,
    pub interests: Vec<Interest>,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// Candidate augmented with its distance from the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    #[serde(rename = "sentAt")]
    pub sent_at: chrono::DateTime<chrono::Utc>,
}
