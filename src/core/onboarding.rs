use crate::models::{Interest, Mood, UserProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of interests a viewer may pick
pub const MAX_INTERESTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("Please fill out all fields.")]
    IncompleteForm,

    #[error("At most {max} interests may be selected, got {0}", max = MAX_INTERESTS)]
    TooManyInterests(usize),
}

/// In-progress onboarding form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deselect a picked interest, or select it while under the cap
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else if self.interests.len() < MAX_INTERESTS {
            self.interests.push(interest);
        }
    }

    /// Validate the form and build the viewer's profile
    pub fn submit(&self) -> Result<UserProfile, OnboardingError> {
        let mood = match self.mood {
            Some(mood) if !self.name.is_empty() && !self.interests.is_empty() => mood,
            _ => return Err(OnboardingError::IncompleteForm),
        };

        if self.interests.len() > MAX_INTERESTS {
            return Err(OnboardingError::TooManyInterests(self.interests.len()));
        }

        let mut interests: Vec<Interest> = Vec::with_capacity(self.interests.len());
        for interest in &self.interests {
            if !interests.contains(interest) {
                interests.push(*interest);
            }
        }

        Ok(UserProfile {
            name: self.name.clone(),
            photo_url: photo_url(&self.name),
            mood,
            interests,
        })
    }
}

/// Placeholder avatar seeded by name
pub fn photo_url(name: &str) -> String {
    format!("https://picsum.photos/seed/{}/200", urlencoding::encode(name))
}
