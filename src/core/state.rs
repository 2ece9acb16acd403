use crate::core::i18n::texts;
use crate::core::location::LocationError;
use crate::models::{Coordinate, Language, Theme, UserProfile};
use serde::Serialize;

/// Where the viewer's coordinate stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LocationStatus {
    /// Nothing requested yet
    #[default]
    Unknown,
    Pending,
    Available { coordinate: Coordinate },
    Failed { error: LocationError },
}

/// Which top-level view the viewer should see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Onboarding,
    Dashboard,
}

/// Per-viewer application state
///
/// Every setter consumes the state and returns the next one; callers
/// replace their copy wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub theme: Theme,
    pub language: Language,
    pub profile: Option<UserProfile>,
    pub location: LocationStatus,
}

impl SessionState {
    pub fn new(prefers_dark: bool, language: Language) -> Self {
        Self {
            theme: if prefers_dark { Theme::Dark } else { Theme::Light },
            language,
            profile: None,
            location: LocationStatus::Unknown,
        }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn toggle_theme(self) -> Self {
        let theme = self.theme.toggled();
        self.with_theme(theme)
    }

    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn with_profile(self, profile: Option<UserProfile>) -> Self {
        Self { profile, ..self }
    }

    /// Clear any previous failure and wait for a fresh report
    pub fn begin_location_request(self) -> Self {
        let location = match self.location {
            LocationStatus::Available { .. } => self.location,
            _ => LocationStatus::Pending,
        };
        Self { location, ..self }
    }

    pub fn with_location(self, coordinate: Coordinate) -> Self {
        Self {
            location: LocationStatus::Available { coordinate },
            ..self
        }
    }

    /// Record a failure; a previously known coordinate is dropped
    pub fn with_location_error(self, error: LocationError) -> Self {
        Self {
            location: LocationStatus::Failed { error },
            ..self
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.location {
            LocationStatus::Available { coordinate } => Some(coordinate),
            _ => None,
        }
    }

    pub fn location_error(&self) -> Option<LocationError> {
        match self.location {
            LocationStatus::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Localized status line for the location area of the dashboard
    pub fn location_message(&self) -> Option<&'static str> {
        match self.location {
            LocationStatus::Pending => Some(texts(self.language).getting_location),
            LocationStatus::Failed { error } => Some(error.message(self.language)),
            _ => None,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.profile.is_some() {
            Screen::Dashboard
        } else {
            Screen::Onboarding
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(false, Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interest, Mood};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Mali".to_string(),
            photo_url: "https://picsum.photos/seed/Mali/200".to_string(),
            mood: Mood::Happy,
            interests: vec![Interest::Music],
        }
    }

    #[test]
    fn test_initial_theme_follows_preference() {
        assert_eq!(SessionState::new(true, Language::EN).theme, Theme::Dark);
        assert_eq!(SessionState::new(false, Language::EN).theme, Theme::Light);
    }

    #[test]
    fn test_transitions_leave_previous_state_untouched() {
        let state = SessionState::default();
        let next = state.clone().toggle_theme().with_language(Language::JP);

        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.language, Language::EN);
        assert_eq!(next.theme, Theme::Dark);
        assert_eq!(next.language, Language::JP);
    }

    #[test]
    fn test_screen_follows_profile() {
        let state = SessionState::default();
        assert_eq!(state.screen(), Screen::Onboarding);

        let state = state.with_profile(Some(profile()));
        assert_eq!(state.screen(), Screen::Dashboard);

        let state = state.with_profile(None);
        assert_eq!(state.screen(), Screen::Onboarding);
    }

    #[test]
    fn test_location_lifecycle() {
        let here = Coordinate::new(13.7563, 100.5018).unwrap();

        let state = SessionState::default().begin_location_request();
        assert_eq!(state.location, LocationStatus::Pending);
        assert_eq!(state.location_message(), Some(texts(Language::EN).getting_location));

        let state = state.with_location(here);
        assert_eq!(state.coordinate(), Some(here));
        assert_eq!(state.location_message(), None);

        // a new request keeps the known coordinate
        let state = state.begin_location_request();
        assert_eq!(state.coordinate(), Some(here));

        let state = state.with_location_error(LocationError::Timeout);
        assert_eq!(state.coordinate(), None);
        assert_eq!(state.location_error(), Some(LocationError::Timeout));

        // retrying clears the error
        let state = state.begin_location_request();
        assert_eq!(state.location_error(), None);
        assert_eq!(state.location, LocationStatus::Pending);
    }

    #[test]
    fn test_permission_denied_message_is_localized() {
        let state = SessionState::new(false, Language::TH)
            .with_location_error(LocationError::PermissionDenied);

        assert_eq!(
            state.location_message(),
            Some(texts(Language::TH).location_permission_denied)
        );
    }
}
