// Core algorithm exports
pub mod discovery;
pub mod distance;
pub mod i18n;
pub mod location;
pub mod onboarding;
pub mod ranker;
pub mod state;

pub use discovery::{nearby, shared_interests, NearbyCard};
pub use distance::{format_distance, haversine_distance, EARTH_RADIUS_KM};
pub use i18n::{texts, Texts};
pub use location::{LocationError, LocationReport};
pub use onboarding::{OnboardingError, ProfileDraft, MAX_INTERESTS};
pub use ranker::{ProximityRanker, RankError};
pub use state::{LocationStatus, Screen, SessionState};
