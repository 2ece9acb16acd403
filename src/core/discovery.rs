use crate::core::distance::format_distance;
use crate::core::i18n::texts;
use crate::core::ranker::{ProximityRanker, RankError};
use crate::core::state::SessionState;
use crate::models::{Candidate, Interest, RankedCandidate};
use serde::Serialize;

/// One entry of the nearby-people list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyCard {
    #[serde(flatten)]
    pub ranked: RankedCandidate,
    #[serde(rename = "distanceLabel")]
    pub distance_label: String,
    #[serde(rename = "moodLabel")]
    pub mood_label: &'static str,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<Interest>,
}

/// Candidate interests the viewer also picked, in the candidate's order
pub fn shared_interests(candidate: &[Interest], viewer: &[Interest]) -> Vec<Interest> {
    candidate
        .iter()
        .filter(|interest| viewer.contains(interest))
        .copied()
        .collect()
}

/// Build the nearby-people list for a session
///
/// Empty until the viewer has both a profile and a known coordinate.
/// Roster entries sharing the viewer's name are left out.
pub fn nearby(
    ranker: &ProximityRanker,
    state: &SessionState,
    roster: &[Candidate],
) -> Result<Vec<NearbyCard>, RankError> {
    let (profile, viewer) = match (&state.profile, state.coordinate()) {
        (Some(profile), Some(viewer)) => (profile, viewer),
        _ => return Ok(Vec::new()),
    };

    let others: Vec<Candidate> = roster
        .iter()
        .filter(|candidate| candidate.name != profile.name)
        .cloned()
        .collect();

    let unit = texts(state.language).km_away;

    let cards = ranker
        .rank(viewer, &others)?
        .into_iter()
        .map(|ranked| NearbyCard {
            distance_label: format_distance(ranked.distance_km, unit),
            mood_label: ranked.candidate.mood.label(),
            shared_interests: shared_interests(&ranked.candidate.interests, &profile.interests),
            ranked,
        })
        .collect();

    Ok(cards)
}
