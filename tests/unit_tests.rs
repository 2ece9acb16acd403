// Unit tests for Nearby Vibes

use nearby_vibes::core::{
    distance::haversine_distance,
    discovery::nearby,
    i18n::texts,
    location::LocationError,
    onboarding::{ProfileDraft, MAX_INTERESTS},
    ranker::ProximityRanker,
    state::SessionState,
};
use nearby_vibes::models::{Candidate, Coordinate, Interest, Language, Mood};
use nearby_vibes::services::Roster;

fn create_candidate(id: u32, lat: f64, lon: f64) -> Candidate {
    Candidate {
        id,
        name: format!("User {}", id),
        photo_url: format!("https://picsum.photos/seed/{}/200", id),
        mood: Mood::ALL[id as usize % Mood::ALL.len()],
        interests: vec![Interest::ALL[id as usize % Interest::ALL.len()]],
        coordinate: Coordinate {
            latitude: lat,
            longitude: lon,
        },
    }
}

/// Deterministic spread of coordinates covering the full valid range
fn spread(count: u32) -> Vec<Candidate> {
    (0..count)
        .map(|i| {
            let lat = ((i as f64 * 37.3) % 180.0) - 90.0;
            let lon = ((i as f64 * 71.9) % 360.0) - 180.0;
            create_candidate(i, lat, lon)
        })
        .collect()
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(13.7563, 100.5018, 13.7563, 100.5018);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_symmetry_over_spread() {
    let points = spread(40);
    for a in &points {
        for b in &points {
            let ab = a.coordinate.distance_to(&b.coordinate);
            let ba = b.coordinate.distance_to(&a.coordinate);
            assert!((ab - ba).abs() < 1e-6, "asymmetric: {} vs {}", ab, ba);
        }
        assert_eq!(a.coordinate.distance_to(&a.coordinate), 0.0);
    }
}

#[test]
fn test_bangkok_scenario() {
    let distance = haversine_distance(13.7563, 100.5018, 13.7650, 100.5383);
    assert!((distance - 4.4).abs() < 0.5, "expected ~4.4km, got {}", distance);
}

#[test]
fn test_rank_is_sorted_permutation() {
    let ranker = ProximityRanker::new();
    let candidates = spread(100);

    for viewer in [
        Coordinate::new(13.7563, 100.5018).unwrap(),
        Coordinate::new(-90.0, 0.0).unwrap(),
        Coordinate::new(51.5074, -0.1278).unwrap(),
    ] {
        let ranked = ranker.rank(viewer, &candidates).unwrap();
        assert_eq!(ranked.len(), candidates.len());

        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }

        let mut ids: Vec<u32> = ranked.iter().map(|r| r.candidate.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..100).collect::<Vec<u32>>());
    }
}

#[test]
fn test_identical_coordinates_rank_first_in_input_order() {
    let viewer = Coordinate::new(13.7563, 100.5018).unwrap();
    let candidates = vec![
        create_candidate(10, 13.7650, 100.5383),
        create_candidate(11, viewer.latitude, viewer.longitude),
        create_candidate(12, viewer.latitude, viewer.longitude),
    ];

    let ranked = ProximityRanker::new().rank(viewer, &candidates).unwrap();

    assert_eq!(ranked[0].candidate.id, 11);
    assert_eq!(ranked[0].distance_km, 0.0);
    assert_eq!(ranked[1].candidate.id, 12);
    assert_eq!(ranked[2].candidate.id, 10);
}

#[test]
fn test_permission_denied_leaves_list_empty() {
    let roster = Roster::seed().unwrap();
    let state = SessionState::default()
        .with_profile(Some(
            ProfileDraft {
                name: "Viewer".to_string(),
                mood: Some(Mood::Happy),
                interests: vec![Interest::Coffee],
            }
            .submit()
            .unwrap(),
        ))
        .begin_location_request()
        .with_location_error(LocationError::PermissionDenied);

    let cards = nearby(&ProximityRanker::new(), &state, roster.candidates()).unwrap();

    assert!(cards.is_empty());
    assert_eq!(
        state.location_message(),
        Some(texts(Language::EN).location_permission_denied)
    );
}

#[test]
fn test_interest_toggle_never_exceeds_cap() {
    let mut draft = ProfileDraft::new();
    for interest in Interest::ALL.iter().chain(Interest::ALL.iter()) {
        draft.toggle_interest(*interest);
        assert!(draft.interests.len() <= MAX_INTERESTS);
    }
}

#[test]
fn test_seed_roster_ranks_from_bangkok() {
    let roster = Roster::seed().unwrap();
    let viewer = Coordinate::new(13.7563, 100.5018).unwrap();

    let ranked = ProximityRanker::new().rank(viewer, roster.candidates()).unwrap();

    assert_eq!(ranked.len(), roster.len());
    // Yuki sits exactly on the viewer's coordinate
    assert_eq!(ranked[0].candidate.name, "Yuki");
    assert_eq!(ranked[0].distance_km, 0.0);
}
