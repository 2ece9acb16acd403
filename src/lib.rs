//! Nearby Vibes - proximity discovery service
//!
//! Ranks a fixed roster of people by great-circle distance from the viewer,
//! keeps each viewer's interface state in an explicit session store, and
//! simulates chats with canned, cancellable replies.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ProximityRanker, RankError, SessionState, distance::haversine_distance};
pub use models::{Candidate, Coordinate, RankedCandidate, UserProfile};
