use crate::models::{Candidate, CoordinateError, RankedCandidate, Coordinate};
use thiserror::Error;

/// Errors returned when ranking is asked to work on invalid input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    #[error("Invalid viewer coordinate: {0}")]
    InvalidViewer(CoordinateError),

    #[error("Invalid coordinate for candidate {id}: {source}")]
    InvalidCandidate {
        id: u32,
        #[source]
        source: CoordinateError,
    },
}

/// Orders candidates by great-circle distance from the viewer
///
/// Ranking is a pure function of its inputs: the candidate slice is only
/// read, and the same inputs always yield the same order. Ties keep their
/// input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityRanker;

impl ProximityRanker {
    pub fn new() -> Self {
        Self
    }

    /// Rank candidates nearest first
    ///
    /// # Arguments
    /// * `viewer` - The viewer's coordinate
    /// * `candidates` - The roster to rank
    ///
    /// # Returns
    /// One `RankedCandidate` per input, ascending by distance
    pub fn rank(
        &self,
        viewer: Coordinate,
        candidates: &[Candidate],
    ) -> Result<Vec<RankedCandidate>, RankError> {
        viewer.validate().map_err(RankError::InvalidViewer)?;

        let mut ranked = candidates
            .iter()
            .map(|candidate| {
                candidate
                    .coordinate
                    .validate()
                    .map_err(|source| RankError::InvalidCandidate {
                        id: candidate.id,
                        source,
                    })?;

                Ok(RankedCandidate {
                    distance_km: viewer.distance_to(&candidate.coordinate),
                    candidate: candidate.clone(),
                })
            })
            .collect::<Result<Vec<_>, RankError>>()?;

        // sort_by is stable, so equal distances keep roster order
        ranked.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::trace!("Ranked {} candidates", ranked.len());

        Ok(ranked)
    }
}
