use crate::models::{Candidate, CoordinateError};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Built-in seed data
const SEED_ROSTER: &str = include_str!("../../data/roster.json");

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid roster JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Candidate {id} has an invalid coordinate: {source}")]
    InvalidCoordinate { id: u32, source: CoordinateError },

    #[error("Duplicate candidate id: {0}")]
    DuplicateId(u32),

    #[error("Candidate {0} has no interests")]
    NoInterests(u32),
}

/// Fixed set of candidates shown to every viewer
#[derive(Debug, Clone)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Load the compiled-in seed roster
    pub fn seed() -> Result<Self, RosterError> {
        Self::from_json(SEED_ROSTER)
    }

    /// Load a roster from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let candidates: Vec<Candidate> = serde_json::from_str(json)?;
        Self::new(candidates)
    }

    /// Validate coordinates, interests and id uniqueness
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            candidate
                .coordinate
                .validate()
                .map_err(|source| RosterError::InvalidCoordinate {
                    id: candidate.id,
                    source,
                })?;
            if candidate.interests.is_empty() {
                return Err(RosterError::NoInterests(candidate.id));
            }
            if !seen.insert(candidate.id) {
                return Err(RosterError::DuplicateId(candidate.id));
            }
        }

        tracing::debug!("Roster loaded with {} candidates", candidates.len());
        Ok(Self { candidates })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: u32) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
