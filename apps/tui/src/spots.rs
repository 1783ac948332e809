//! Static spot repository loaded once per session.

use crate::domain::{Spot, SpotId};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED_SPOTS: &str = include_str!("../data/spots.json");

#[derive(Debug, Error)]
pub enum SpotDataError {
    #[error("failed to read spot data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed spot data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spot at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate spot id: {0}")]
    DuplicateId(SpotId),
}

/// Immutable, ordered collection of spots.
#[derive(Debug, Clone, Default)]
pub struct SpotRepository {
    spots: Vec<Spot>,
}

impl SpotRepository {
    pub fn new(spots: Vec<Spot>) -> Result<Self, SpotDataError> {
        let mut seen = HashSet::with_capacity(spots.len());
        for (position, spot) in spots.iter().enumerate() {
            if spot.id.as_str().trim().is_empty() {
                return Err(SpotDataError::EmptyId(position));
            }
            if !seen.insert(&spot.id) {
                return Err(SpotDataError::DuplicateId(spot.id.clone()));
            }
        }

        Ok(Self { spots })
    }

    pub fn from_json(json: &str) -> Result<Self, SpotDataError> {
        let spots: Vec<Spot> = serde_json::from_str(json)?;
        Self::new(spots)
    }

    pub fn bundled() -> Result<Self, SpotDataError> {
        Self::from_json(BUNDLED_SPOTS)
    }

    pub fn load(path: &Path) -> Result<Self, SpotDataError> {
        let json = std::fs::read_to_string(path).map_err(|source| SpotDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads `path` when given, otherwise the spots compiled into the binary.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, SpotDataError> {
        path.map_or_else(Self::bundled, Self::load)
    }

    pub fn all(&self) -> &[Spot] {
        &self.spots
    }

    pub fn get(&self, id: &SpotId) -> Option<&Spot> {
        self.spots.iter().find(|spot| &spot.id == id)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}
