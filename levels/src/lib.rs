#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative level data for the crossword engine.
//!
//! Levels are authored as a JSON document of the form
//! `{"levels": [ ... ]}`. Stores hand out owned copies so callers can never
//! mutate the authored data, and the file-backed store re-reads its file on
//! every request.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crossword_core::{Level, LevelId, LevelSummary};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Read access to authored levels.
pub trait LevelStore {
    /// Lists every level in authored order.
    fn list_levels(&self) -> Result<Vec<LevelSummary>, StoreError>;

    /// Loads the first level carrying `id`.
    fn level(&self, id: LevelId) -> Result<Level, StoreError>;
}

/// Failures raised while reading authored levels.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No level carries the requested identifier.
    #[error("level {0} not found")]
    NotFound(LevelId),
    /// The level file could not be read.
    #[error("could not read level file {}", .path.display())]
    Io {
        /// Location of the level file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The level file is not a valid level document.
    #[error("could not parse level file {}", .path.display())]
    Parse {
        /// Location of the level file.
        path: PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Reports whether the error is a missing level rather than a broken store.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[derive(Deserialize)]
struct LevelDocument {
    levels: Vec<Level>,
}

/// Parses a level document.
///
/// # Errors
///
/// Returns the decoding error when `json` is not a `{"levels": [...]}` document.
pub fn parse_levels(json: &str) -> Result<Vec<Level>, serde_json::Error> {
    serde_json::from_str::<LevelDocument>(json).map(|document| document.levels)
}

/// Level store backed by a JSON file that is re-read on every call.
#[derive(Clone, Debug)]
pub struct JsonLevelStore {
    path: PathBuf,
}

impl JsonLevelStore {
    /// Creates a store reading from the provided file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the level file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Level>, StoreError> {
        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let levels = parse_levels(&json).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), levels = levels.len(), "loaded level file");
        Ok(levels)
    }
}

impl LevelStore for JsonLevelStore {
    fn list_levels(&self) -> Result<Vec<LevelSummary>, StoreError> {
        Ok(self.load()?.iter().map(LevelSummary::from).collect())
    }

    fn level(&self, id: LevelId) -> Result<Level, StoreError> {
        self.load()?
            .into_iter()
            .find(|level| level.level_id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// Level store holding its levels in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLevelStore {
    levels: Vec<Level>,
}

impl InMemoryLevelStore {
    /// Creates a store over the provided levels.
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }
}

impl LevelStore for InMemoryLevelStore {
    fn list_levels(&self) -> Result<Vec<LevelSummary>, StoreError> {
        Ok(self.levels.iter().map(LevelSummary::from).collect())
    }

    fn level(&self, id: LevelId) -> Result<Level, StoreError> {
        self.levels
            .iter()
            .find(|level| level.level_id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}
