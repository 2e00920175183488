#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level operations combining the level store with the board and verification systems.
//!
//! [`Puzzles`] owns nothing but a [`LevelStore`]. Every operation reloads the
//! level and rebuilds its board, so no derived state outlives a call and
//! concurrent callers cannot observe one another.

use crossword_core::{BoardError, BoardView, LevelId, LevelSummary, Submission, VerificationResult};
use crossword_levels::{LevelStore, StoreError};
use crossword_system_answer_verifier::verify;
use crossword_system_board_builder::build_board;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failures surfaced by level operations.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// No level carries the requested identifier.
    #[error("level {0} not found")]
    NotFound(LevelId),
    /// The level store could not be read.
    #[error(transparent)]
    Store(StoreError),
    /// The level's authored words do not form a valid board.
    #[error("level {level} is misconfigured")]
    InvalidLevel {
        /// Identifier of the broken level.
        level: LevelId,
        /// Authoring error found while building the board.
        #[source]
        source: BoardError,
    },
}

impl PuzzleError {
    /// Reports whether the requested level does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<StoreError> for PuzzleError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Entry point for listing, drawing and checking levels.
#[derive(Debug)]
pub struct Puzzles<S> {
    store: S,
}

impl<S: LevelStore> Puzzles<S> {
    /// Creates the operations layer over the provided store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Provides read-only access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Lists every level as `{levelId, theme, difficulty}`.
    pub fn list_levels(&self) -> Result<Vec<LevelSummary>, PuzzleError> {
        Ok(self.store.list_levels()?)
    }

    /// Builds the presentation view of a level; answers are withheld.
    pub fn board(&self, id: LevelId) -> Result<BoardView, PuzzleError> {
        let level = self.store.level(id)?;
        let board = build_board(&level).map_err(|source| invalid_level(id, source))?;
        debug!(
            level = %id,
            cells = board.cells().len(),
            width = board.width(),
            height = board.height(),
            "built board"
        );
        Ok(BoardView::new(&level, &board))
    }

    /// Checks a player's submission against a freshly built board.
    pub fn verify(
        &self,
        id: LevelId,
        submission: &Submission,
    ) -> Result<VerificationResult, PuzzleError> {
        let level = self.store.level(id)?;
        if !submission.ignored_keys().is_empty() {
            debug!(
                level = %id,
                ignored = submission.ignored_keys().len(),
                "submission contains keys that are not cells"
            );
        }
        let result = verify(&level, submission).map_err(|source| invalid_level(id, source))?;
        info!(
            level = %id,
            correct = result.is_correct(),
            missing = result.missing().len(),
            "verified submission"
        );
        Ok(result)
    }
}

fn invalid_level(level: LevelId, source: BoardError) -> PuzzleError {
    warn!(level = %level, error = %source, "level failed to build");
    PuzzleError::InvalidLevel { level, source }
}
