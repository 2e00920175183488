#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure answer verification system comparing player submissions with a level's solution.
//!
//! The board is rebuilt from the level on every call; a board supplied by a
//! client is never trusted. Verification happens in two stages. A submission
//! that leaves any board cell absent or blank is reported as incomplete and
//! no letter is compared. Otherwise every cell is compared ignoring case and
//! surrounding whitespace, and the submission is correct only if every cell
//! is.

use std::collections::BTreeMap;

use crossword_core::{
    Board, BoardError, Cell, CellCoord, CellVerdict, Level, Submission, VerificationResult,
};
use crossword_system_board_builder::build_board;

/// Verifies a submission against the solution of `level`.
///
/// Player mistakes, including blank cells, are reported through the
/// returned [`VerificationResult`].
///
/// # Errors
///
/// Fails only when the level itself cannot be built; see
/// [`build_board`] for the authoring errors involved.
pub fn verify(level: &Level, submission: &Submission) -> Result<VerificationResult, BoardError> {
    let board = build_board(level)?;
    Ok(check(&board, submission))
}

fn check(board: &Board, submission: &Submission) -> VerificationResult {
    let missing: Vec<CellCoord> = board
        .cells()
        .iter()
        .map(Cell::coord)
        .filter(|coord| {
            submission
                .get(*coord)
                .map_or(true, |entry| entry.trim().is_empty())
        })
        .collect();
    if !missing.is_empty() {
        return VerificationResult::incomplete(missing);
    }

    let details: BTreeMap<CellCoord, CellVerdict> = board
        .cells()
        .iter()
        .map(|cell| {
            let expected = cell.letter().to_lowercase().collect::<String>();
            let entered = submission
                .get(cell.coord())
                .map(|entry| entry.trim().to_lowercase())
                .unwrap_or_default();
            let verdict = CellVerdict {
                correct: entered == expected,
                expected,
            };
            (cell.coord(), verdict)
        })
        .collect();
    VerificationResult::checked(details)
}
