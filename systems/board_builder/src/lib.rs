#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure board construction system deriving crossword geometry from authored levels.
//!
//! Words are laid down in authored order. Every coordinate a word passes
//! through becomes a [`Cell`] that remembers which words touched it and
//! which letters they claimed. Crossing words must agree on the shared
//! letter exactly as authored; any disagreement is an authoring error and
//! aborts construction.

use std::collections::{HashMap, HashSet};

use crossword_core::{Board, BoardError, Bounds, Cell, CellCoord, Level, PlacedWord, WordPlacement};

/// Derives the board for a level.
///
/// The result depends only on `level`; calling this twice with the same
/// level yields identical boards.
///
/// # Errors
///
/// Returns the first authoring error encountered while walking the words in
/// order: a repeated word id, an answer whose character count differs from
/// its declared length, a zero-length word, a word running past the
/// coordinate range, or crossing words claiming different letters. A level
/// without words fails with [`BoardError::EmptyBoard`].
pub fn build_board(level: &Level) -> Result<Board, BoardError> {
    let mut grid = Grid::default();
    let mut seen = HashSet::with_capacity(level.words.len());
    let mut words = Vec::with_capacity(level.words.len());

    for placement in &level.words {
        if !seen.insert(placement.id) {
            return Err(BoardError::DuplicateWordId { id: placement.id });
        }

        let letters = split_answer(placement)?;
        let coords = word_cells(placement)?;
        for (&letter, &coord) in letters.iter().zip(&coords) {
            grid.record(coord, letter, placement)?;
        }

        words.push(PlacedWord::new(placement.clone(), coords));
    }

    let bounds =
        Bounds::enclosing(grid.cells.iter().map(Cell::coord)).ok_or(BoardError::EmptyBoard)?;
    Ok(Board::new(grid.cells, words, bounds))
}

/// Ordered coordinates occupied by a placement, first letter first.
///
/// # Errors
///
/// Fails with [`BoardError::ZeroLength`] for a zero-length word and with
/// [`BoardError::CoordinateOverflow`] when the word runs past the `i32`
/// coordinate range.
pub fn word_cells(placement: &WordPlacement) -> Result<Vec<CellCoord>, BoardError> {
    if placement.length == 0 {
        return Err(BoardError::ZeroLength { id: placement.id });
    }

    (0..placement.length)
        .map(|index| {
            placement
                .direction
                .step(placement.start_pos, index)
                .ok_or(BoardError::CoordinateOverflow { id: placement.id })
        })
        .collect()
}

fn split_answer(placement: &WordPlacement) -> Result<Vec<char>, BoardError> {
    let letters: Vec<char> = placement.answer.chars().collect();
    if letters.len() != placement.length {
        return Err(BoardError::LengthMismatch {
            id: placement.id,
            answer: placement.answer.clone(),
            actual: letters.len(),
            declared: placement.length,
        });
    }
    Ok(letters)
}

/// Sparse cell accumulator preserving creation order.
#[derive(Debug, Default)]
struct Grid {
    cells: Vec<Cell>,
    index: HashMap<CellCoord, usize>,
}

impl Grid {
    fn record(
        &mut self,
        coord: CellCoord,
        letter: char,
        placement: &WordPlacement,
    ) -> Result<(), BoardError> {
        let Some(position) = self.index.get(&coord).copied() else {
            let _ = self.index.insert(coord, self.cells.len());
            self.cells.push(Cell::new(coord, letter, placement.id));
            return Ok(());
        };

        let cell = &mut self.cells[position];
        cell.record(letter, placement.id);
        if !cell.is_consistent() {
            return Err(BoardError::CrossLetterConflict {
                coord,
                letters: cell.letters().to_vec(),
            });
        }
        Ok(())
    }
}
