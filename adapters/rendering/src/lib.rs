#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Plain-text presentation of crossword boards and verification results.

use std::{
    collections::{BTreeMap, HashSet},
    io::Write,
};

use anyhow::{Context, Result as AnyResult};
use crossword_core::{
    BoardLayout, BoardView, CellCoord, Direction, Submission, VerificationResult, WordView,
};
use thiserror::Error;

/// Largest number of columns or rows drawn as a grid.
pub const MAX_RENDERED_SIDE: u64 = 256;

/// Narrowest grid column; wider start labels widen every column.
const MIN_CELL_WIDTH: usize = 4;

/// Computes the number labels drawn in cells where words start.
///
/// Words sharing a start cell are joined with `/` in authored order, so a
/// cell starting words 1 and 2 is labelled `1/2`.
#[must_use]
pub fn start_labels(layout: &BoardLayout) -> BTreeMap<CellCoord, String> {
    let mut labels: BTreeMap<CellCoord, String> = BTreeMap::new();
    for word in &layout.words {
        let label = labels.entry(word.start_pos).or_default();
        if !label.is_empty() {
            label.push('/');
        }
        label.push_str(&word.id.to_string());
    }
    labels
}

/// Renders an empty board followed by its clue listing.
pub fn render_board(view: &BoardView) -> Result<String, RenderingError> {
    let mut lines = vec![header(view), String::new()];
    lines.extend(grid_lines(&view.board, |_| CellGlyph::Open)?);
    lines.push(String::new());
    lines.extend(clue_lines(&view.words));
    Ok(finish(lines))
}

/// Renders the player's letters over the board together with the verdict.
///
/// Cells judged incorrect are flagged with `!`. Incomplete submissions show
/// the completeness message instead of a score.
pub fn render_verdict(
    view: &BoardView,
    submission: &Submission,
    result: &VerificationResult,
) -> Result<String, RenderingError> {
    let mut lines = vec![header(view), String::new()];
    lines.extend(grid_lines(&view.board, |coord| {
        let entered = submission
            .get(coord)
            .and_then(|entry| entry.trim().chars().next())
            .map(|letter| letter.to_uppercase().next().unwrap_or(letter));
        let wrong = result
            .details()
            .get(&coord)
            .is_some_and(|verdict| !verdict.correct);
        match entered {
            None => CellGlyph::Open,
            Some(letter) if wrong => CellGlyph::Wrong(letter),
            Some(letter) => CellGlyph::Letter(letter),
        }
    })?);
    lines.push(String::new());
    lines.push(summary(result));
    Ok(finish(lines))
}

/// Errors that can occur while laying out a board as text.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RenderingError {
    /// The board spans more columns or rows than a terminal grid can show.
    #[error("board of {width}x{height} cells is too large to draw (limit {})", MAX_RENDERED_SIDE)]
    BoardTooLarge {
        /// Number of columns spanned.
        width: u64,
        /// Number of rows spanned.
        height: u64,
    },
}

/// Rendering backend capable of presenting crossword boards.
pub trait RenderingBackend {
    /// Presents an unfilled board with its clues.
    fn present_board(&mut self, view: &BoardView) -> AnyResult<()>;

    /// Presents a checked submission.
    fn present_verdict(
        &mut self,
        view: &BoardView,
        submission: &Submission,
        result: &VerificationResult,
    ) -> AnyResult<()>;
}

/// Backend writing rendered text to any byte sink.
#[derive(Debug)]
pub struct TextBackend<W> {
    out: W,
}

impl<W: Write> TextBackend<W> {
    /// Creates a backend writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the backend, yielding the underlying sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderingBackend for TextBackend<W> {
    fn present_board(&mut self, view: &BoardView) -> AnyResult<()> {
        let text = render_board(view)?;
        self.out
            .write_all(text.as_bytes())
            .context("failed to write board")
    }

    fn present_verdict(
        &mut self,
        view: &BoardView,
        submission: &Submission,
        result: &VerificationResult,
    ) -> AnyResult<()> {
        let text = render_verdict(view, submission, result)?;
        self.out
            .write_all(text.as_bytes())
            .context("failed to write verdict")
    }
}

enum CellGlyph {
    Open,
    Letter(char),
    Wrong(char),
}

impl CellGlyph {
    fn token(&self) -> String {
        match self {
            Self::Open => "[ ] ".to_owned(),
            Self::Letter(letter) => format!("[{letter}] "),
            Self::Wrong(letter) => format!("[{letter}]!"),
        }
    }
}

fn header(view: &BoardView) -> String {
    format!(
        "Level {} · {} · {}",
        view.level_id, view.theme, view.difficulty
    )
}

fn grid_lines<F>(layout: &BoardLayout, mut glyph: F) -> Result<Vec<String>, RenderingError>
where
    F: FnMut(CellCoord) -> CellGlyph,
{
    if layout.width > MAX_RENDERED_SIDE || layout.height > MAX_RENDERED_SIDE {
        return Err(RenderingError::BoardTooLarge {
            width: layout.width,
            height: layout.height,
        });
    }

    let occupied: HashSet<CellCoord> = layout.cells.iter().map(|cell| cell.coord).collect();
    let labels = start_labels(layout);
    let column = labels
        .values()
        .map(|label| label.chars().count() + 1)
        .fold(MIN_CELL_WIDTH, usize::max);
    let bounds = layout.bounds;
    let mut lines = Vec::new();

    for y in bounds.min_y..=bounds.max_y {
        let mut label_row = String::new();
        let mut cell_row = String::new();
        for x in bounds.min_x..=bounds.max_x {
            let coord = CellCoord::new(x, y);
            let label = labels.get(&coord).map_or("", String::as_str);
            label_row.push_str(&format!("{label:<column$}"));
            if occupied.contains(&coord) {
                cell_row.push_str(&format!("{:<column$}", glyph(coord).token()));
            } else {
                cell_row.push_str(&" ".repeat(column));
            }
        }
        if !label_row.trim().is_empty() {
            lines.push(label_row.trim_end().to_owned());
        }
        lines.push(cell_row.trim_end().to_owned());
    }
    Ok(lines)
}

fn clue_lines(words: &[WordView]) -> Vec<String> {
    let mut lines = Vec::new();
    for direction in [Direction::Across, Direction::Down] {
        let clues: Vec<&WordView> = words
            .iter()
            .filter(|word| word.direction == direction)
            .collect();
        if clues.is_empty() {
            continue;
        }
        lines.push(direction.to_string());
        lines.extend(
            clues
                .iter()
                .map(|word| format!("  {}. {} ({})", word.id, word.clue, word.length)),
        );
    }
    lines
}

fn summary(result: &VerificationResult) -> String {
    if let Some(message) = result.message() {
        return message.to_owned();
    }
    if result.is_correct() {
        return "All cells correct!".to_owned();
    }
    let wrong = result
        .details()
        .values()
        .filter(|verdict| !verdict.correct)
        .count();
    format!("{wrong} of {} cells incorrect", result.details().len())
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
