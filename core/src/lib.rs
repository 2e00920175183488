#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the crossword engine.
//!
//! This crate defines the data that flows between the level store, the pure
//! systems and the presentation adapters. Authored [`Level`] values enter
//! from the store, the board builder derives a [`Board`] from them, and the
//! answer verifier checks a player's [`Submission`] against that board to
//! produce a [`VerificationResult`]. Adapters only ever see a [`BoardView`],
//! which carries geometry and clues but never the answers.

use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    fmt,
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Unique identifier assigned to a level by the level store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelId(u32);

impl LevelId {
    /// Creates a new level identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a word, unique within its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(u32);

impl WordId {
    /// Creates a new word identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Location of a single board cell.
///
/// Coordinates are unbounded in both directions; `x` grows to the right and
/// `y` grows downwards. The textual key form `"x,y"` is only used at the
/// wire boundary for submissions and verification details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: i32,
    y: i32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Error returned when a cell key does not have the `"x,y"` shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid cell key {0:?}, expected \"x,y\"")]
pub struct CellKeyError(String);

impl FromStr for CellCoord {
    type Err = CellKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || CellKeyError(key.to_owned());
        let (x, y) = key.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// Orientation of a word on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Letters advance along increasing `x`.
    Across,
    /// Letters advance along increasing `y`.
    Down,
}

impl Direction {
    /// Coordinate of the letter at `index` for a word starting at `start`.
    ///
    /// Returns `None` when the coordinate would leave the `i32` range.
    #[must_use]
    pub fn step(self, start: CellCoord, index: usize) -> Option<CellCoord> {
        let offset = i32::try_from(index).ok()?;
        match self {
            Self::Across => Some(CellCoord::new(start.x.checked_add(offset)?, start.y)),
            Self::Down => Some(CellCoord::new(start.x, start.y.checked_add(offset)?)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "Across"),
            Self::Down => write!(f, "Down"),
        }
    }
}

/// Difficulty annotation attached to a level, either a rank or a free label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Difficulty {
    /// Numeric difficulty rank.
    Rank(u32),
    /// Named difficulty such as `"easy"`.
    Label(String),
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "{rank}"),
            Self::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Authored placement of a single word within a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPlacement {
    /// Identifier of the word, unique within its level.
    pub id: WordId,
    /// Orientation of the word.
    pub direction: Direction,
    /// Cell holding the first letter.
    pub start_pos: CellCoord,
    /// Declared number of letters.
    pub length: usize,
    /// Solution text; its character count must equal `length`.
    pub answer: String,
    /// Clue shown to the player.
    pub clue: String,
}

/// Authored level definition supplied by the level store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Identifier of the level.
    pub level_id: LevelId,
    /// Theme shared by the level's words.
    pub theme: String,
    /// Difficulty annotation.
    pub difficulty: Difficulty,
    /// Word placements in authored order.
    pub words: Vec<WordPlacement>,
}

/// Listing entry describing a level without its words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSummary {
    /// Identifier of the level.
    pub level_id: LevelId,
    /// Theme shared by the level's words.
    pub theme: String,
    /// Difficulty annotation.
    pub difficulty: Difficulty,
}

impl From<&Level> for LevelSummary {
    fn from(level: &Level) -> Self {
        Self {
            level_id: level.level_id,
            theme: level.theme.clone(),
            difficulty: level.difficulty.clone(),
        }
    }
}

/// Board cell derived from every word passing through a coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: CellCoord,
    letters: Vec<char>,
    word_ids: Vec<WordId>,
    is_cross: bool,
}

impl Cell {
    /// Creates a cell holding the first letter contributed by `word`.
    #[must_use]
    pub fn new(coord: CellCoord, letter: char, word: WordId) -> Self {
        Self {
            coord,
            letters: vec![letter],
            word_ids: vec![word],
            is_cross: false,
        }
    }

    /// Records another word passing through the cell.
    ///
    /// The cell becomes a crossing as soon as a second word is recorded.
    /// Letter consistency is not checked here.
    pub fn record(&mut self, letter: char, word: WordId) {
        self.letters.push(letter);
        self.word_ids.push(word);
        self.is_cross = self.word_ids.len() > 1;
    }

    /// Coordinate of the cell.
    #[must_use]
    pub const fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Canonical letter of the cell as authored, taken from the first word.
    #[must_use]
    pub fn letter(&self) -> char {
        self.letters[0]
    }

    /// Letters contributed by each word in processing order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Reports whether every recorded letter is identical.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.letters.iter().all(|letter| *letter == self.letters[0])
    }

    /// Identifiers of the words occupying the cell in processing order.
    #[must_use]
    pub fn word_ids(&self) -> &[WordId] {
        &self.word_ids
    }

    /// Reports whether two or more words share the cell.
    #[must_use]
    pub const fn is_cross(&self) -> bool {
        self.is_cross
    }
}

/// Inclusive bounding box over every occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    /// Smallest occupied `x`.
    pub min_x: i32,
    /// Smallest occupied `y`.
    pub min_y: i32,
    /// Largest occupied `x`.
    pub max_x: i32,
    /// Largest occupied `y`.
    pub max_y: i32,
}

impl Bounds {
    /// Computes the bounds enclosing the provided coordinates.
    ///
    /// Returns `None` when the iterator is empty.
    #[must_use]
    pub fn enclosing<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = CellCoord>,
    {
        coords.into_iter().fold(None, |bounds, coord| {
            Some(match bounds {
                None => Self {
                    min_x: coord.x,
                    min_y: coord.y,
                    max_x: coord.x,
                    max_y: coord.y,
                },
                Some(bounds) => Self {
                    min_x: bounds.min_x.min(coord.x),
                    min_y: bounds.min_y.min(coord.y),
                    max_x: bounds.max_x.max(coord.x),
                    max_y: bounds.max_y.max(coord.y),
                },
            })
        })
    }

    /// Number of columns spanned, `max_x - min_x + 1`.
    #[must_use]
    pub fn width(&self) -> u64 {
        u64::from(self.max_x.abs_diff(self.min_x)) + 1
    }

    /// Number of rows spanned, `max_y - min_y + 1`.
    #[must_use]
    pub fn height(&self) -> u64 {
        u64::from(self.max_y.abs_diff(self.min_y)) + 1
    }

    /// Reports whether the coordinate lies inside the bounds.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        (self.min_x..=self.max_x).contains(&coord.x)
            && (self.min_y..=self.max_y).contains(&coord.y)
    }
}

/// Word placement enriched with the ordered cells it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    placement: WordPlacement,
    cells: Vec<CellCoord>,
}

impl PlacedWord {
    /// Pairs a placement with its occupied cells.
    #[must_use]
    pub fn new(placement: WordPlacement, cells: Vec<CellCoord>) -> Self {
        Self { placement, cells }
    }

    /// Authored placement, answer included.
    #[must_use]
    pub const fn placement(&self) -> &WordPlacement {
        &self.placement
    }

    /// Occupied coordinates from the first letter to the last.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }
}

/// Board derived from a level.
///
/// The board holds the answer letters and is therefore never serialized;
/// use [`Board::layout`] for the geometry that may be shown to players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    index: HashMap<CellCoord, usize>,
    words: Vec<PlacedWord>,
    bounds: Bounds,
}

impl Board {
    /// Assembles a board from cells in creation order, placed words and bounds.
    #[must_use]
    pub fn new(cells: Vec<Cell>, words: Vec<PlacedWord>, bounds: Bounds) -> Self {
        let index = cells
            .iter()
            .enumerate()
            .map(|(position, cell)| (cell.coord, position))
            .collect();
        Self {
            cells,
            index,
            words,
            bounds,
        }
    }

    /// Cells in creation order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up the cell at the provided coordinate.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.index.get(&coord).map(|position| &self.cells[*position])
    }

    /// Words in authored order with their occupied cells.
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Looks up a placed word by identifier.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&PlacedWord> {
        self.words.iter().find(|word| word.placement.id == id)
    }

    /// Bounding box over every occupied cell.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of columns spanned by the board.
    #[must_use]
    pub fn width(&self) -> u64 {
        self.bounds.width()
    }

    /// Number of rows spanned by the board.
    #[must_use]
    pub fn height(&self) -> u64 {
        self.bounds.height()
    }

    /// Captures the board geometry without any answer letters.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout {
            cells: self
                .cells
                .iter()
                .map(|cell| LayoutCell {
                    coord: cell.coord,
                    word_ids: cell.word_ids.clone(),
                    is_cross: cell.is_cross,
                })
                .collect(),
            words: self
                .words
                .iter()
                .map(|word| LayoutWord {
                    id: word.placement.id,
                    direction: word.placement.direction,
                    start_pos: word.placement.start_pos,
                    length: word.placement.length,
                    cells: word.cells.clone(),
                })
                .collect(),
            bounds: self.bounds,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Cell geometry safe to hand to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutCell {
    /// Coordinate of the cell.
    #[serde(flatten)]
    pub coord: CellCoord,
    /// Words occupying the cell.
    pub word_ids: Vec<WordId>,
    /// Whether two or more words share the cell.
    pub is_cross: bool,
}

/// Word geometry safe to hand to players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutWord {
    /// Identifier of the word.
    pub id: WordId,
    /// Orientation of the word.
    pub direction: Direction,
    /// Cell holding the first letter.
    pub start_pos: CellCoord,
    /// Number of letters.
    pub length: usize,
    /// Occupied coordinates from the first letter to the last.
    pub cells: Vec<CellCoord>,
}

/// Board geometry without answer letters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardLayout {
    /// Cells in creation order.
    pub cells: Vec<LayoutCell>,
    /// Words in authored order.
    pub words: Vec<LayoutWord>,
    /// Bounding box over every occupied cell.
    pub bounds: Bounds,
    /// Number of columns spanned.
    pub width: u64,
    /// Number of rows spanned.
    pub height: u64,
}

/// Clue listing entry with the answer withheld.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordView {
    /// Identifier of the word.
    pub id: WordId,
    /// Orientation of the word.
    pub direction: Direction,
    /// Number of letters.
    pub length: usize,
    /// Clue shown to the player.
    pub clue: String,
    /// Cell holding the first letter.
    pub start_pos: CellCoord,
}

impl From<&WordPlacement> for WordView {
    fn from(placement: &WordPlacement) -> Self {
        Self {
            id: placement.id,
            direction: placement.direction,
            length: placement.length,
            clue: placement.clue.clone(),
            start_pos: placement.start_pos,
        }
    }
}

/// Everything a presentation layer needs to draw a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    /// Identifier of the level.
    pub level_id: LevelId,
    /// Theme shared by the level's words.
    pub theme: String,
    /// Difficulty annotation.
    pub difficulty: Difficulty,
    /// Board geometry.
    pub board: BoardLayout,
    /// Clue listing in authored order.
    pub words: Vec<WordView>,
}

impl BoardView {
    /// Combines a level with the board derived from it.
    #[must_use]
    pub fn new(level: &Level, board: &Board) -> Self {
        Self {
            level_id: level.level_id,
            theme: level.theme.clone(),
            difficulty: level.difficulty.clone(),
            board: board.layout(),
            words: level.words.iter().map(WordView::from).collect(),
        }
    }
}

/// Letters entered by a player, keyed by cell.
///
/// Deserializes from a JSON object keyed by `"x,y"` whose values are
/// strings or `null`. Keys that cannot name a board cell, or that repeat a
/// cell already named, are kept aside in [`Submission::ignored_keys`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Option<String>>")]
pub struct Submission {
    entries: HashMap<CellCoord, String>,
    ignored_keys: Vec<String>,
}

impl Submission {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for a cell, returning the previous entry if any.
    pub fn insert(&mut self, coord: CellCoord, value: impl Into<String>) -> Option<String> {
        self.entries.insert(coord, value.into())
    }

    /// Raw entry for a cell, untrimmed.
    #[must_use]
    pub fn get(&self, coord: CellCoord) -> Option<&str> {
        self.entries.get(&coord).map(String::as_str)
    }

    /// Number of cell entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the submission holds no cell entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys dropped during deserialization, unparseable or naming a cell twice.
    #[must_use]
    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }
}

impl From<BTreeMap<String, Option<String>>> for Submission {
    /// Keys naming the same cell are resolved in favour of the exact `"x,y"`
    /// spelling, otherwise the first in key order. Losing keys are ignored.
    /// A `null` entry leaves its cell unfilled.
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        let mut claimed: HashMap<CellCoord, (String, Option<String>)> = HashMap::new();
        let mut ignored_keys = Vec::new();
        for (key, value) in raw {
            let Ok(coord) = key.parse::<CellCoord>() else {
                ignored_keys.push(key);
                continue;
            };
            match claimed.entry(coord) {
                Entry::Vacant(slot) => {
                    let _ = slot.insert((key, value));
                }
                Entry::Occupied(mut slot) if key == coord.to_string() => {
                    let (previous, _) = slot.insert((key, value));
                    ignored_keys.push(previous);
                }
                Entry::Occupied(_) => ignored_keys.push(key),
            }
        }
        ignored_keys.sort();

        Self {
            entries: claimed
                .into_iter()
                .filter_map(|(coord, (_, value))| value.map(|value| (coord, value)))
                .collect(),
            ignored_keys,
        }
    }
}

impl<V: Into<String>> FromIterator<(CellCoord, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (CellCoord, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (coord, value) in iter {
            let _ = submission.insert(coord, value);
        }
        submission
    }
}

/// Outcome for a single cell of a complete submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellVerdict {
    /// Whether the entered letter matches the solution.
    pub correct: bool,
    /// Lower-cased solution letter.
    pub expected: String,
}

/// Message prefix reported for submissions with blank or missing cells.
pub const INCOMPLETE_MESSAGE: &str = "Please fill in all required cells! Missing cells: ";

/// Verdict produced by the answer verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(
        rename = "missingCells",
        serialize_with = "serialize_keys",
        skip_serializing_if = "Vec::is_empty"
    )]
    missing: Vec<CellCoord>,
    #[serde(serialize_with = "serialize_keyed")]
    details: BTreeMap<CellCoord, CellVerdict>,
}

impl VerificationResult {
    /// Result for a submission lacking the listed cells; no cell is checked.
    #[must_use]
    pub fn incomplete(missing: Vec<CellCoord>) -> Self {
        let keys: Vec<String> = missing.iter().map(ToString::to_string).collect();
        Self {
            correct: false,
            message: Some(format!("{INCOMPLETE_MESSAGE}{}", keys.join(", "))),
            missing,
            details: BTreeMap::new(),
        }
    }

    /// Result for a complete submission; correct only if every cell is.
    #[must_use]
    pub fn checked(details: BTreeMap<CellCoord, CellVerdict>) -> Self {
        Self {
            correct: details.values().all(|verdict| verdict.correct),
            message: None,
            missing: Vec::new(),
            details,
        }
    }

    /// Overall verdict.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }

    /// Reports whether the submission was rejected as incomplete.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Completeness failure message, present only for incomplete submissions.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Cells that were absent or blank, in board order.
    #[must_use]
    pub fn missing(&self) -> &[CellCoord] {
        &self.missing
    }

    /// Per-cell verdicts; empty for incomplete submissions.
    #[must_use]
    pub fn details(&self) -> &BTreeMap<CellCoord, CellVerdict> {
        &self.details
    }
}

fn serialize_keys<S>(coords: &[CellCoord], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(coords.iter().map(ToString::to_string))
}

fn serialize_keyed<S, V>(map: &BTreeMap<CellCoord, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    serializer.collect_map(map.iter().map(|(coord, value)| (coord.to_string(), value)))
}

/// Authoring errors that make a level impossible to build.
///
/// These describe broken content rather than player mistakes; retrying with
/// the same level reproduces them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The answer's character count differs from the declared length.
    #[error("word {id} answer {answer:?} has {actual} letters but declares length {declared}")]
    LengthMismatch {
        /// Identifier of the offending word.
        id: WordId,
        /// Authored answer.
        answer: String,
        /// Number of characters in the answer.
        actual: usize,
        /// Declared length.
        declared: usize,
    },
    /// Crossing words disagree on the letter at a shared cell.
    #[error("letter mismatch at ({coord}): {}", join_letters(.letters))]
    CrossLetterConflict {
        /// Shared cell.
        coord: CellCoord,
        /// Letters recorded at the cell in processing order.
        letters: Vec<char>,
    },
    /// The level declares no words, so no bounds exist.
    #[error("level has no cells, unable to compute board bounds")]
    EmptyBoard,
    /// Two words in the level share an identifier.
    #[error("word id {id} is declared more than once")]
    DuplicateWordId {
        /// Repeated identifier.
        id: WordId,
    },
    /// A word declares zero letters.
    #[error("word {id} declares length 0")]
    ZeroLength {
        /// Identifier of the offending word.
        id: WordId,
    },
    /// A word runs past the representable coordinate range.
    #[error("word {id} extends beyond the coordinate range")]
    CoordinateOverflow {
        /// Identifier of the offending word.
        id: WordId,
    },
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
