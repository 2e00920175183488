use crossword_core::{
    BoardError, Bounds, CellCoord, Difficulty, Direction, Level, LevelId, WordId, WordPlacement,
};
use crossword_system_board_builder::{build_board, word_cells};

fn word(id: u32, direction: Direction, x: i32, y: i32, answer: &str) -> WordPlacement {
    WordPlacement {
        id: WordId::new(id),
        direction,
        start_pos: CellCoord::new(x, y),
        length: answer.chars().count(),
        answer: answer.to_owned(),
        clue: format!("clue for {answer}"),
    }
}

fn level(words: Vec<WordPlacement>) -> Level {
    Level {
        level_id: LevelId::new(1),
        theme: "Animals".to_owned(),
        difficulty: Difficulty::Label("easy".to_owned()),
        words,
    }
}

#[test]
fn crossing_words_share_their_first_cell() {
    let board = build_board(&level(vec![
        word(1, Direction::Across, 0, 0, "CAT"),
        word(2, Direction::Down, 0, 0, "CAR"),
    ]))
    .expect("consistent crossing builds");

    let origin = board.cell(CellCoord::new(0, 0)).expect("origin is occupied");
    assert_eq!(origin.letters(), ['C', 'C']);
    assert_eq!(origin.word_ids(), [WordId::new(1), WordId::new(2)]);
    assert!(origin.is_cross(), "shared cell must be marked as a crossing");

    assert_eq!(
        board.bounds(),
        Bounds {
            min_x: 0,
            min_y: 0,
            max_x: 2,
            max_y: 2
        }
    );
    assert_eq!(board.width(), 3);
    assert_eq!(board.height(), 3);
    assert_eq!(board.cells().len(), 5, "CAT and CAR cover five distinct cells");
}

#[test]
fn unshared_cells_are_not_crossings() {
    let board = build_board(&level(vec![
        word(1, Direction::Across, 0, 0, "CAT"),
        word(2, Direction::Down, 0, 0, "CAR"),
    ]))
    .expect("consistent crossing builds");

    let tail = board.cell(CellCoord::new(2, 0)).expect("T is occupied");
    assert_eq!(tail.letters(), ['T']);
    assert!(!tail.is_cross());
    assert_eq!(board.cell(CellCoord::new(1, 1)), None, "diagonal stays empty");
}

#[test]
fn cells_follow_word_then_letter_order() {
    let board = build_board(&level(vec![
        word(1, Direction::Across, 0, 1, "OX"),
        word(2, Direction::Down, 1, 0, "AX"),
    ]))
    .expect("crossing on X builds");

    let order: Vec<CellCoord> = board.cells().iter().map(|cell| cell.coord()).collect();
    assert_eq!(
        order,
        vec![
            CellCoord::new(0, 1),
            CellCoord::new(1, 1),
            CellCoord::new(1, 0),
        ]
    );
}

#[test]
fn placed_words_carry_their_cells() {
    let board = build_board(&level(vec![word(4, Direction::Down, -1, 2, "EMU")]))
        .expect("single word builds");

    let placed = board.word(WordId::new(4)).expect("word is recorded");
    assert_eq!(
        placed.cells(),
        [
            CellCoord::new(-1, 2),
            CellCoord::new(-1, 3),
            CellCoord::new(-1, 4)
        ]
    );
    assert_eq!(placed.placement().answer, "EMU");
    assert_eq!(board.bounds().min_x, -1);
    assert_eq!(board.width(), 1);
    assert_eq!(board.height(), 3);
}

#[test]
fn conflicting_crossing_names_the_cell() {
    let error = build_board(&level(vec![
        word(1, Direction::Across, 0, 0, "CAT"),
        word(2, Direction::Down, 0, 0, "DOG"),
    ]))
    .expect_err("C and D cannot share a cell");

    assert_eq!(
        error,
        BoardError::CrossLetterConflict {
            coord: CellCoord::new(0, 0),
            letters: vec!['C', 'D'],
        }
    );
}

#[test]
fn crossing_letters_are_compared_as_authored() {
    let error = build_board(&level(vec![
        word(1, Direction::Across, 0, 0, "CAT"),
        word(2, Direction::Down, 0, 0, "car"),
    ]))
    .expect_err("case differences are conflicts");

    assert!(
        matches!(
            error,
            BoardError::CrossLetterConflict { coord, .. } if coord == CellCoord::new(0, 0)
        ),
        "unexpected error: {error:?}",
    );
}

#[test]
fn declared_length_must_match_answer() {
    let mut broken = word(3, Direction::Across, 0, 0, "CAT");
    broken.length = 4;

    let error = build_board(&level(vec![broken])).expect_err("length drift is rejected");
    assert_eq!(
        error,
        BoardError::LengthMismatch {
            id: WordId::new(3),
            answer: "CAT".to_owned(),
            actual: 3,
            declared: 4,
        }
    );
    assert!(error.to_string().contains("\"CAT\""), "message names the word");
}

#[test]
fn length_counts_characters_not_bytes() {
    let board = build_board(&level(vec![word(1, Direction::Across, 0, 0, "ÉTÉ")]))
        .expect("multi-byte letters count once");
    assert_eq!(board.width(), 3);
}

#[test]
fn level_without_words_is_rejected() {
    assert_eq!(build_board(&level(Vec::new())), Err(BoardError::EmptyBoard));
}

#[test]
fn duplicate_word_ids_are_rejected() {
    let error = build_board(&level(vec![
        word(1, Direction::Across, 0, 0, "CAT"),
        word(1, Direction::Across, 0, 2, "DOG"),
    ]))
    .expect_err("ids are unique within a level");
    assert_eq!(error, BoardError::DuplicateWordId { id: WordId::new(1) });
}

#[test]
fn zero_length_words_are_rejected() {
    let error =
        build_board(&level(vec![word(9, Direction::Down, 0, 0, "")])).expect_err("empty word");
    assert_eq!(error, BoardError::ZeroLength { id: WordId::new(9) });
}

#[test]
fn words_past_the_coordinate_range_are_rejected() {
    let placement = word(2, Direction::Across, i32::MAX - 1, 0, "CAT");
    assert_eq!(
        word_cells(&placement),
        Err(BoardError::CoordinateOverflow { id: WordId::new(2) })
    );
}

#[test]
fn first_authoring_error_wins() {
    let mut too_long = word(2, Direction::Across, 5, 5, "OWL");
    too_long.length = 2;

    let error = build_board(&level(vec![
        word(1, Direction::Across, 0, 0, "CAT"),
        too_long,
        word(3, Direction::Down, 0, 0, "DOG"),
    ]))
    .expect_err("broken level");
    assert!(
        matches!(error, BoardError::LengthMismatch { id, .. } if id == WordId::new(2)),
        "length mismatch precedes the later conflict, got {error:?}",
    );
}
