use crossword_core::{
    CellCoord, Difficulty, Direction, Level, LevelId, Submission, WordId, WordPlacement,
};
use crossword_system_answer_verifier::verify;
use crossword_system_board_builder::build_board;
use proptest::{collection::vec, prelude::*, sample::Index};

// Words are cut out of a random letter grid, so every crossing agrees.
prop_compose! {
    fn consistent_level()(width in 1usize..6, height in 1usize..6)(
        letters in vec(prop::char::range('a', 'z'), width * height),
        spans in vec((any::<bool>(), 0usize..6, 0usize..6, 1usize..6), 1..6),
        width in Just(width),
        height in Just(height),
    ) -> Level {
        let words = spans
            .into_iter()
            .enumerate()
            .map(|(index, (across, x, y, length))| {
                let x = x % width;
                let y = y % height;
                let (direction, length) = if across {
                    (Direction::Across, 1 + (length - 1) % (width - x))
                } else {
                    (Direction::Down, 1 + (length - 1) % (height - y))
                };
                let answer = (0..length)
                    .map(|offset| match direction {
                        Direction::Across => letters[y * width + x + offset],
                        Direction::Down => letters[(y + offset) * width + x],
                    })
                    .collect::<String>()
                    .to_uppercase();
                WordPlacement {
                    id: WordId::new(u32::try_from(index).expect("few words")),
                    direction,
                    start_pos: CellCoord::new(
                        i32::try_from(x).expect("small grid"),
                        i32::try_from(y).expect("small grid"),
                    ),
                    length,
                    answer,
                    clue: String::new(),
                }
            })
            .collect();
        Level {
            level_id: LevelId::new(3),
            theme: "Generated".to_owned(),
            difficulty: Difficulty::Rank(2),
            words,
        }
    }
}

fn canonical_submission(level: &Level) -> Submission {
    let board = build_board(level).expect("generated level is consistent");
    board
        .cells()
        .iter()
        .map(|cell| (cell.coord(), cell.letter().to_lowercase().collect::<String>()))
        .collect()
}

proptest! {
    #[test]
    fn canonical_letters_always_verify(level in consistent_level()) {
        let result = verify(&level, &canonical_submission(&level)).expect("level builds");
        prop_assert!(result.is_correct());
        prop_assert!(result.missing().is_empty());
    }

    #[test]
    fn dropping_any_cell_reports_it_missing(level in consistent_level(), pick in any::<Index>()) {
        let board = build_board(&level).expect("generated level is consistent");
        let dropped = pick.get(board.cells()).coord();
        let partial: Submission = board
            .cells()
            .iter()
            .filter(|cell| cell.coord() != dropped)
            .map(|cell| (cell.coord(), cell.letter().to_string()))
            .collect();

        let result = verify(&level, &partial).expect("level builds");
        prop_assert!(!result.is_correct());
        prop_assert!(result.missing().contains(&dropped));
        prop_assert!(result.details().is_empty());
    }
}
