use super::*;
use crate::error::BoardParseError;

#[test]
fn test_cell_playable() {
    assert!(!Cell::Invalid.is_playable());
    assert!(Cell::Empty.is_playable());
    assert!(Cell::Marble.is_playable());
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.row, 3);
    assert_eq!(pos.col, 4);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 3); // Center of 7x7
    assert_eq!(pos.to_index(7), 24);

    let pos2 = Pos::from_index(24, 7);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.offset(2, 0), Some(Pos::new(3, 2)));
    assert_eq!(pos.offset(0, -2), Some(Pos::new(1, 0)));
    assert_eq!(pos.offset(-2, 0), None);
    assert_eq!(pos.offset(0, -3), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_off_grid_reads_invalid() {
    let board = generate_initial_board(DEFAULT_BOARD_SIZE);
    assert!(!board.contains(Pos::new(7, 3)));
    assert_eq!(board.cell(Pos::new(7, 3)), Cell::Invalid);
    assert_eq!(board.cell(Pos::new(3, 200)), Cell::Invalid);
}

#[test]
fn test_set_off_grid_is_ignored() {
    let mut board = generate_initial_board(DEFAULT_BOARD_SIZE);
    let before = board.clone();
    board.set(Pos::new(9, 9), Cell::Marble);
    assert_eq!(board, before);
}

#[test]
fn test_marbles_iterates_row_major() {
    let board: Board = "###\n.o.\no##".parse().unwrap();
    let marbles: Vec<Pos> = board.marbles().collect();
    assert_eq!(marbles, vec![Pos::new(1, 1), Pos::new(2, 0)]);
}

#[test]
fn test_parse_and_display() {
    let text = "##o##\n##.##\nooooo\n##o##\n##o##";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.cell(Pos::new(1, 2)), Cell::Empty);
    assert_eq!(board.cell(Pos::new(0, 0)), Cell::Invalid);
    assert_eq!(board.marble_count(), 8);
    assert_eq!(board.to_string(), text);
}

#[test]
fn test_parse_spaces_as_invalid() {
    let board: Board = "  o\n.o \n  o".parse().unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.cell(Pos::new(0, 0)), Cell::Invalid);
    assert_eq!(board.cell(Pos::new(1, 0)), Cell::Empty);
    assert_eq!(board.cell(Pos::new(1, 2)), Cell::Invalid);
}

#[test]
fn test_parse_rejects_short_rows() {
    assert_eq!(
        "o\n.\no".parse::<Board>(),
        Err(BoardParseError::Ragged { row: 0, expected: 3, found: 1 })
    );
    assert_eq!(
        "ooo\n.o\nooo".parse::<Board>(),
        Err(BoardParseError::Ragged { row: 1, expected: 3, found: 2 })
    );
}

#[test]
fn test_parse_rejects_oversized_board() {
    let row = "o".repeat(300);
    let text = vec![row; 300].join("\n");
    assert_eq!(
        text.parse::<Board>(),
        Err(BoardParseError::TooLarge { size: 300, max: MAX_BOARD_SIDE })
    );
}

#[test]
fn test_new_clamps_side() {
    let board = Board::new(1000);
    assert_eq!(board.size(), MAX_BOARD_SIDE);
    let last = board.positions().last().unwrap();
    assert_eq!(last, Pos::new(255, 255));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
    assert_eq!(
        "ooo\noooo\nooo".parse::<Board>(),
        Err(BoardParseError::Ragged { row: 1, expected: 3, found: 4 })
    );
    assert_eq!(
        "ooo\noxo\nooo".parse::<Board>(),
        Err(BoardParseError::UnknownCell { ch: 'x', row: 1, col: 1 })
    );
}

#[test]
fn test_default_size() {
    assert_eq!(DEFAULT_BOARD_SIZE, 7);
}
