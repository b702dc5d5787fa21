//! Initial layout generation
//!
//! The playable area is the grid minus four corner blocks. The width of the
//! corner blocks depends on `size % 3`:
//!
//! | `size % 3` | row/col is in a corner band when                 |
//! |------------|--------------------------------------------------|
//! | 0          | `i < n/3 \|\| i > 2n/3 - 1`                      |
//! | 1          | `i < (n-1)/3 \|\| i > 2(n-1)/3`                  |
//! | 2          | `i < (n-2)/3 + 1 \|\| i > 2(n-2)/3`              |
//!
//! A cell is cut out when both its row and its column are in a corner band.
//! Every other cell starts with a marble, except the center which starts empty.
//! For even sizes the "center" is whatever `(n/2, n/2)` lands on.

use super::{Board, Cell, Pos};

/// Build the starting board for an NxN game. Sides above
/// [`MAX_BOARD_SIDE`](super::MAX_BOARD_SIDE) are clamped.
pub fn generate_initial_board(size: usize) -> Board {
    debug_assert!(size > 0, "board size must be positive");

    let mut board = Board::new(size);
    let size = board.size();
    for r in 0..size {
        for c in 0..size {
            let cell = if in_corner_band(size, r) && in_corner_band(size, c) {
                Cell::Invalid
            } else {
                Cell::Marble
            };
            board.set(Pos::new(r as u8, c as u8), cell);
        }
    }

    let center = board.center();
    board.set(center, Cell::Empty);
    board
}

/// Whether row/column index `i` falls in one of the outer bands
fn in_corner_band(n: usize, i: usize) -> bool {
    match n % 3 {
        0 => i < n / 3 || i + 1 > 2 * n / 3,
        1 => i < (n - 1) / 3 || i > 2 * (n - 1) / 3,
        _ => i < (n - 2) / 3 + 1 || i > 2 * (n - 2) / 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MAX_BOARD_SIDE;

    fn count_cells(board: &Board, cell: Cell) -> usize {
        board.positions().filter(|&p| board.cell(p) == cell).count()
    }

    #[test]
    fn test_default_board_is_classic_cross() {
        let board = generate_initial_board(7);
        assert_eq!(board.playable_count(), 33);
        assert_eq!(board.marble_count(), 32);
        assert_eq!(board.empty_count(), 1);
        assert_eq!(board.cell(Pos::new(3, 3)), Cell::Empty);

        let expected = "\
##ooo##
##ooo##
ooooooo
ooo.ooo
ooooooo
##ooo##
##ooo##";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_corners_are_invalid() {
        let board = generate_initial_board(7);
        for pos in [Pos::new(0, 0), Pos::new(1, 1), Pos::new(0, 6), Pos::new(6, 0), Pos::new(5, 6)] {
            assert_eq!(board.cell(pos), Cell::Invalid, "{pos}");
        }
        // Arms of the cross stay playable
        assert_eq!(board.cell(Pos::new(0, 2)), Cell::Marble);
        assert_eq!(board.cell(Pos::new(2, 0)), Cell::Marble);
    }

    #[test]
    fn test_size_multiple_of_three() {
        // n = 9: bands are 0..3 and 6..9, cross arms 3 wide
        let board = generate_initial_board(9);
        assert_eq!(board.playable_count(), 81 - 4 * 9);
        assert_eq!(board.cell(Pos::new(2, 2)), Cell::Invalid);
        assert_eq!(board.cell(Pos::new(2, 3)), Cell::Marble);
        assert_eq!(board.cell(Pos::new(6, 6)), Cell::Invalid);
        assert_eq!(board.cell(Pos::new(5, 5)), Cell::Marble);
        assert_eq!(board.cell(Pos::new(4, 4)), Cell::Empty);
    }

    #[test]
    fn test_size_two_mod_three() {
        // n = 5: bands are 0..2 and 3..5, leaving a one-wide cross
        let board = generate_initial_board(5);
        let expected = "\
##o##
##o##
oo.oo
##o##
##o##";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_size_one_mod_three() {
        // n = 10: bands are 0..3 and 7..10, leaving a four-wide cross
        let board = generate_initial_board(10);
        let expected = "\
###oooo###
###oooo###
###oooo###
oooooooooo
oooooooooo
ooooo.oooo
oooooooooo
###oooo###
###oooo###
###oooo###";
        assert_eq!(board.to_string(), expected);
        assert_eq!(board.playable_count(), 100 - 4 * 9);
    }

    #[test]
    fn test_oversized_board_is_clamped() {
        let board = generate_initial_board(300);
        assert_eq!(board.size(), MAX_BOARD_SIDE);
        assert_eq!(board.marbles().count(), board.marble_count());
        assert_eq!(board.positions().count(), MAX_BOARD_SIDE * MAX_BOARD_SIDE);
        assert_eq!(board.empty_count(), 1);

        // 256 % 3 == 1: bands are 0..85 and 171..256
        let band = 85;
        assert_eq!(board.playable_count(), 256 * 256 - 4 * band * band);
    }

    #[test]
    fn test_even_size_uses_integer_center() {
        let board = generate_initial_board(8);
        assert_eq!(board.center(), Pos::new(4, 4));
        assert_eq!(board.cell(Pos::new(4, 4)), Cell::Empty);
        assert_eq!(count_cells(&board, Cell::Empty), 1);
    }

    #[test]
    fn test_exactly_one_empty_for_many_sizes() {
        for size in 3..=15 {
            let board = generate_initial_board(size);
            assert_eq!(board.empty_count(), 1, "size {size}");
            assert_eq!(board.cell(board.center()), Cell::Empty, "size {size}");
        }
    }

    #[test]
    fn test_layout_is_symmetric() {
        for size in 3..=12 {
            let board = generate_initial_board(size);
            let n = size as u8;
            for pos in board.positions() {
                let mirrored = Pos::new(n - 1 - pos.row, n - 1 - pos.col);
                let transposed = Pos::new(pos.col, pos.row);
                assert_eq!(
                    board.cell(pos).is_playable(),
                    board.cell(mirrored).is_playable(),
                    "size {size} at {pos}"
                );
                assert_eq!(
                    board.cell(pos).is_playable(),
                    board.cell(transposed).is_playable(),
                    "size {size} at {pos}"
                );
            }
        }
    }
}
