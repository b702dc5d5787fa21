//! Square grid of cells

use std::fmt;
use std::str::FromStr;

use super::{Cell, Pos, MAX_BOARD_SIDE};
use crate::error::BoardParseError;

/// Game board: an NxN grid stored row-major
///
/// Snapshots are plain clones, so history can hold full copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Board of the given side length with every cell `Invalid`.
    /// Sides above [`MAX_BOARD_SIDE`] are clamped.
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_BOARD_SIDE);
        Self {
            size,
            cells: vec![Cell::Invalid; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if position lies on the grid
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Cell at position; off-grid positions read as `Invalid`
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            Cell::Invalid
        }
    }

    /// Overwrite a cell. Off-grid positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if self.contains(pos) {
            let idx = pos.to_index(self.size);
            self.cells[idx] = cell;
        }
    }

    /// Center cell under integer division
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// All grid positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |idx| Pos::from_index(idx, self.size))
    }

    /// Positions currently holding a marble
    pub fn marbles(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.cell(pos) == Cell::Marble)
    }

    pub fn marble_count(&self) -> usize {
        self.count(Cell::Marble)
    }

    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Number of non-`Invalid` cells
    pub fn playable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_playable()).count()
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse the text form: `o` marble, `.` empty, `#` or space invalid.
    /// Every row must be as wide as there are rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = rows.len();
        if size > MAX_BOARD_SIDE {
            return Err(BoardParseError::TooLarge {
                size,
                max: MAX_BOARD_SIDE,
            });
        }
        let mut board = Board::new(size);

        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(BoardParseError::Ragged {
                    row: r,
                    expected: size,
                    found: width,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch)
                    .ok_or(BoardParseError::UnknownCell { ch, row: r, col: c })?;
                board.set(Pos::new(r as u8, c as u8), cell);
            }
        }

        Ok(board)
    }
}
