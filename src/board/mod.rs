//! Board representation for marble solitaire

pub mod board;
pub mod layout;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use layout::generate_initial_board;

/// Default side length (classic 33-hole cross)
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Largest side length a [`Pos`] can address
pub const MAX_BOARD_SIDE: usize = u8::MAX as usize + 1;

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not part of the playable board
    Invalid,
    Empty,
    Marble,
}

impl Cell {
    /// Whether the cell belongs to the playable area
    #[inline]
    pub fn is_playable(self) -> bool {
        self != Cell::Invalid
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Cell::Invalid => '#',
            Cell::Empty => '.',
            Cell::Marble => 'o',
        }
    }

    pub(crate) fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '#' | ' ' => Some(Cell::Invalid),
            '.' => Some(Cell::Empty),
            'o' => Some(Cell::Marble),
            _ => None,
        }
    }
}

/// Position on the board, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta. Returns `None` if either coordinate would go
    /// negative or overflow; the upper bound is checked by the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Pos { row, col })
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
