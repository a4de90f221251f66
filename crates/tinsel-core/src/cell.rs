//! Grid cells.

/// Character painted on every position no element covers.
pub const BLANK: char = ' ';

/// A single addressable grid position holding one display character.
///
/// Coordinates are signed so shapes can be authored partially (or fully)
/// off-canvas; clipping happens at render time, never at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    row: i32,
    col: i32,
    symbol: char,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: i32, col: i32, symbol: char) -> Self {
        Self { row, col, symbol }
    }

    /// Row (y) of this cell.
    #[must_use]
    pub const fn row(&self) -> i32 {
        self.row
    }

    /// Column (x) of this cell.
    #[must_use]
    pub const fn col(&self) -> i32 {
        self.col
    }

    /// The character displayed at this position.
    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Retag the character. Position is fixed for the life of the cell.
    pub fn set_symbol(&mut self, symbol: char) {
        self.symbol = symbol;
    }

    /// Check whether the cell lies inside a `rows` x `cols` grid.
    #[must_use]
    pub fn in_bounds(&self, rows: u16, cols: u16) -> bool {
        self.row >= 0
            && self.row < i32::from(rows)
            && self.col >= 0
            && self.col < i32::from(cols)
    }
}
