//! Rectangular outlines built from box-drawing glyphs.

use crate::cell::{Cell, BLANK};

/// Border style using Unicode box-drawing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Rounded corners: ╭─╮│╰─╯
    #[default]
    Rounded,
    /// Single line: ┌─┐│└─┘
    Single,
    /// Double line: ╔═╗║╚═╝
    Double,
    /// Heavy/thick: ┏━┓┃┗━┛
    Heavy,
    /// ASCII only: +-+|+-+
    Ascii,
}

impl BorderStyle {
    /// Get border characters: (`top_left`, `top_right`, `bottom_left`, `bottom_right`, horizontal, vertical)
    #[must_use]
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::Single => ('┌', '┐', '└', '┘', '─', '│'),
            Self::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Self::Heavy => ('┏', '┓', '┗', '┛', '━', '┃'),
            Self::Ascii => ('+', '+', '+', '+', '-', '|'),
        }
    }
}

/// Rounded box spanning rows `start_row..=end_row` and columns `start_col..=end_col`.
///
/// See [`styled_rect`].
#[must_use]
pub fn rect(start_row: i32, end_row: i32, start_col: i32, end_col: i32, filled: bool) -> Vec<Cell> {
    styled_rect(
        start_row,
        end_row,
        start_col,
        end_col,
        filled,
        BorderStyle::Rounded,
    )
}

/// Box outline with the given glyph set.
///
/// Corners sit on the four extreme positions; edges run strictly between
/// them, so no position is emitted twice. With `filled`, every interior
/// position gets a blank cell, which masks whatever lies underneath.
///
/// A box needs `start_row < end_row` and `start_col < end_col`. Anything else
/// yields no cells.
#[must_use]
pub fn styled_rect(
    start_row: i32,
    end_row: i32,
    start_col: i32,
    end_col: i32,
    filled: bool,
    style: BorderStyle,
) -> Vec<Cell> {
    if start_row >= end_row || start_col >= end_col {
        return Vec::new();
    }

    let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = style.chars();
    let inner_rows = start_row + 1..end_row;
    let inner_cols = start_col + 1..end_col;

    let interior = if filled {
        inner_rows.len() * inner_cols.len()
    } else {
        0
    };
    let mut cells = Vec::with_capacity(4 + 2 * inner_cols.len() + 2 * inner_rows.len() + interior);

    if filled {
        for row in inner_rows.clone() {
            cells.extend(inner_cols.clone().map(|col| Cell::new(row, col, BLANK)));
        }
    }

    // Top edge
    cells.push(Cell::new(start_row, start_col, top_left));
    cells.push(Cell::new(start_row, end_col, top_right));
    cells.extend(
        inner_cols
            .clone()
            .map(|col| Cell::new(start_row, col, horizontal)),
    );

    // Bottom edge
    cells.push(Cell::new(end_row, start_col, bottom_left));
    cells.push(Cell::new(end_row, end_col, bottom_right));
    cells.extend(inner_cols.map(|col| Cell::new(end_row, col, horizontal)));

    // Left and right edges
    for row in inner_rows {
        cells.push(Cell::new(row, start_col, vertical));
        cells.push(Cell::new(row, end_col, vertical));
    }

    cells
}
