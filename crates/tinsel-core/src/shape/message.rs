//! Single-line text.

use crate::cell::Cell;
use unicode_width::UnicodeWidthStr;

/// Lay `text` out on one row, one `char` per column, starting at `start_col`.
///
/// Every `char` takes exactly one column even when the terminal draws it two
/// columns wide (`"｡◕◡◕｡"`, `"🅧"`). Callers placing wide text next to other
/// elements should leave room using [`display_width`].
///
/// ```
/// use tinsel_core::{shape, Cell};
///
/// assert_eq!(shape::message(0, 0, "hi"), vec![Cell::new(0, 0, 'h'), Cell::new(0, 1, 'i')]);
/// ```
#[must_use]
pub fn message(start_row: i32, start_col: i32, text: &str) -> Vec<Cell> {
    text.chars()
        .zip(start_col..)
        .map(|(symbol, col)| Cell::new(start_row, col, symbol))
        .collect()
}

/// Columns `text` occupies on a terminal, as opposed to its cell count.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}
