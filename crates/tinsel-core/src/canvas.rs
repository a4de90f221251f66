//! Canvas: the element registry and the compositor that flattens it.
//!
//! # Examples
//!
//! ```
//! use tinsel_core::{Canvas, Cell, Element};
//!
//! let mut canvas = Canvas::new(3, 3).unwrap();
//! canvas.upsert(Element::new(0, vec![Cell::new(1, 1, 'X')]));
//!
//! let grid = canvas.render();
//! assert_eq!(grid.to_string(), "   \n X \n   ");
//! ```

use crate::cell::BLANK;
use crate::element::{Element, ElementId};
use crate::error::CanvasError;
use indexmap::IndexMap;
use std::fmt;

/// A rendered `rows` x `cols` frame of characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<char>,
}

impl Grid {
    /// Blank grid.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![BLANK; usize::from(rows) * usize::from(cols)],
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Character at a position, `None` when out of range.
    #[must_use]
    pub fn get(&self, row: u16, col: u16) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// One row of characters. Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: u16) -> &[char] {
        let start = self.index(row, 0);
        &self.cells[start..start + usize::from(self.cols)]
    }

    /// Rows as strings, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(usize::from(self.cols).max(1))
            .take(usize::from(self.rows))
            .map(|row| row.iter().collect())
    }

    /// All characters, row-major.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.cells
    }

    fn index(&self, row: u16, col: u16) -> usize {
        usize::from(row) * usize::from(self.cols) + usize::from(col)
    }

    fn set(&mut self, row: u16, col: u16, symbol: char) {
        let idx = self.index(row, col);
        self.cells[idx] = symbol;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Fixed-size canvas holding at most one element per id.
///
/// Elements keep the order in which their id was first upserted. That order
/// breaks ties between equal-z elements at render time.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: u16,
    cols: u16,
    elements: IndexMap<ElementId, Element>,
}

impl Canvas {
    /// Create an empty canvas. Both dimensions must be non-zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self, CanvasError> {
        if rows == 0 || cols == 0 {
            return Err(CanvasError::ZeroSized { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            elements: IndexMap::new(),
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Insert an element, or replace the one already registered under its id.
    ///
    /// A replacement keeps the original slot in insertion order. Returns the
    /// element that was replaced, if any.
    pub fn upsert(&mut self, element: Element) -> Option<Element> {
        self.elements.insert(element.id(), element)
    }

    /// Remove and return the element registered under `id`.
    pub fn remove(&mut self, id: ElementId) -> Result<Element, CanvasError> {
        self.elements.shift_remove(&id).ok_or_else(|| {
            log::warn!("canvas: remove of unknown element {id}");
            CanvasError::NotFound(id)
        })
    }

    /// Look up an element.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Check whether an element is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied()
    }

    /// Registered elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.values()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if no elements are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Flatten all elements into a fresh grid.
    ///
    /// Elements paint in ascending z; equal z keeps insertion order. Within an
    /// element cells paint in sequence. Later writes win. Cells outside the
    /// canvas are dropped.
    #[must_use]
    pub fn render(&self) -> Grid {
        let mut grid = Grid::new(self.rows, self.cols);

        let mut layers: Vec<&Element> = self.elements.values().collect();
        layers.sort_by_key(|element| element.z());

        let mut clipped = 0usize;
        for element in layers {
            for cell in element.cells() {
                if !cell.in_bounds(self.rows, self.cols) {
                    clipped += 1;
                    continue;
                }
                grid.set(cell.row() as u16, cell.col() as u16, cell.symbol());
            }
        }

        if clipped > 0 {
            log::trace!("canvas: clipped {clipped} out-of-bounds cells");
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn dot(z: i32, row: i32, col: i32, symbol: char) -> Element {
        Element::new(z, vec![Cell::new(row, col, symbol)])
    }

    #[test]
    fn test_new_rejects_zero_dims() {
        assert_eq!(
            Canvas::new(0, 5).unwrap_err(),
            CanvasError::ZeroSized { rows: 0, cols: 5 }
        );
        assert!(Canvas::new(5, 0).is_err());
    }

    #[test]
    fn test_empty_render_is_blank() {
        let grid = Canvas::new(2, 3).unwrap().render();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.as_slice().iter().all(|&c| c == BLANK));
    }

    #[test]
    fn test_single_cell_3x3() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.upsert(dot(0, 1, 1, 'X'));
        let grid = canvas.render();

        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 1) { 'X' } else { ' ' };
                assert_eq!(grid.get(row, col), Some(expected));
            }
        }
    }

    #[test]
    fn test_higher_z_wins() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.upsert(dot(2, 0, 0, 'B'));
        canvas.upsert(dot(1, 0, 0, 'A'));
        assert_eq!(canvas.render().get(0, 0), Some('B'));
    }

    #[test]
    fn test_equal_z_later_insert_wins() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.upsert(dot(3, 1, 1, 'a'));
        canvas.upsert(dot(3, 1, 1, 'b'));
        assert_eq!(canvas.render().get(1, 1), Some('b'));
    }

    #[test]
    fn test_replacement_keeps_insertion_slot() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let first = dot(0, 0, 0, 'a');
        let first_id = first.id();
        canvas.upsert(first);
        canvas.upsert(dot(0, 0, 0, 'b'));

        // Replacing the earlier entry keeps it painting before 'b'.
        let mut same_id = canvas.get(first_id).unwrap().clone();
        same_id.cells_mut()[0].set_symbol('c');
        let old = canvas.upsert(same_id);

        assert_eq!(old.map(|e| e.cells()[0].symbol()), Some('a'));
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.render().get(0, 0), Some('b'));
    }

    #[test]
    fn test_within_element_last_cell_wins() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.upsert(Element::new(
            0,
            vec![Cell::new(0, 0, 'x'), Cell::new(0, 0, 'y')],
        ));
        assert_eq!(canvas.render().get(0, 0), Some('y'));
    }

    #[test]
    fn test_out_of_bounds_clipped() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.upsert(Element::new(
            0,
            vec![
                Cell::new(-1, 0, 'n'),
                Cell::new(0, -1, 'w'),
                Cell::new(2, 0, 's'),
                Cell::new(0, 2, 'e'),
                Cell::new(1, 1, 'k'),
            ],
        ));
        let grid = canvas.render();
        assert_eq!(grid.to_string(), "  \n k");
    }

    #[test]
    fn test_remove_known() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let el = dot(0, 0, 0, 'x');
        let id = el.id();
        canvas.upsert(el);

        let removed = canvas.remove(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(canvas.is_empty());
        assert_eq!(canvas.render().get(0, 0), Some(BLANK));
    }

    #[test]
    fn test_remove_unknown_reports_not_found() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.upsert(dot(0, 0, 0, 'x'));
        let stranger = Element::new(0, vec![]);

        let err = canvas.remove(stranger.id()).unwrap_err();
        assert_eq!(err, CanvasError::NotFound(stranger.id()));
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let a = dot(0, 0, 0, 'a');
        let b = dot(0, 0, 0, 'b');
        let c = dot(0, 0, 0, 'c');
        let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());
        canvas.upsert(a);
        canvas.upsert(b);
        canvas.upsert(c);

        canvas.remove(b_id).unwrap();
        assert_eq!(canvas.ids().collect::<Vec<_>>(), vec![a_id, c_id]);
        assert_eq!(canvas.render().get(0, 0), Some('c'));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.upsert(dot(0, 0, 0, 'x'));
        let first = canvas.render();
        let second = canvas.render();
        assert_eq!(first, second);
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_get_and_contains() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let el = dot(4, 0, 0, 'x');
        let id = el.id();
        assert!(canvas.get(id).is_none());
        canvas.upsert(el);
        assert!(canvas.contains(id));
        assert_eq!(canvas.get(id).map(Element::z), Some(4));
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.upsert(dot(0, 0, 0, 'x'));
        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_grid_row_and_lines() {
        let mut canvas = Canvas::new(2, 3).unwrap();
        canvas.upsert(Element::new(
            0,
            vec![Cell::new(1, 0, 'a'), Cell::new(1, 2, 'c')],
        ));
        let grid = canvas.render();
        assert_eq!(grid.row(1), &['a', ' ', 'c']);
        assert_eq!(grid.lines().collect::<Vec<_>>(), vec!["   ", "a c"]);
        assert_eq!(grid.get(2, 0), None);
    }
}
