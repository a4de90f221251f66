//! Triangular tree with trunk and ornaments.

use crate::cell::Cell;
use crate::error::ShapeError;
use crate::random::RandomSource;

/// Body glyph of the tree; also used for the trunk.
pub const LEAF: char = '*';
/// Glyph at the apex.
pub const STAR: char = '✪';
/// Glyph that decoration writes over leaves.
pub const ORNAMENT: char = 'O';
/// Tallest tree [`Tree::build_decorated`] accepts.
pub const MAX_TREE_HEIGHT: u16 = 1024;

/// Tree geometry anchored at its top-left corner.
///
/// For a tree of `height` rows the triangle is `2 * height - 1` columns wide.
/// Row 0 holds the star; row `i` (for `i` in `1..height`) spans `2 * i + 1`
/// leaves centred on the midpoint. Below sits a trunk `height / 4` rows tall
/// and `height / 3` wide, widened by one when even so it centres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    /// Row of the star.
    pub start_row: i32,
    /// Leftmost column of the widest row.
    pub start_col: i32,
    /// Rows in the triangle, star included.
    pub height: u16,
}

impl Tree {
    /// Describe a tree.
    #[must_use]
    pub const fn new(start_row: i32, start_col: i32, height: u16) -> Self {
        Self {
            start_row,
            start_col,
            height,
        }
    }

    /// Width of the triangle's base.
    #[must_use]
    pub fn width(&self) -> i32 {
        (2 * i32::from(self.height) - 1).max(0)
    }

    /// Trunk (width, height).
    #[must_use]
    pub fn trunk(&self) -> (i32, i32) {
        let height = i32::from(self.height);
        let width = height / 3;
        let width = if width % 2 == 1 { width } else { width + 1 };
        (width, height / 4)
    }

    /// Number of cells [`Tree::build`] emits.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        if self.height == 0 {
            return 0;
        }
        let height = usize::from(self.height);
        let (trunk_width, trunk_height) = self.trunk();
        height
            .saturating_mul(height)
            .saturating_add((trunk_width * trunk_height) as usize)
    }

    /// Expand into cells: star first, then leaves row by row, then trunk.
    ///
    /// Output grows with the square of `height`.
    #[must_use]
    pub fn build(&self) -> Vec<Cell> {
        if self.height == 0 {
            return Vec::new();
        }

        let height = i32::from(self.height);
        let mid = self.width() / 2;
        let (trunk_width, trunk_height) = self.trunk();

        let mut cells = Vec::with_capacity(self.cell_count());
        cells.push(Cell::new(self.start_row, self.start_col + mid, STAR));

        for i in 1..height {
            for j in mid - i..=mid + i {
                cells.push(Cell::new(self.start_row + i, self.start_col + j, LEAF));
            }
        }

        let trunk_start = mid - trunk_width / 2;
        for i in height..height + trunk_height {
            for j in trunk_start..trunk_start + trunk_width {
                cells.push(Cell::new(self.start_row + i, self.start_col + j, LEAF));
            }
        }

        cells
    }

    /// Build and hang `ornaments` ornaments on it.
    ///
    /// Heights above [`MAX_TREE_HEIGHT`] are rejected before any cell is built.
    pub fn build_decorated<R: RandomSource>(
        &self,
        ornaments: usize,
        rng: &mut R,
    ) -> Result<Vec<Cell>, ShapeError> {
        if self.height > MAX_TREE_HEIGHT {
            return Err(ShapeError::TreeTooTall {
                height: self.height,
                max: MAX_TREE_HEIGHT,
            });
        }
        let mut cells = self.build();
        decorate(&mut cells, ornaments, rng)?;
        Ok(cells)
    }
}

/// Turn exactly `n` distinct leaf cells into ornaments.
///
/// Leaf positions are collected once, shuffled and the first `n` retagged,
/// so this always terminates. Asking for more ornaments than there are leaves
/// fails and leaves `cells` untouched.
pub fn decorate<R: RandomSource>(
    cells: &mut [Cell],
    n: usize,
    rng: &mut R,
) -> Result<(), ShapeError> {
    let mut leaves: Vec<usize> = cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.symbol() == LEAF)
        .map(|(idx, _)| idx)
        .collect();

    if leaves.len() < n {
        return Err(ShapeError::DecorationOverRequest {
            requested: n,
            available: leaves.len(),
        });
    }

    rng.shuffle(&mut leaves);
    for &idx in &leaves[..n] {
        cells[idx].set_symbol(ORNAMENT);
    }
    Ok(())
}
