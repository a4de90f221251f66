//! Drawable elements: identified, z-ordered bundles of cells.
//!
//! # Examples
//!
//! ```
//! use tinsel_core::{Cell, Element};
//!
//! let face = Element::new(4, vec![Cell::new(0, 0, '(')]);
//! let eyes = Element::new(9, vec![Cell::new(0, 1, ')')]);
//!
//! let merged = Element::merge(&face, &eyes);
//! assert_eq!(merged.z(), 4);
//! assert_eq!(merged.len(), 2);
//! assert_ne!(merged.id(), face.id());
//! ```

use crate::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next id handed out by [`ElementId::next`].
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Wrap a raw id. Ids built this way are not reserved against the allocator.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a fresh id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One logical drawable: a box, a line of text, a composite shape.
///
/// Cell positions are not validated here. The same element can be upserted
/// into canvases of different sizes; each render clips on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    z: i32,
    cells: Vec<Cell>,
}

impl Element {
    /// Create an element with a freshly allocated id.
    #[must_use]
    pub fn new(z: i32, cells: Vec<Cell>) -> Self {
        Self {
            id: ElementId::next(),
            z,
            cells,
        }
    }

    /// Combine two elements into a new one.
    ///
    /// The result takes `first`'s depth; `second.z` is discarded. Cells are
    /// `first`'s followed by `second`'s, so where they collide `second` paints
    /// on top.
    #[must_use]
    pub fn merge(first: &Self, second: &Self) -> Self {
        let mut cells = Vec::with_capacity(first.cells.len() + second.cells.len());
        cells.extend_from_slice(&first.cells);
        cells.extend_from_slice(&second.cells);
        Self::new(first.z, cells)
    }

    /// Element id.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// Depth key; higher paints over lower.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Cells in paint order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access for decoration passes. The slice cannot grow or shrink.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the element has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Same element (same id) at another depth.
    #[must_use]
    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}
