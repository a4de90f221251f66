//! Error types for tinsel-core.

use crate::element::ElementId;
use thiserror::Error;

/// Errors reported by [`Canvas`](crate::Canvas) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// A canvas needs at least one row and one column.
    #[error("canvas must be at least 1x1 (got {rows}x{cols})")]
    ZeroSized { rows: u16, cols: u16 },

    /// No element is registered under this id.
    #[error("no element found with id {0}")]
    NotFound(ElementId),
}

/// Errors reported by shape builders and decorators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// More ornaments were requested than there are leaf cells to hold them.
    #[error("cannot place {requested} ornaments on {available} leaf cells")]
    DecorationOverRequest { requested: usize, available: usize },

    /// Tree is taller than a decorated tree may be.
    #[error("tree height {height} exceeds the maximum of {max}")]
    TreeTooTall { height: u16, max: u16 },
}
