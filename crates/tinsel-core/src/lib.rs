//! Layered character-grid compositor.
//!
//! This crate provides the drawing model used by `tinsel`:
//! - Grid positions: [`Cell`]
//! - Drawables: [`Element`], identified by [`ElementId`] and ordered by z
//! - Shape builders: [`shape::rect`], [`shape::message`], [`shape::Tree`]
//! - Composition: [`Canvas`] flattens elements into a [`Grid`]
//! - Randomness: [`RandomSource`] for ornament placement
//!
//! # Example
//!
//! ```
//! use tinsel_core::{Canvas, ElementFactory};
//!
//! let mut canvas = Canvas::new(5, 12).unwrap();
//! canvas.upsert(ElementFactory::create_box(0, 4, 0, 11, true, 0));
//! canvas.upsert(ElementFactory::create_message(2, 2, "tinsel", 1));
//!
//! let grid = canvas.render();
//! assert_eq!(grid.lines().nth(2).unwrap(), "│ tinsel   │");
//! ```

mod canvas;
mod cell;
mod element;
mod error;
mod factory;
pub mod random;
pub mod shape;

pub use canvas::{Canvas, Grid};
pub use cell::{Cell, BLANK};
pub use element::{Element, ElementId};
pub use error::{CanvasError, ShapeError};
pub use factory::ElementFactory;
pub use random::{env_seed, RandomSource, SeededRng, DEFAULT_SEED};
pub use shape::BorderStyle;
