//! Element factory: shape builders wrapped into z-ordered elements.

use crate::element::Element;
use crate::error::ShapeError;
use crate::random::RandomSource;
use crate::shape::{self, BorderStyle, Tree};

/// Builds elements from shape descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementFactory;

impl ElementFactory {
    /// Rounded box element. See [`shape::rect`].
    #[must_use]
    pub fn create_box(
        start_row: i32,
        end_row: i32,
        start_col: i32,
        end_col: i32,
        filled: bool,
        z: i32,
    ) -> Element {
        Element::new(z, shape::rect(start_row, end_row, start_col, end_col, filled))
    }

    /// Box element with a specific glyph set.
    #[must_use]
    pub fn create_styled_box(
        start_row: i32,
        end_row: i32,
        start_col: i32,
        end_col: i32,
        filled: bool,
        style: BorderStyle,
        z: i32,
    ) -> Element {
        Element::new(
            z,
            shape::styled_rect(start_row, end_row, start_col, end_col, filled, style),
        )
    }

    /// Single-line text element. See [`shape::message`].
    #[must_use]
    pub fn create_message(start_row: i32, start_col: i32, text: &str, z: i32) -> Element {
        Element::new(z, shape::message(start_row, start_col, text))
    }

    /// Decorated tree element.
    pub fn create_tree<R: RandomSource>(
        start_row: i32,
        start_col: i32,
        height: u16,
        ornaments: usize,
        z: i32,
        rng: &mut R,
    ) -> Result<Element, ShapeError> {
        let cells = Tree::new(start_row, start_col, height).build_decorated(ornaments, rng)?;
        Ok(Element::new(z, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRng;
    use crate::shape::ORNAMENT;

    #[test]
    fn test_create_box() {
        let el = ElementFactory::create_box(0, 4, 0, 4, true, 5);
        assert_eq!(el.z(), 5);
        assert_eq!(el.len(), 21);
    }

    #[test]
    fn test_create_styled_box() {
        let el = ElementFactory::create_styled_box(0, 2, 0, 2, false, BorderStyle::Double, 1);
        assert!(el.cells().iter().any(|c| c.symbol() == '╔'));
    }

    #[test]
    fn test_create_message() {
        let el = ElementFactory::create_message(18, 43, "q - quit", 10);
        assert_eq!(el.z(), 10);
        assert_eq!(el.len(), 8);
        assert_eq!(el.cells()[0].col(), 43);
    }

    #[test]
    fn test_create_tree() {
        let mut rng = SeededRng::new(42);
        let el = ElementFactory::create_tree(2, 2, 15, 9, 1, &mut rng).unwrap();
        assert_eq!(el.z(), 1);
        let ornaments = el.cells().iter().filter(|c| c.symbol() == ORNAMENT).count();
        assert_eq!(ornaments, 9);
    }

    #[test]
    fn test_create_tree_over_request() {
        let mut rng = SeededRng::new(42);
        let err = ElementFactory::create_tree(0, 0, 2, 9, 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::DecorationOverRequest { requested: 9, .. }
        ));
    }

    #[test]
    fn test_each_call_gets_fresh_id() {
        let a = ElementFactory::create_message(0, 0, "a", 0);
        let b = ElementFactory::create_message(0, 0, "a", 0);
        assert_ne!(a.id(), b.id());
    }
}
