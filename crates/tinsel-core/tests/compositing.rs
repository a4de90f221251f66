//! Compositing laws for the canvas.
//!
//! Every test here states one property of `Canvas::render` and tries to break
//! it, either with a hand-picked scene or with generated elements.

use proptest::prelude::*;
use tinsel_core::shape::{self, Tree, LEAF, ORNAMENT, STAR};
use tinsel_core::{Canvas, CanvasError, Cell, Element, ElementFactory, SeededRng, BLANK};

fn arb_cell() -> impl Strategy<Value = Cell> {
    (-30i32..60, -30i32..90, prop::char::range('!', '~'))
        .prop_map(|(row, col, symbol)| Cell::new(row, col, symbol))
}

fn arb_element() -> impl Strategy<Value = Element> {
    (-5i32..5, prop::collection::vec(arb_cell(), 0..40))
        .prop_map(|(z, cells)| Element::new(z, cells))
}

// =============================================================================
// Shape of the output
// =============================================================================

proptest! {
    #[test]
    fn prop_render_dimensions_fixed(
        rows in 1u16..40,
        cols in 1u16..80,
        elements in prop::collection::vec(arb_element(), 0..8),
    ) {
        let mut canvas = Canvas::new(rows, cols).unwrap();
        for element in elements {
            canvas.upsert(element);
        }
        let grid = canvas.render();

        prop_assert_eq!(grid.rows(), rows);
        prop_assert_eq!(grid.cols(), cols);
        prop_assert_eq!(grid.as_slice().len(), usize::from(rows) * usize::from(cols));
        prop_assert_eq!(grid.lines().count(), usize::from(rows));
        for line in grid.lines() {
            prop_assert_eq!(line.chars().count(), usize::from(cols));
        }
    }

    #[test]
    fn prop_clipped_cells_never_appear(
        rows in 1u16..20,
        cols in 1u16..20,
        cells in prop::collection::vec(arb_cell(), 1..60),
    ) {
        // Paint only out-of-bounds cells with a marker nothing else uses.
        let outside: Vec<Cell> = cells
            .into_iter()
            .filter(|c| !c.in_bounds(rows, cols))
            .map(|c| Cell::new(c.row(), c.col(), '@'))
            .collect();

        let mut canvas = Canvas::new(rows, cols).unwrap();
        canvas.upsert(Element::new(0, outside));
        let grid = canvas.render();

        prop_assert!(grid.as_slice().iter().all(|&c| c == BLANK));
    }

    #[test]
    fn prop_top_layer_wins(
        low_z in -100i32..0,
        high_z in 1i32..100,
        row in 0u16..10,
        col in 0u16..10,
    ) {
        let mut canvas = Canvas::new(10, 10).unwrap();
        let at = |z, symbol| Element::new(z, vec![Cell::new(i32::from(row), i32::from(col), symbol)]);
        // Insert the top layer first so insertion order cannot explain the result.
        canvas.upsert(at(high_z, 'B'));
        canvas.upsert(at(low_z, 'A'));

        prop_assert_eq!(canvas.render().get(row, col), Some('B'));
    }

    #[test]
    fn prop_merge_length_and_depth(a in arb_element(), b in arb_element()) {
        let merged = Element::merge(&a, &b);
        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert_eq!(merged.z(), a.z());
        prop_assert_eq!(&merged.cells()[..a.len()], a.cells());
        prop_assert_eq!(&merged.cells()[a.len()..], b.cells());
    }

    #[test]
    fn prop_ornament_count_exact(height in 2u16..30, seed in any::<u64>(), want in 0usize..10) {
        let plain = Tree::new(0, 0, height).build();
        let leaves = plain.iter().filter(|c| c.symbol() == LEAF).count();
        let mut rng = SeededRng::new(seed);

        match Tree::new(0, 0, height).build_decorated(want, &mut rng) {
            Ok(cells) => {
                prop_assert!(want <= leaves);
                let ornaments = cells.iter().filter(|c| c.symbol() == ORNAMENT).count();
                prop_assert_eq!(ornaments, want);
                prop_assert_eq!(cells.len(), plain.len());
            }
            Err(_) => prop_assert!(want > leaves),
        }
    }
}

// =============================================================================
// Hand-picked scenes
// =============================================================================

#[test]
fn equal_depth_last_inserted_wins() {
    let mut canvas = Canvas::new(1, 3).unwrap();
    canvas.upsert(Element::new(7, vec![Cell::new(0, 1, 'a')]));
    canvas.upsert(Element::new(7, vec![Cell::new(0, 1, 'b')]));
    assert_eq!(canvas.render().to_string(), " b ");
}

#[test]
fn single_cell_on_3x3() {
    let mut canvas = Canvas::new(3, 3).unwrap();
    canvas.upsert(Element::new(0, vec![Cell::new(1, 1, 'X')]));
    assert_eq!(canvas.render().to_string(), "   \n X \n   ");
}

#[test]
fn unknown_removal_leaves_canvas_alone() {
    let mut canvas = Canvas::new(2, 2).unwrap();
    let kept = Element::new(0, vec![Cell::new(0, 0, 'k')]);
    let kept_id = kept.id();
    canvas.upsert(kept);
    let before = canvas.render();

    let ghost = Element::new(0, vec![]);
    assert_eq!(
        canvas.remove(ghost.id()),
        Err(CanvasError::NotFound(ghost.id()))
    );
    assert_eq!(canvas.ids().collect::<Vec<_>>(), vec![kept_id]);
    assert_eq!(canvas.render(), before);
}

#[test]
fn filled_box_masks_lower_layers() {
    let mut canvas = Canvas::new(5, 5).unwrap();
    canvas.upsert(Element::new(
        0,
        (0..5)
            .flat_map(|r| (0..5).map(move |c| Cell::new(r, c, '#')))
            .collect(),
    ));
    canvas.upsert(ElementFactory::create_box(0, 4, 0, 4, true, 1));

    let grid = canvas.render();
    assert_eq!(
        grid.to_string(),
        "╭───╮\n│   │\n│   │\n│   │\n╰───╯"
    );
}

#[test]
fn merged_face_eyes_over_box() {
    let face = ElementFactory::create_box(0, 2, 0, 6, true, 4);
    let eyes = ElementFactory::create_message(1, 2, "oo", 99);
    let merged = Element::merge(&face, &eyes);
    assert_eq!(merged.z(), 4);

    let mut canvas = Canvas::new(3, 7).unwrap();
    canvas.upsert(merged);
    assert_eq!(canvas.render().lines().nth(1).unwrap(), "│ oo  │");
}

#[test]
fn element_reused_across_canvas_sizes() {
    let banner = ElementFactory::create_message(0, 0, "hello", 0);

    let mut small = Canvas::new(1, 3).unwrap();
    small.upsert(banner.clone());
    let mut large = Canvas::new(1, 8).unwrap();
    large.upsert(banner);

    assert_eq!(small.render().to_string(), "hel");
    assert_eq!(large.render().to_string(), "hello   ");
}

#[test]
fn tree_partially_off_canvas_renders_visible_part() {
    let mut rng = SeededRng::new(1);
    let tree = ElementFactory::create_tree(-1, -3, 4, 0, 0, &mut rng).unwrap();
    let mut canvas = Canvas::new(3, 4).unwrap();
    canvas.upsert(tree);

    // Star lands at (-1, 0) and is clipped.
    let grid = canvas.render();
    assert!(!grid.as_slice().contains(&STAR));
    assert_eq!(grid.to_string(), "**  \n*** \n****");
}

#[test]
fn hollow_box_cell_counts() {
    assert_eq!(shape::rect(0, 4, 0, 4, false).len(), 12);
    assert_eq!(shape::rect(0, 4, 0, 4, true).len(), 21);
}
