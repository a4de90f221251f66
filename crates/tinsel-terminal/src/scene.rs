//! The holiday card: one canvas per frame.
//!
//! ```text
//! ╭────🅧🅜🅐🅢──────────────────────────────────────╮
//! │              ✪                                 │
//! │             *O*                                │
//! │      ╭─────────────╮                           │
//! │      │     ｡◕◡◕｡   │   6 days, 1 hours, ...    │
//! │      ╰─────────────╯                           │
//! │                                     q - quit   │
//! ╰────────────────────────────────────────────────╯
//! ```

use crate::config::TinselConfig;
use crate::countdown::Countdown;
use crate::error::TuiError;
use tinsel_core::{Canvas, Element, ElementFactory, RandomSource};

const TITLE: &str = "🅧🅜🅐🅢";
const EYES_CLOSED: &str = "｡◕◡◕｡";
const EYES_OPEN: &str = "｡◕▿◕｡";
const QUIT_HINT_COL: i32 = 43;

/// Layer depths, low to high.
mod depth {
    pub(super) const TREE: i32 = 1;
    pub(super) const FACE: i32 = 4;
    pub(super) const BORDER: i32 = 5;
    pub(super) const TEXT: i32 = 10;
}

/// Whether the face's mouth is open on a given frame.
#[must_use]
pub const fn mouth_open(frame: u64) -> bool {
    frame % 2 == 0 || frame % 3 == 0 || frame % 5 == 0
}

/// Layout of the card on a `rows` x `cols` canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    rows: u16,
    cols: u16,
    tree_height: u16,
    ornaments: usize,
    quit_key: char,
}

impl Scene {
    /// Scene with explicit geometry, quitting on `q`.
    #[must_use]
    pub const fn new(rows: u16, cols: u16, tree_height: u16, ornaments: usize) -> Self {
        Self {
            rows,
            cols,
            tree_height,
            ornaments,
            quit_key: 'q',
        }
    }

    /// Key named in the quit hint.
    #[must_use]
    pub const fn with_quit_key(self, quit_key: char) -> Self {
        Self { quit_key, ..self }
    }

    /// Scene described by a config.
    #[must_use]
    pub const fn from_config(config: &TinselConfig) -> Self {
        Self::new(
            config.rows,
            config.cols,
            config.tree_height,
            config.ornaments,
        )
        .with_quit_key(config.quit_key)
    }

    /// Build every element for one frame onto a fresh canvas.
    pub fn compose<R: RandomSource>(
        &self,
        frame: u64,
        countdown: &Countdown,
        rng: &mut R,
    ) -> Result<Canvas, TuiError> {
        let mut canvas = Canvas::new(self.rows, self.cols)?;
        let last_row = i32::from(self.rows) - 1;
        let last_col = i32::from(self.cols) - 1;

        let border = ElementFactory::create_box(0, last_row, 0, last_col, false, depth::BORDER);
        let title = ElementFactory::create_message(0, 5, TITLE, depth::TEXT);
        let tree = ElementFactory::create_tree(
            2,
            2,
            self.tree_height,
            self.ornaments,
            depth::TREE,
            rng,
        )?;

        // Face and eyes share one element so they always move together.
        let face = ElementFactory::create_box(7, 11, 9, 23, true, depth::FACE);
        let eyes_text = if mouth_open(frame) {
            EYES_OPEN
        } else {
            EYES_CLOSED
        };
        let eyes = ElementFactory::create_message(9, 15, eyes_text, depth::FACE);
        let face = Element::merge(&face, &eyes);

        let hint = format!("{} - quit", self.quit_key);
        let quit_hint =
            ElementFactory::create_message(last_row - 1, QUIT_HINT_COL, &hint, depth::TEXT);
        let countdown =
            ElementFactory::create_message(10, 30, &countdown.to_string(), depth::TEXT);

        for element in [border, title, tree, face, quit_hint, countdown] {
            canvas.upsert(element);
        }

        log::trace!("scene: frame {frame} composed {} elements", canvas.len());
        Ok(canvas)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_config(&TinselConfig::default())
    }
}
