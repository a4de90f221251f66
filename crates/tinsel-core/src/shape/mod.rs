//! Shape builders.
//!
//! Each builder is a pure function from geometry to a `Vec<Cell>`. Wrapping
//! the cells into an [`Element`](crate::Element) is the factory's job.
//!
//! ```text
//! rect()    ╭───╮      message()  hi!      tree()     ✪
//!           │   │                                    ***
//!           ╰───╯                                   *****
//! ```

mod message;
mod rect;
mod tree;

pub use message::{display_width, message};
pub use rect::{rect, styled_rect, BorderStyle};
pub use tree::{decorate, Tree, LEAF, MAX_TREE_HEIGHT, ORNAMENT, STAR};
