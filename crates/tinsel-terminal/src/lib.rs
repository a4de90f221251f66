//! Terminal frontend for tinsel.
//!
//! Draws an animated holiday card on top of [`tinsel_core`]: a decorated
//! tree, a blinking face and a countdown to Christmas. Each tick builds a
//! fresh [`tinsel_core::Canvas`], renders it and repaints the terminal through
//! `crossterm`.
//!
//! # Example
//!
//! ```
//! use tinsel_terminal::{TinselApp, TinselConfig};
//!
//! let config = TinselConfig {
//!     seed: Some(7),
//!     ..TinselConfig::default()
//! };
//! let grid = TinselApp::new(config).unwrap().render_once().unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (20, 70));
//! ```

mod app;
pub mod config;
pub mod countdown;
mod error;
pub mod input;
pub mod scene;
pub mod terminal;

pub use app::{resolve_seed, FrameMetrics, TinselApp};
pub use config::{ConfigError, TinselConfig};
pub use countdown::{Countdown, CountdownError};
pub use error::TuiError;
pub use input::{Action, InputHandler, KeyBinding};
pub use scene::Scene;
pub use terminal::{
    CrosstermBackend, CrosstermTerminal, GenericTerminal, Terminal, TerminalBackend,
    TestableBackend,
};
