//! Error types for tinsel-terminal.

use crate::config::ConfigError;
use crate::countdown::CountdownError;
use thiserror::Error;
use tinsel_core::{CanvasError, ShapeError};

/// Errors that can occur while running the card.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error from terminal operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene geometry could not be built.
    #[error("Invalid scene: {0}")]
    Shape(#[from] ShapeError),

    /// Canvas rejected an operation.
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    /// Countdown could not be computed.
    #[error("Countdown error: {0}")]
    Countdown(#[from] CountdownError),

    /// Configuration was rejected.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Backend has no more events to hand out.
    #[error("No pending terminal event")]
    NoEvent,
}
