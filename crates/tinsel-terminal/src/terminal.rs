//! Terminal abstraction: crossterm for real runs, a writer-backed double for
//! tests.

use crate::error::TuiError;
use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;
use tinsel_core::Grid;

/// Terminal abstraction for testability.
pub trait Terminal {
    /// Enter raw mode and alternate screen.
    fn enter(&mut self) -> Result<(), TuiError>;
    /// Leave alternate screen and raw mode.
    fn leave(&mut self) -> Result<(), TuiError>;
    /// Poll for events with timeout.
    fn poll(&self, timeout: Duration) -> Result<bool, TuiError>;
    /// Read the next event.
    fn read_event(&self) -> Result<Event, TuiError>;
    /// Draw a whole frame.
    fn present(&mut self, grid: &Grid) -> Result<(), TuiError>;
}

/// Backend trait for raw terminal operations (crossterm calls).
pub trait TerminalBackend {
    fn enable_raw_mode(&mut self) -> Result<(), TuiError>;
    fn disable_raw_mode(&mut self) -> Result<(), TuiError>;
    fn enter_alternate_screen(&mut self) -> Result<(), TuiError>;
    fn leave_alternate_screen(&mut self) -> Result<(), TuiError>;
    fn hide_cursor(&mut self) -> Result<(), TuiError>;
    fn show_cursor(&mut self) -> Result<(), TuiError>;
    fn poll(&self, timeout: Duration) -> Result<bool, TuiError>;
    fn read_event(&self) -> Result<Event, TuiError>;
    fn write_frame(&mut self, grid: &Grid) -> Result<(), TuiError>;
}

/// Queue every row of `grid` at column 0, then flush once.
///
/// Nothing is diffed: each call repaints the full frame.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for (row, line) in (0..grid.rows()).zip(grid.lines()) {
        queue!(out, cursor::MoveTo(0, row), Print(line))?;
    }
    out.flush()
}

/// Real crossterm backend.
pub struct CrosstermBackend {
    stdout: BufWriter<Stdout>,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            stdout: BufWriter::new(io::stdout()),
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enable_raw_mode(&mut self) -> Result<(), TuiError> {
        enable_raw_mode()?;
        Ok(())
    }
    fn disable_raw_mode(&mut self) -> Result<(), TuiError> {
        let _ = disable_raw_mode();
        Ok(())
    }
    fn enter_alternate_screen(&mut self) -> Result<(), TuiError> {
        execute!(self.stdout, EnterAlternateScreen)?;
        Ok(())
    }
    fn leave_alternate_screen(&mut self) -> Result<(), TuiError> {
        let _ = execute!(self.stdout, LeaveAlternateScreen);
        Ok(())
    }
    fn hide_cursor(&mut self) -> Result<(), TuiError> {
        execute!(self.stdout, cursor::Hide)?;
        Ok(())
    }
    fn show_cursor(&mut self) -> Result<(), TuiError> {
        let _ = execute!(self.stdout, cursor::Show);
        Ok(())
    }
    fn poll(&self, timeout: Duration) -> Result<bool, TuiError> {
        Ok(event::poll(timeout)?)
    }
    fn read_event(&self) -> Result<Event, TuiError> {
        Ok(event::read()?)
    }
    fn write_frame(&mut self, grid: &Grid) -> Result<(), TuiError> {
        write_grid(&mut self.stdout, grid)?;
        Ok(())
    }
}

/// Testable backend with generic writer for capturing escape sequences.
pub struct TestableBackend<W: Write> {
    writer: W,
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
    frames: usize,
    events: RefCell<VecDeque<Event>>,
    poll_results: RefCell<VecDeque<bool>>,
}

impl<W: Write> TestableBackend<W> {
    /// Create a new testable backend writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
            frames: 0,
            events: RefCell::new(VecDeque::new()),
            poll_results: RefCell::new(VecDeque::new()),
        }
    }

    /// Queue events to be returned by `read_event`.
    #[must_use]
    pub fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.borrow_mut() = events.into_iter().collect();
        self
    }

    /// Queue poll results. Once exhausted, polls report no input.
    #[must_use]
    pub fn with_polls(self, polls: Vec<bool>) -> Self {
        *self.poll_results.borrow_mut() = polls.into_iter().collect();
        self
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    pub fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Get the underlying writer (consumes self).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TerminalBackend for TestableBackend<W> {
    fn enable_raw_mode(&mut self) -> Result<(), TuiError> {
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<(), TuiError> {
        self.raw_mode = false;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<(), TuiError> {
        self.alternate_screen = true;
        execute!(self.writer, EnterAlternateScreen)?;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<(), TuiError> {
        self.alternate_screen = false;
        let _ = execute!(self.writer, LeaveAlternateScreen);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), TuiError> {
        self.cursor_hidden = true;
        execute!(self.writer, cursor::Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), TuiError> {
        self.cursor_hidden = false;
        let _ = execute!(self.writer, cursor::Show);
        Ok(())
    }

    fn poll(&self, _timeout: Duration) -> Result<bool, TuiError> {
        Ok(self.poll_results.borrow_mut().pop_front().unwrap_or(false))
    }

    fn read_event(&self) -> Result<Event, TuiError> {
        self.events.borrow_mut().pop_front().ok_or(TuiError::NoEvent)
    }

    fn write_frame(&mut self, grid: &Grid) -> Result<(), TuiError> {
        write_grid(&mut self.writer, grid)?;
        self.frames += 1;
        Ok(())
    }
}

/// Generic terminal implementation using a backend.
pub struct GenericTerminal<B: TerminalBackend> {
    backend: B,
}

impl<B: TerminalBackend> GenericTerminal<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Take the backend back.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: TerminalBackend> Terminal for GenericTerminal<B> {
    fn enter(&mut self) -> Result<(), TuiError> {
        self.backend.enable_raw_mode()?;
        self.backend.enter_alternate_screen()?;
        self.backend.hide_cursor()?;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), TuiError> {
        self.backend.show_cursor()?;
        self.backend.leave_alternate_screen()?;
        self.backend.disable_raw_mode()?;
        Ok(())
    }

    fn poll(&self, timeout: Duration) -> Result<bool, TuiError> {
        self.backend.poll(timeout)
    }

    fn read_event(&self) -> Result<Event, TuiError> {
        self.backend.read_event()
    }

    fn present(&mut self, grid: &Grid) -> Result<(), TuiError> {
        self.backend.write_frame(grid)
    }
}

/// Convenience alias for crossterm-backed terminal.
pub type CrosstermTerminal = GenericTerminal<CrosstermBackend>;

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn enter(&mut self) -> Result<(), TuiError> {
        (**self).enter()
    }

    fn leave(&mut self) -> Result<(), TuiError> {
        (**self).leave()
    }

    fn poll(&self, timeout: Duration) -> Result<bool, TuiError> {
        (**self).poll(timeout)
    }

    fn read_event(&self) -> Result<Event, TuiError> {
        (**self).read_event()
    }

    fn present(&mut self, grid: &Grid) -> Result<(), TuiError> {
        (**self).present(grid)
    }
}
