// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyEvent, TerminalError};
use crossterm::style::Color;

/// The primitive terminal operations that [`LineEditor`] is built on.
///
/// Everything here is blocking. [`Self::read_key_event()`] is the only place the editor
/// waits. There are two implementations in this crate:
/// - [`CrosstermTerminal`] for a real terminal.
/// - [`TerminalMock`] for tests, which replays a scripted list of inputs.
///
/// Rows and columns are 0 based, the same as `crossterm`.
///
/// [`LineEditor`]: crate::LineEditor
/// [`CrosstermTerminal`]: crate::CrosstermTerminal
/// [`TerminalMock`]: crate::test_fixtures::TerminalMock
pub trait TerminalPort {
    /// Block until the next key press. `intercept` set to `true` means the key must not
    /// be echoed to the display.
    ///
    /// Returns `Ok(None)` when the input stream has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_key_event(&mut self, intercept: bool) -> Result<Option<KeyEvent>, TerminalError>;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn write(&mut self, text: &str) -> Result<(), TerminalError>;

    /// Write `text` followed by a line break.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn write_line(&mut self, text: &str) -> Result<(), TerminalError>;

    /// Row the hardware cursor is currently on.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be queried.
    fn cursor_row(&mut self) -> Result<u16, TerminalError>;

    /// Number of columns per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be queried.
    fn buffer_width(&mut self) -> Result<u16, TerminalError>;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn set_cursor_position(&mut self, col: u16, row: u16) -> Result<(), TerminalError>;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn set_foreground_color(&mut self, color: Color) -> Result<(), TerminalError>;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn reset_color(&mut self) -> Result<(), TerminalError>;

    /// Push any queued output to the display.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the terminal fails.
    fn flush(&mut self) -> Result<(), TerminalError> { Ok(()) }
}
