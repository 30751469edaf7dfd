// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KeyEvent, TerminalError, TerminalPort};
use crossterm::{QueueableCommand, cursor,
                event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
                style::{self, Color, Print},
                terminal};
use std::io::{self, Stdout, Write};

/// [`TerminalPort`] backed by `crossterm` and the process' stdout.
///
/// Creating one puts the terminal in raw mode, dropping it restores cooked mode. There's
/// no `close()` function, you simply drop it.
///
/// Output is queued and only reaches the display on [`TerminalPort::flush()`]. Since the
/// editor has no binding for cancellation, <kbd>Ctrl+C</kbd> and <kbd>Ctrl+D</kbd> are
/// reported as end of input, which makes [`LineEditor::read_line()`] return
/// [`ReadlineEvent::Eof`].
///
/// [`LineEditor::read_line()`]: crate::LineEditor::read_line
/// [`ReadlineEvent::Eof`]: crate::ReadlineEvent::Eof
#[derive(Debug)]
pub struct CrosstermTerminal {
    stdout: Stdout,
}

impl CrosstermTerminal {
    /// Enable raw mode and line wrap. [`Drop`] disables raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled, eg: when stdin isn't a TTY.
    pub fn try_new() -> Result<Self, TerminalError> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.queue(terminal::EnableLineWrap)?;
        stdout.flush()?;
        Ok(Self { stdout })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        _ = self.stdout.queue(style::ResetColor);
        _ = self.stdout.flush();
        _ = terminal::disable_raw_mode();
    }
}

/// <kbd>Ctrl+C</kbd> and <kbd>Ctrl+D</kbd> end the input stream.
fn is_end_of_input(key_event: &event::KeyEvent) -> bool {
    key_event.modifiers == KeyModifiers::CONTROL
        && matches!(key_event.code, KeyCode::Char('c' | 'd'))
}

impl TerminalPort for CrosstermTerminal {
    fn read_key_event(&mut self, intercept: bool) -> Result<Option<KeyEvent>, TerminalError> {
        loop {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if is_end_of_input(&key_event) {
                        tracing::debug!(code = ?key_event.code, "end of input requested");
                        return Ok(None);
                    }
                    let key_event = KeyEvent::from(key_event);
                    if !intercept && key_event.is_printable() {
                        self.write(key_event.character.encode_utf8(&mut [0; 4]))?;
                        self.flush()?;
                    }
                    return Ok(Some(key_event));
                }
                // Resize is picked up via `buffer_width()` after the next key press.
                _ => {}
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<(), TerminalError> {
        self.stdout.queue(Print(text))?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), TerminalError> {
        // Raw mode: a bare line feed doesn't return the carriage.
        self.stdout.queue(Print(text))?.queue(Print("\r\n"))?;
        Ok(())
    }

    fn cursor_row(&mut self) -> Result<u16, TerminalError> {
        self.stdout.flush()?;
        let (_col, row) = cursor::position()?;
        Ok(row)
    }

    fn buffer_width(&mut self) -> Result<u16, TerminalError> {
        let (cols, _rows) = terminal::size()?;
        Ok(cols)
    }

    fn set_cursor_position(&mut self, col: u16, row: u16) -> Result<(), TerminalError> {
        self.stdout.queue(cursor::MoveTo(col, row))?;
        Ok(())
    }

    fn set_foreground_color(&mut self, color: Color) -> Result<(), TerminalError> {
        self.stdout.queue(style::SetForegroundColor(color))?;
        Ok(())
    }

    fn reset_color(&mut self) -> Result<(), TerminalError> {
        self.stdout.queue(style::ResetColor)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.stdout.flush()?;
        Ok(())
    }
}
