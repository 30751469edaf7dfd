// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::StdoutMock;
use crate::{KeyEvent, TerminalError, TerminalPort};
use crossterm::{event::KeyCode, style::Color};
use std::{collections::VecDeque, io::{self, Write}};

/// One scripted step that [`TerminalMock::read_key_event()`] replays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockInput {
    /// Deliver this key press.
    Key(KeyEvent),
    /// Change the buffer width, then move on to the next step.
    Resize(u16),
    /// Fail the read with an I/O error of this kind.
    Fail(io::ErrorKind),
}

impl From<KeyEvent> for MockInput {
    fn from(key_event: KeyEvent) -> Self { MockInput::Key(key_event) }
}

impl From<KeyCode> for MockInput {
    fn from(code: KeyCode) -> Self { MockInput::Key(code.into()) }
}

impl From<char> for MockInput {
    fn from(character: char) -> Self { MockInput::Key(character.into()) }
}

/// Every call made on the port, in order. Reads are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOp {
    Write(String),
    WriteLine(String),
    SetCursorPosition { col: u16, row: u16 },
    SetForegroundColor(Color),
    ResetColor,
    Flush,
}

/// Scripted [`TerminalPort`] for tests.
///
/// - Input comes from `inputs`. Once it is drained, the input stream has ended.
/// - Text that is written lands in `stdout_mock`, and every call lands in `ops`.
/// - `cursor` is a simulated `(col, row)` that advances as text is written and wraps at
///   `width`, so that [`TerminalPort::cursor_row()`] answers like a real terminal.
/// - Set `write_error` to make every output operation fail.
#[derive(Debug, Clone)]
pub struct TerminalMock {
    pub inputs: VecDeque<MockInput>,
    pub stdout_mock: StdoutMock,
    pub ops: Vec<TerminalOp>,
    pub width: u16,
    pub cursor: (u16, u16),
    pub write_error: Option<io::ErrorKind>,
    pub intercept_flags: Vec<bool>,
}

impl TerminalMock {
    #[must_use]
    pub fn new(width: u16, inputs: impl IntoIterator<Item = MockInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            stdout_mock: StdoutMock::default(),
            ops: vec![],
            width,
            cursor: (0, 0),
            write_error: None,
            intercept_flags: vec![],
        }
    }

    /// No scripted input, the input stream has already ended.
    #[must_use]
    pub fn with_width(width: u16) -> Self { Self::new(width, VecDeque::<MockInput>::new()) }

    /// Script typing `text` one character at a time, followed by the `trailing` inputs.
    #[must_use]
    pub fn typing(width: u16, text: &str, trailing: impl IntoIterator<Item = MockInput>) -> Self {
        let inputs = text.chars().map(MockInput::from).chain(trailing);
        Self::new(width, inputs)
    }

    /// Start with the hardware cursor on `row`.
    #[must_use]
    pub fn with_cursor_row(mut self, row: u16) -> Self {
        self.cursor = (0, row);
        self
    }

    /// Append more scripted input.
    pub fn push_inputs(&mut self, inputs: impl IntoIterator<Item = MockInput>) {
        self.inputs.extend(inputs);
    }

    /// All text written so far.
    #[must_use]
    pub fn output(&self) -> String { self.stdout_mock.get_copy_of_buffer_as_string() }

    /// Every `set_cursor_position` call, in order.
    #[must_use]
    pub fn cursor_moves(&self) -> Vec<(u16, u16)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                TerminalOp::SetCursorPosition { col, row } => Some((*col, *row)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_cursor_move(&self) -> Option<(u16, u16)> { self.cursor_moves().last().copied() }

    /// Forget recorded output and calls, keep the script and the simulated cursor.
    pub fn clear_recording(&mut self) {
        self.stdout_mock.clear();
        self.ops.clear();
    }

    fn check_write_error(&self) -> Result<(), TerminalError> {
        match self.write_error {
            Some(kind) => Err(io::Error::from(kind).into()),
            None => Ok(()),
        }
    }

    fn advance_cursor(&mut self, text: &str) {
        let width = self.width.max(1);
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor = (0, self.cursor.1.saturating_add(1));
                continue;
            }
            let col = self.cursor.0.saturating_add(1);
            self.cursor = if col >= width {
                (0, self.cursor.1.saturating_add(1))
            } else {
                (col, self.cursor.1)
            };
        }
    }

    fn capture(&mut self, text: &str) -> Result<(), TerminalError> {
        self.stdout_mock.write_all(text.as_bytes())?;
        self.advance_cursor(text);
        Ok(())
    }
}

impl TerminalPort for TerminalMock {
    fn read_key_event(&mut self, intercept: bool) -> Result<Option<KeyEvent>, TerminalError> {
        self.intercept_flags.push(intercept);
        while let Some(input) = self.inputs.pop_front() {
            match input {
                MockInput::Key(key_event) => return Ok(Some(key_event)),
                MockInput::Resize(width) => self.width = width,
                MockInput::Fail(kind) => return Err(io::Error::from(kind).into()),
            }
        }
        Ok(None)
    }

    fn write(&mut self, text: &str) -> Result<(), TerminalError> {
        self.check_write_error()?;
        self.ops.push(TerminalOp::Write(text.to_string()));
        self.capture(text)
    }

    fn write_line(&mut self, text: &str) -> Result<(), TerminalError> {
        self.check_write_error()?;
        self.ops.push(TerminalOp::WriteLine(text.to_string()));
        self.capture(text)?;
        self.capture("\n")
    }

    fn cursor_row(&mut self) -> Result<u16, TerminalError> { Ok(self.cursor.1) }

    fn buffer_width(&mut self) -> Result<u16, TerminalError> { Ok(self.width) }

    fn set_cursor_position(&mut self, col: u16, row: u16) -> Result<(), TerminalError> {
        self.check_write_error()?;
        self.ops.push(TerminalOp::SetCursorPosition { col, row });
        self.cursor = (col, row);
        Ok(())
    }

    fn set_foreground_color(&mut self, color: Color) -> Result<(), TerminalError> {
        self.check_write_error()?;
        self.ops.push(TerminalOp::SetForegroundColor(color));
        Ok(())
    }

    fn reset_color(&mut self) -> Result<(), TerminalError> {
        self.check_write_error()?;
        self.ops.push(TerminalOp::ResetColor);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.ops.push(TerminalOp::Flush);
        Ok(())
    }
}
