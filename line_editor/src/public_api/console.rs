// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineEditor, LineEditorConfig, ReadlineEvent, TerminalError, TerminalPort};
use crossterm::style::Color;

/// A [`TerminalPort`] and a [`LineEditor`] bundled together, for programs that want to
/// prompt for lines and print results without juggling both.
#[derive(Debug)]
pub struct Console<T: TerminalPort> {
    pub terminal: T,
    pub line_editor: LineEditor,
}

impl<T: TerminalPort> Console<T> {
    #[must_use]
    pub fn new(terminal: T, config: LineEditorConfig) -> Self {
        Self {
            terminal,
            line_editor: LineEditor::new(config),
        }
    }

    /// See [`LineEditor::read_line()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadlineEvent, TerminalError> {
        self.line_editor.read_line(&mut self.terminal, prompt)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn write_line(&mut self, text: &str) -> Result<(), TerminalError> {
        self.terminal.write_line(text)?;
        self.terminal.flush()
    }

    /// Write `text` in red, then go back to the default colour.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn write_error(&mut self, text: &str) -> Result<(), TerminalError> {
        self.terminal.set_foreground_color(Color::Red)?;
        self.terminal.write_line(text)?;
        self.terminal.reset_color()?;
        self.terminal.flush()
    }

    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn set_foreground_color(&mut self, color: Color) -> Result<(), TerminalError> {
        self.terminal.set_foreground_color(color)
    }

    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn reset_color(&mut self) -> Result<(), TerminalError> { self.terminal.reset_color() }
}
