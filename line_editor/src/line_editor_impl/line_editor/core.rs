// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{History, KeyBindingTable, LineEditorConfig, LineState, ReadlineEvent,
            TerminalError, TerminalGeometry, TerminalPort};

/// Reads one line at a time from a [`TerminalPort`], and keeps the [`History`] of lines
/// committed across calls.
///
/// One [`LineEditor`] serves any number of [`Self::read_line()`] calls. The line state
/// and geometry are reset on every call, the history and key bindings are not.
#[derive(Debug)]
pub struct LineEditor {
    pub line_state: LineState,
    pub geometry: Option<TerminalGeometry>,
    pub history: History,
    pub key_bindings: KeyBindingTable,
    pub config: LineEditorConfig,
}

impl Default for LineEditor {
    fn default() -> Self { Self::new(LineEditorConfig::default()) }
}

impl LineEditor {
    #[must_use]
    pub fn new(config: LineEditorConfig) -> Self {
        Self::with_key_bindings(config, KeyBindingTable::new())
    }

    #[must_use]
    pub fn with_key_bindings(config: LineEditorConfig, key_bindings: KeyBindingTable) -> Self {
        Self {
            line_state: LineState::default(),
            geometry: None,
            history: History::new(config.history_max_size),
            key_bindings,
            config,
        }
    }

    /// Change the history capacity. The oldest surplus entries are dropped.
    pub fn set_max_history(&mut self, max_size: usize) {
        self.config.history_max_size = max_size;
        self.history.set_max_size(max_size);
    }

    /// Paint `prompt` and block until the user commits a line with <kbd>Enter</kbd>, or
    /// the input ends.
    ///
    /// The committed line is added to [`Self::history`]. On
    /// [`ReadlineEvent::Eof`] the partially typed line is dropped, and a newline is
    /// still written so that whatever gets printed next starts on a fresh row.
    ///
    /// # Errors
    ///
    /// Returns an error if the port fails to read or write, or reports a width of 0.
    /// Nothing is added to history in that case.
    pub fn read_line(
        &mut self,
        term: &mut dyn TerminalPort,
        prompt: &str,
    ) -> Result<ReadlineEvent, TerminalError> {
        self.read_line_impl(term, prompt).inspect_err(|error| {
            tracing::warn!(%error, "terminal failed, abandoning the line");
        })
    }

    fn read_line_impl(
        &mut self,
        term: &mut dyn TerminalPort,
        prompt: &str,
    ) -> Result<ReadlineEvent, TerminalError> {
        self.start_session(term, prompt)?;

        while !self.line_state.is_finished {
            let Some(key_event) = term.read_key_event(true)? else {
                return self.end_of_input(term);
            };
            self.refresh_geometry(term)?;
            self.apply_key_event(key_event, term)?;
            term.flush()?;
        }

        self.commit(term)
    }

    fn start_session(
        &mut self,
        term: &mut dyn TerminalPort,
        prompt: &str,
    ) -> Result<(), TerminalError> {
        self.line_state.reset(prompt);
        self.geometry = Some(TerminalGeometry::capture(term)?);
        self.repaint(term)?;
        term.flush()
    }

    fn refresh_geometry(&mut self, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
        let cursor_offset = self.line_state.cursor() + self.line_state.prompt_len();
        let resized = match self.geometry.as_mut() {
            Some(geometry) => geometry.refresh(term, cursor_offset)?,
            None => false,
        };
        if resized {
            self.place_cursor(term)?;
        }
        Ok(())
    }

    fn commit(&mut self, term: &mut dyn TerminalPort) -> Result<ReadlineEvent, TerminalError> {
        // The newline goes after the last painted row, not wherever the cursor was.
        self.line_state.move_to_end();
        self.place_cursor(term)?;
        term.write_line("")?;
        term.flush()?;

        let line = self.line_state.text();
        if !line.is_empty() || self.config.add_empty_lines_to_history {
            self.history.add(&line);
        }
        tracing::debug!(len = line.chars().count(), history_len = self.history.len(), "line committed");

        Ok(ReadlineEvent::Line(line))
    }

    fn end_of_input(
        &mut self,
        term: &mut dyn TerminalPort,
    ) -> Result<ReadlineEvent, TerminalError> {
        tracing::debug!(discarded_len = self.line_state.len(), "end of input");
        self.line_state.clear();
        term.write_line("")?;
        term.flush()?;
        Ok(ReadlineEvent::Eof)
    }
}
