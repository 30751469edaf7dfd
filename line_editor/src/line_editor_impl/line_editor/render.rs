// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineEditor;
use crate::{TerminalError, TerminalPort};

impl LineEditor {
    /// Paint the prompt and the buffer from column 0 of the first row, pad with spaces
    /// over anything a longer earlier paint left behind, then put the hardware cursor
    /// back where the line cursor is.
    ///
    /// Does nothing until [`Self::read_line()`] has captured the terminal geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the port fails.
    pub fn repaint(&mut self, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
        let Some(geometry) = self.geometry.as_mut() else {
            return Ok(());
        };

        term.set_cursor_position(0, geometry.first_row)?;
        let padding = geometry.record_paint(self.line_state.printed_len());

        let mut output = String::with_capacity(self.line_state.printed_len() + padding);
        output.push_str(self.line_state.prompt());
        output.extend(self.line_state.chars());
        output.extend(std::iter::repeat_n(' ', padding));
        term.write(&output)?;

        self.place_cursor(term)
    }

    /// Move the hardware cursor to match the line cursor. Nothing gets repainted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the port fails.
    pub fn place_cursor(&self, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
        let Some(geometry) = self.geometry.as_ref() else {
            return Ok(());
        };
        let position =
            geometry.cursor_position(self.line_state.cursor(), self.line_state.prompt_len());
        term.set_cursor_position(position.col, position.row)
    }
}

#[cfg(test)]
mod tests {
    use crate::{LineEditor, TerminalGeometry, test_fixtures::TerminalMock};
    use pretty_assertions::assert_eq;

    fn editor_on(term: &mut TerminalMock, prompt: &str, text: &str) -> LineEditor {
        let mut editor = LineEditor::default();
        editor.line_state.reset(prompt);
        editor.line_state.insert_str(text);
        editor.geometry = Some(TerminalGeometry::capture(term).unwrap());
        editor
    }

    #[test]
    fn test_repaint_writes_prompt_and_buffer() {
        let mut term = TerminalMock::with_width(80).with_cursor_row(2);
        let mut editor = editor_on(&mut term, "> ", "hello");

        editor.repaint(&mut term).unwrap();

        assert_eq!(term.output(), "> hello");
        assert_eq!(term.cursor_moves(), vec![(0, 2), (7, 2)]);
    }

    #[test]
    fn test_repaint_erases_longer_previous_paint() {
        let mut term = TerminalMock::with_width(80);
        let mut editor = editor_on(&mut term, "", &"x".repeat(20));
        editor.repaint(&mut term).unwrap();

        editor.line_state.replace("short");
        term.clear_recording();
        editor.repaint(&mut term).unwrap();

        let output = term.output();
        assert_eq!(output, format!("short{}", " ".repeat(15)));
        assert!(output.ends_with(&" ".repeat(15)));
        assert_eq!(editor.geometry.unwrap().max_printed_length, 20);
    }

    #[test]
    fn test_place_cursor_on_wrapped_row() {
        let mut term = TerminalMock::with_width(10).with_cursor_row(3);
        let mut editor = editor_on(&mut term, "> ", &"y".repeat(23));
        editor.place_cursor(&mut term).unwrap();
        assert_eq!(term.last_cursor_move(), Some((5, 5)));
    }

    #[test]
    fn test_no_geometry_no_output() {
        let mut term = TerminalMock::with_width(80);
        let mut editor = LineEditor::default();
        editor.repaint(&mut term).unwrap();
        assert!(term.ops.is_empty());
    }
}
