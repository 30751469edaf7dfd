// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineEditor;
use crate::{EditAction, KeyEvent, TerminalError, TerminalPort};

impl LineEditor {
    /// Look up `key_event` in the key bindings and run the action. Unbound printable
    /// characters are inserted at the cursor, everything else unbound is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if repainting fails.
    pub fn apply_key_event(
        &mut self,
        key_event: KeyEvent,
        term: &mut dyn TerminalPort,
    ) -> Result<(), TerminalError> {
        if let Some(action) = self.key_bindings.find(&key_event) {
            tracing::trace!(%action, ?key_event, "dispatch");
            return self.apply_action(action, term);
        }

        if key_event.is_printable() {
            tracing::trace!(character = ?key_event.character, "insert");
            self.line_state.insert_char(key_event.character);
            return self.repaint(term);
        }

        tracing::trace!(?key_event, "ignored");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if repainting fails.
    pub fn apply_action(
        &mut self,
        action: EditAction,
        term: &mut dyn TerminalPort,
    ) -> Result<(), TerminalError> {
        match action {
            EditAction::Escape => handle_escape(self, term),
            EditAction::Home => handle_home(self, term),
            EditAction::End => handle_end(self, term),
            EditAction::MoveLeft => handle_left(self, term),
            EditAction::MoveRight => handle_right(self, term),
            EditAction::HistoryPrevious => handle_up(self, term),
            EditAction::HistoryNext => handle_down(self, term),
            EditAction::Backspace => handle_backspace(self, term),
            EditAction::Delete => handle_delete(self, term),
            EditAction::Enter => {
                self.line_state.is_finished = true;
                Ok(())
            }
            EditAction::Tab => handle_tab(self, term),
        }
    }
}

fn handle_escape(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    editor.line_state.clear();
    editor.repaint(term)
}

fn handle_home(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    editor.line_state.move_to_start();
    editor.place_cursor(term)
}

fn handle_end(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    editor.line_state.move_to_end();
    editor.place_cursor(term)
}

fn handle_left(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    if editor.line_state.move_left() {
        editor.place_cursor(term)?;
    }
    Ok(())
}

fn handle_right(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    if editor.line_state.move_right() {
        editor.place_cursor(term)?;
    }
    Ok(())
}

// Wholesale replace, the text typed before browsing is not kept.
fn handle_up(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    if let Some(entry) = editor.history.previous() {
        editor.line_state.replace(entry);
        editor.repaint(term)?;
    }
    Ok(())
}

fn handle_down(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    if let Some(entry) = editor.history.next() {
        editor.line_state.replace(entry);
        editor.repaint(term)?;
    }
    Ok(())
}

fn handle_backspace(
    editor: &mut LineEditor,
    term: &mut dyn TerminalPort,
) -> Result<(), TerminalError> {
    if editor.line_state.backspace() {
        editor.repaint(term)?;
    }
    Ok(())
}

fn handle_delete(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    if editor.line_state.delete() {
        editor.repaint(term)?;
    }
    Ok(())
}

fn handle_tab(editor: &mut LineEditor, term: &mut dyn TerminalPort) -> Result<(), TerminalError> {
    let spaces = " ".repeat(editor.config.tab_width);
    editor.line_state.insert_str(&spaces);
    editor.repaint(term)
}
