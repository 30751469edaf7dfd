// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The in progress line: the prompt, the characters typed so far, and the cursor.
///
/// This is pure data, nothing here talks to the terminal. Every method keeps
/// `0 <= cursor <= len()` by clamping, out of range requests are never errors.
///
/// Lengths and offsets are counted in [`char`]s, and a `char` is assumed to take one
/// terminal column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineState {
    buffer: Vec<char>,
    cursor: usize,
    prompt: String,
    prompt_len: usize,
    /// Set by <kbd>Enter</kbd>, the read loop stops once it sees this.
    pub is_finished: bool,
}

impl LineState {
    #[must_use]
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            prompt_len: prompt.chars().count(),
            ..Self::default()
        }
    }

    /// Start a new line with `prompt`, discarding whatever was there.
    pub fn reset(&mut self, prompt: &str) { *self = Self::new(prompt); }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn prompt_len(&self) -> usize { self.prompt_len }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Columns that a paint of the prompt followed by the buffer covers.
    #[must_use]
    pub fn printed_len(&self) -> usize { self.prompt_len + self.buffer.len() }

    #[must_use]
    pub fn text(&self) -> String { self.buffer.iter().collect() }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ { self.buffer.iter().copied() }

    /// Index of the first character that isn't whitespace. `None` for a blank line.
    #[must_use]
    pub fn index_of_first_non_whitespace(&self) -> Option<usize> {
        self.buffer.iter().position(|ch| !ch.is_whitespace())
    }

    /// Move the cursor to `pos`, clamped to `[0, len]`.
    pub fn set_cursor(&mut self, pos: usize) { self.cursor = pos.min(self.buffer.len()); }

    pub fn move_to_start(&mut self) { self.cursor = 0; }

    pub fn move_to_end(&mut self) { self.cursor = self.buffer.len(); }

    /// Returns `false` if already at the start.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns `false` if already at the end.
    pub fn move_right(&mut self) -> bool {
        if self.cursor == self.buffer.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Insert at the cursor, and advance past it.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert at the cursor, and advance past the inserted text.
    pub fn insert_str(&mut self, text: &str) {
        let before = self.buffer.len();
        self.buffer.splice(self.cursor..self.cursor, text.chars());
        self.cursor += self.buffer.len() - before;
    }

    /// Remove the character before the cursor. Returns `false` at the start of the line.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        true
    }

    /// Remove the character under the cursor. Returns `false` at the end of the line.
    pub fn delete(&mut self) -> bool {
        if self.cursor == self.buffer.len() {
            return false;
        }
        self.buffer.remove(self.cursor);
        true
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Swap in `text` wholesale, cursor goes to the end.
    pub fn replace(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.cursor = self.buffer.len();
    }
}
