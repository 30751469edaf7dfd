// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// What [`crate::LineEditor::read_line()`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// The user pressed <kbd>Enter</kbd>. This is the committed text, without the
    /// prompt and without a trailing newline.
    Line(String),
    /// The input stream ended before a line was committed. Any partially typed text was
    /// thrown away.
    Eof,
}

impl ReadlineEvent {
    /// The committed text, or `None` for [`ReadlineEvent::Eof`].
    #[must_use]
    pub fn into_line(self) -> Option<String> {
        match self {
            ReadlineEvent::Line(line) => Some(line),
            ReadlineEvent::Eof => None,
        }
    }
}
