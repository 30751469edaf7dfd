// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors surfaced by a [`TerminalPort`] and propagated out of
/// [`LineEditor::read_line()`].
///
/// Boundary clamps, unmatched keys, and history exhaustion are never errors. Only
/// failures of the underlying terminal transport end up here.
///
/// [`TerminalPort`]: crate::TerminalPort
/// [`LineEditor::read_line()`]: crate::LineEditor::read_line
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TerminalError {
    /// Reading a key event or writing output failed.
    #[error("terminal I/O failed")]
    #[diagnostic(
        code(r3bl_line_editor::terminal::io),
        help("Check that stdin and stdout are attached to an interactive terminal")
    )]
    Io(#[from] std::io::Error),

    /// The terminal reported a buffer width of zero columns, so the wrapped line
    /// geometry can't be computed.
    #[error("terminal reported a buffer width of 0 columns")]
    #[diagnostic(code(r3bl_line_editor::terminal::zero_width))]
    ZeroWidth,
}
