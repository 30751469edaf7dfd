// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Enforce strict error handling in production code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! The `r3bl_line_editor` library reads one logical line of text from a character
//! oriented terminal. It is the piece that sits underneath any REPL or shell prompt.
//! The user gets in place cursor movement, insertion and deletion, a redraw that is
//! aware of lines wrapping across multiple terminal rows, and a bounded command history
//! that can be browsed with the up and down arrow keys.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Mental model](#mental-model)
//! - [Key bindings](#key-bindings)
//! - [Wrapped line geometry](#wrapped-line-geometry)
//! - [History](#history)
//! - [End of input and errors](#end-of-input-and-errors)
//! - [Logging](#logging)
//! - [Testing](#testing)
//! <!-- /TOC -->
//!
//! # Mental model
//!
//! There are three moving parts:
//!
//! 1. [`TerminalPort`] - the primitive read, write, and cursor operations of a terminal.
//!    [`CrosstermTerminal`] is the real implementation, and
//!    [`test_fixtures::TerminalMock`] is a scripted one for tests. You can bring your own
//!    via [dependency injection](https://developerlife.com/category/DI/).
//! 2. [`LineEditor`] - owns the in progress [`LineState`] (buffer, cursor, prompt), the
//!    [`TerminalGeometry`], the [`KeyBindingTable`], and the [`History`]. Calling
//!    [`LineEditor::read_line()`] blocks the calling thread until the user commits a line
//!    by pressing <kbd>Enter</kbd>.
//! 3. [`History`] - a bounded list of previously committed lines with its own browse
//!    cursor.
//!
//! [`Console`] bundles a port and an editor together, and adds coloured error output.
//!
//! ```no_run
//! use r3bl_line_editor::{Console, CrosstermTerminal, LineEditorConfig, ReadlineEvent};
//!
//! fn main() -> miette::Result<()> {
//!     let terminal = CrosstermTerminal::try_new()?;
//!     let mut console = Console::new(terminal, LineEditorConfig::default());
//!     loop {
//!         match console.read_line("> ")? {
//!             ReadlineEvent::Line(line) => console.write_line(&format!("got: {line}"))?,
//!             ReadlineEvent::Eof => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Key bindings
//!
//! | Key                        | Action                                              |
//! |----------------------------|-----------------------------------------------------|
//! | <kbd>Esc</kbd>             | Clear the whole line                                |
//! | <kbd>Home</kbd>            | Move to the start of the line                       |
//! | <kbd>End</kbd>             | Move to the end of the line                         |
//! | <kbd>Left</kbd>            | Move one character left                             |
//! | <kbd>Right</kbd>           | Move one character right                            |
//! | <kbd>Up</kbd>              | Replace the line with the previous history entry    |
//! | <kbd>Down</kbd>            | Replace the line with the next history entry        |
//! | <kbd>Backspace</kbd>       | Delete the character before the cursor              |
//! | <kbd>Delete</kbd>          | Delete the character under the cursor               |
//! | <kbd>Enter</kbd>           | Commit the line                                     |
//! | <kbd>Tab</kbd>             | Insert [`TAB_WIDTH`] spaces                         |
//! | any printable character    | Insert it at the cursor                             |
//!
//! Bindings match on the exact key code and modifier set. Anything that doesn't match
//! and isn't printable is ignored.
//!
//! # Wrapped line geometry
//!
//! The prompt and the buffer are painted starting at column 0 of the row where the
//! prompt began (`first_row`). For a cursor offset `c`, a prompt of length `p`, and a
//! terminal that is `w` columns wide, the hardware cursor goes to:
//!
//! ```text
//! row = first_row + (c + p) / w
//! col = (c + p) % w
//! ```
//!
//! When a line gets shorter, the repaint pads with spaces up to the widest extent ever
//! painted in this session so that no stale glyphs remain. See [`TerminalGeometry`].
//!
//! # History
//!
//! Committed lines go into [`History`] (capacity [`HISTORY_SIZE_MAX`] by default).
//! Adjacent duplicates are suppressed. The oldest entry is evicted when capacity is
//! exceeded.
//!
//! # End of input and errors
//!
//! When the [`TerminalPort`] runs out of input, [`LineEditor::read_line()`] returns
//! [`ReadlineEvent::Eof`]. Any partially typed text is discarded. If the port fails to
//! read or write, [`TerminalError`] is returned and nothing is committed to history.
//!
//! # Logging
//!
//! The library emits [`tracing`] events. Use [`TracingConfig`] to install a subscriber
//! that writes to stdout, stderr, a file, or a file and a display.
//!
//! # Testing
//!
//! [`test_fixtures::TerminalMock`] feeds scripted key presses, resizes, and I/O failures
//! into the editor and captures everything that gets painted in a
//! [`test_fixtures::StdoutMock`].

// Attach sources.
pub mod line_editor_impl;
pub mod log;
pub mod public_api;
pub mod terminal_port;
pub mod test_fixtures;

// Re-export the public API.
pub use line_editor_impl::*;
pub use log::*;
pub use public_api::*;
pub use terminal_port::*;

// Constants.
pub const HISTORY_SIZE_MAX: usize = 50;
pub const TAB_WIDTH: usize = 4;
