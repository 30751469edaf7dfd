// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures to test the line editor "end to end" without a real terminal.
//! 1. [`TerminalMock`] replays scripted key presses, resizes, and failures.
//! 2. [`StdoutMock`] captures everything that gets painted.

// Attach.
pub mod stdout_mock;
pub mod terminal_mock;

// Re-export.
pub use stdout_mock::*;
pub use terminal_mock::*;
