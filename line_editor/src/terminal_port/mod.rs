// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_terminal;
pub mod key_event;
pub mod terminal_error;
pub mod terminal_port_api;

// Re-export.
pub use crossterm_terminal::*;
pub use key_event::*;
pub use terminal_error::*;
pub use terminal_port_api::*;
