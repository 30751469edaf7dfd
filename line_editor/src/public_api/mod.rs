// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod config;
pub mod console;
pub mod readline_event;

// Re-export.
pub use config::*;
pub use console::*;
pub use readline_event::*;
