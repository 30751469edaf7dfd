// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod history;
pub mod key_binding;
pub mod line_editor;
pub mod line_state;
pub mod terminal_geometry;

// Re-export.
pub use history::*;
pub use key_binding::*;
pub use line_editor::*;
pub use line_state::*;
pub use terminal_geometry::*;
