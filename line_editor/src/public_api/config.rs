// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HISTORY_SIZE_MAX, TAB_WIDTH};

/// Knobs for a [`crate::LineEditor`].
///
/// ```
/// use r3bl_line_editor::LineEditorConfig;
///
/// let config = LineEditorConfig::default()
///     .history_max_size(100)
///     .tab_width(2)
///     .add_empty_lines_to_history(false);
/// assert_eq!(config.tab_width, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEditorConfig {
    /// Oldest entries are evicted past this many.
    pub history_max_size: usize,
    /// Spaces inserted by <kbd>Tab</kbd>.
    pub tab_width: usize,
    pub add_empty_lines_to_history: bool,
}

impl Default for LineEditorConfig {
    fn default() -> Self {
        Self {
            history_max_size: HISTORY_SIZE_MAX,
            tab_width: TAB_WIDTH,
            add_empty_lines_to_history: true,
        }
    }
}

impl LineEditorConfig {
    #[must_use]
    pub fn history_max_size(mut self, history_max_size: usize) -> Self {
        self.history_max_size = history_max_size;
        self
    }

    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn add_empty_lines_to_history(mut self, add_empty_lines_to_history: bool) -> Self {
        self.add_empty_lines_to_history = add_empty_lines_to_history;
        self
    }
}
