// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::HISTORY_SIZE_MAX;
use std::collections::VecDeque;

/// Bounded list of committed lines, oldest first, with a browse cursor.
///
/// The browse cursor (`current_position`) is `None` when the user isn't browsing,
/// otherwise it is a valid index into `entries`. Every method leaves it in one of those
/// two states.
///
/// # Browsing
///
/// [`Self::previous()`] walks from the newest entry towards the oldest, and stops (returns
/// `None`) once it is on the oldest. [`Self::next()`] walks back towards the newest, and
/// once it steps past the newest it stops browsing and returns `None`.
///
/// The line the user was typing before the first <kbd>Up</kbd> press is not saved. After
/// browsing back past the newest entry, the editor keeps whatever entry was substituted
/// last, the partially typed text is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    max_size: usize,
    current_position: Option<usize>,
}

impl Default for History {
    fn default() -> Self { Self::new(HISTORY_SIZE_MAX) }
}

impl History {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size,
            current_position: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn max_size(&self) -> usize { self.max_size }

    /// `None` when not browsing.
    #[must_use]
    pub fn browse_position(&self) -> Option<usize> { self.current_position }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.entries.iter().map(String::as_str) }

    fn last(&self) -> Option<&str> { self.entries.back().map(String::as_str) }

    /// Append `text`, unless it is the same as the newest entry. Duplicates further back
    /// are still added.
    ///
    /// A new distinct commit ends any browsing session. When capacity is exceeded the
    /// oldest entry is evicted, and the browse cursor shifts down to keep pointing at the
    /// same entry.
    pub fn add(&mut self, text: &str) {
        if self.last() != Some(text) {
            self.entries.push_back(text.to_string());
        }

        if let Some(index) = self.current_position
            && self.entries.get(index).map(String::as_str) != Some(text)
        {
            self.current_position = None;
        }

        if self.entries.len() > self.max_size {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(%evicted, max_size = self.max_size, "history entry evicted");
            }
            if let Some(index) = self.current_position
                && index > 0
            {
                self.current_position = Some(index - 1);
            }
        }
    }

    /// Step towards older entries. Returns `None` without moving if there's nothing
    /// older.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.current_position == Some(0) {
            return None;
        }
        // Not browsing yet: start one past the newest entry.
        let start = self.current_position.unwrap_or(self.entries.len());
        let index = start - 1;
        self.current_position = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step towards newer entries. Stepping past the newest entry stops browsing.
    pub fn next(&mut self) -> Option<&str> {
        match self.current_position {
            Some(index) if index + 1 < self.entries.len() => {
                self.current_position = Some(index + 1);
                self.entries.get(index + 1).map(String::as_str)
            }
            _ => {
                self.current_position = None;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_position = None;
    }

    /// Change the capacity. Surplus entries are evicted oldest first, and browsing stops.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        if self.entries.len() > max_size {
            let surplus = self.entries.len() - max_size;
            self.entries.drain(..surplus);
            self.current_position = None;
        }
    }
}
