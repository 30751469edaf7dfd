// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TerminalError, TerminalPort};

/// A `(col, row)` spot on the terminal, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermPosition {
    pub col: u16,
    pub row: u16,
}

/// Row and column bookkeeping for a line that wraps across terminal rows.
///
/// The prompt is painted at column 0 of `first_row`, and the buffer follows it. Since the
/// terminal wraps at `buffer_width` columns, an offset `n` into the painted text lands on
/// row `first_row + n / buffer_width` and column `n % buffer_width`.
///
/// `max_printed_length` is the widest paint so far in the session. When the line gets
/// shorter, the repaint pads with spaces up to it so no stale glyphs are left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub first_row: u16,
    buffer_width: u16,
    pub max_printed_length: usize,
}

impl TerminalGeometry {
    /// # Errors
    ///
    /// Returns [`TerminalError::ZeroWidth`] if `buffer_width` is 0.
    pub fn new(first_row: u16, buffer_width: u16) -> Result<Self, TerminalError> {
        if buffer_width == 0 {
            return Err(TerminalError::ZeroWidth);
        }
        Ok(Self {
            first_row,
            buffer_width,
            max_printed_length: 0,
        })
    }

    /// Snapshot the current row and width of `term` at the start of a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the port can't report its cursor row or width, or reports a
    /// width of 0.
    pub fn capture(term: &mut dyn TerminalPort) -> Result<Self, TerminalError> {
        let buffer_width = term.buffer_width()?;
        let first_row = term.cursor_row()?;
        Self::new(first_row, buffer_width)
    }

    #[must_use]
    pub fn buffer_width(&self) -> u16 { self.buffer_width }

    /// Where the hardware cursor goes for `cursor` characters into a buffer that follows
    /// a prompt of `prompt_len` characters. Rows past [`u16::MAX`] saturate.
    #[must_use]
    pub fn cursor_position(&self, cursor: usize, prompt_len: usize) -> TermPosition {
        let offset = cursor.saturating_add(prompt_len);
        let width = usize::from(self.buffer_width);
        let row = usize::from(self.first_row).saturating_add(offset / width);
        TermPosition {
            col: u16::try_from(offset % width).unwrap_or(u16::MAX),
            row: u16::try_from(row).unwrap_or(u16::MAX),
        }
    }

    /// Record a paint covering `printed_len` columns. Returns how many spaces of padding
    /// are needed to erase what the previous, longer paints left behind.
    pub fn record_paint(&mut self, printed_len: usize) -> usize {
        let padding = self.max_printed_length.saturating_sub(printed_len);
        self.max_printed_length = self.max_printed_length.max(printed_len);
        padding
    }

    /// Re-read the width of `term`. If it changed, work out where the line now starts.
    ///
    /// This is best effort: the terminal has already re-wrapped the text, so `first_row`
    /// is estimated from the current hardware row as `cursor_row - cursor_offset / width`,
    /// where `cursor_offset` is the cursor plus the prompt length. Returns `true` if the
    /// width changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the port fails, or reports a width of 0.
    pub fn refresh(
        &mut self,
        term: &mut dyn TerminalPort,
        cursor_offset: usize,
    ) -> Result<bool, TerminalError> {
        let buffer_width = term.buffer_width()?;
        if buffer_width == self.buffer_width {
            return Ok(false);
        }
        if buffer_width == 0 {
            return Err(TerminalError::ZeroWidth);
        }

        let cursor_row = term.cursor_row()?;
        let rows_above = cursor_offset / usize::from(buffer_width);
        let first_row =
            cursor_row.saturating_sub(u16::try_from(rows_above).unwrap_or(u16::MAX));

        tracing::debug!(
            old_width = self.buffer_width,
            new_width = buffer_width,
            old_first_row = self.first_row,
            new_first_row = first_row,
            "terminal resized"
        );

        self.buffer_width = buffer_width;
        self.first_row = first_row;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{MockInput, TerminalMock};
    use test_case::test_case;

    #[test_case(2, 10, 3, 23 => (5, 5) ; "wraps twice")]
    #[test_case(2, 10, 3, 0 => (2, 3) ; "start of buffer")]
    #[test_case(2, 10, 3, 8 => (0, 4) ; "exactly at the wrap")]
    #[test_case(0, 1, 0, 5 => (0, 5) ; "one column wide")]
    #[test_case(4, 80, 0, 10 => (14, 0) ; "no wrap")]
    fn test_cursor_position(prompt_len: usize, width: u16, first_row: u16, cursor: usize) -> (u16, u16) {
        let geometry = TerminalGeometry::new(first_row, width).unwrap();
        let TermPosition { col, row } = geometry.cursor_position(cursor, prompt_len);
        (col, row)
    }

    #[test]
    fn test_row_saturates() {
        let geometry = TerminalGeometry::new(u16::MAX - 1, 1).unwrap();
        assert_eq!(geometry.cursor_position(10, 0).row, u16::MAX);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(TerminalGeometry::new(0, 0), Err(TerminalError::ZeroWidth)));
        let mut term = TerminalMock::with_width(0);
        assert!(matches!(TerminalGeometry::capture(&mut term), Err(TerminalError::ZeroWidth)));
    }

    #[test]
    fn test_record_paint_pads_shorter_lines() {
        let mut geometry = TerminalGeometry::new(0, 80).unwrap();
        assert_eq!(geometry.record_paint(20), 0);
        assert_eq!(geometry.record_paint(5), 15);
        assert_eq!(geometry.max_printed_length, 20);
        assert_eq!(geometry.record_paint(25), 0);
        assert_eq!(geometry.max_printed_length, 25);
    }

    #[test]
    fn test_capture_reads_row_and_width() {
        let mut term = TerminalMock::with_width(42).with_cursor_row(7);
        let geometry = TerminalGeometry::capture(&mut term).unwrap();
        assert_eq!(geometry.first_row, 7);
        assert_eq!(geometry.buffer_width(), 42);
        assert_eq!(geometry.max_printed_length, 0);
    }

    #[test]
    fn test_refresh_recomputes_first_row() {
        let mut term = TerminalMock::new(20, [MockInput::Resize(10)]).with_cursor_row(6);
        let mut geometry = TerminalGeometry::new(5, 20).unwrap();

        // Same width, nothing to do.
        assert!(!geometry.refresh(&mut term, 25).unwrap());
        assert_eq!(geometry.first_row, 5);

        _ = term.read_key_event(true).unwrap();
        assert!(geometry.refresh(&mut term, 25).unwrap());
        assert_eq!(geometry.buffer_width(), 10);
        assert_eq!(geometry.first_row, 4);
    }

    #[test]
    fn test_refresh_to_zero_width_fails() {
        let mut term = TerminalMock::with_width(0);
        let mut geometry = TerminalGeometry::new(0, 80).unwrap();
        assert!(matches!(geometry.refresh(&mut term, 0), Err(TerminalError::ZeroWidth)));
        assert_eq!(geometry.buffer_width(), 80);
    }
}
