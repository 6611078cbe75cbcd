// src/models/stats_report.rs
use serde::Serialize;

use crate::models::LineRecord;

/// Aggregate line statistics for one file.
///
/// Built only through [`LineTally::finish`], so
/// `total_lines == blank_lines + non_blank_lines` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    total_lines: usize,
    blank_lines: usize,
    non_blank_lines: usize,
    blank_percentage: f64,
    max_line_length: usize,
    char_count: usize,
    byte_count: usize,
}

impl StatsReport {
    #[inline]
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    #[inline]
    #[must_use]
    pub const fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    #[inline]
    #[must_use]
    pub const fn non_blank_lines(&self) -> usize {
        self.non_blank_lines
    }

    /// Blank lines as a share of all lines, in the range `0.0..=100.0`.
    #[inline]
    #[must_use]
    pub const fn blank_percentage(&self) -> f64 {
        self.blank_percentage
    }

    /// Longest line, in characters.
    #[inline]
    #[must_use]
    pub const fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    #[inline]
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    #[inline]
    #[must_use]
    pub const fn byte_count(&self) -> usize {
        self.byte_count
    }

    /// The percentage as shown in the text report, e.g. `25.0%`.
    #[inline]
    #[must_use]
    pub fn formatted_percentage(&self) -> String {
        format!("{:.1}%", self.blank_percentage)
    }
}

/// Running counts over a sequence of lines.
#[derive(Debug, Default)]
pub struct LineTally {
    total_lines: usize,
    blank_lines: usize,
    non_blank_lines: usize,
    max_line_length: usize,
    char_count: usize,
    byte_count: usize,
}

impl LineTally {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_lines: 0,
            blank_lines: 0,
            non_blank_lines: 0,
            max_line_length: 0,
            char_count: 0,
            byte_count: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, line: &LineRecord<'_>) {
        self.total_lines = self.total_lines.saturating_add(1);
        if line.is_blank() {
            self.blank_lines = self.blank_lines.saturating_add(1);
        } else {
            self.non_blank_lines = self.non_blank_lines.saturating_add(1);
        }
        self.max_line_length = self.max_line_length.max(line.char_len);
        self.char_count = self.char_count.saturating_add(line.char_len);
        self.byte_count = self.byte_count.saturating_add(line.byte_len);
    }

    #[inline]
    #[must_use]
    pub const fn lines_seen(&self) -> usize {
        self.total_lines
    }

    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn finish(self) -> StatsReport {
        let blank_percentage = if self.total_lines == 0 {
            0.0
        } else {
            (self.blank_lines as f64 / self.total_lines as f64) * 100.0
        };
        StatsReport {
            total_lines: self.total_lines,
            blank_lines: self.blank_lines,
            non_blank_lines: self.non_blank_lines,
            blank_percentage,
            max_line_length: self.max_line_length,
            char_count: self.char_count,
            byte_count: self.byte_count,
        }
    }
}
