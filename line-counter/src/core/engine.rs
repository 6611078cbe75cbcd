// src/core/engine.rs
use crate::error::LineCounterError;
use crate::models::{LineRecord, LineTally, StatsReport};
use std::io::BufRead;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Computes line statistics for already-decoded text.
///
/// Lines end at `\n` (a preceding `\r` is dropped too). A trailing terminator
/// does not start another line, empty input has zero lines, and a final line
/// without a terminator is still counted.
#[must_use]
pub fn analyze(content: &str) -> StatsReport {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut tally = LineTally::new();
    for raw in content.split_inclusive('\n') {
        tally.record(&LineRecord::from_terminated(raw));
    }
    tally.finish()
}

/// Streams `reader` one line at a time and computes the same statistics as
/// [`analyze`]. Only the current line is kept in memory.
///
/// # Errors
///
/// This function may return an error if:
/// * Reading from the underlying source fails (`LineCounterError::Read`)
/// * A line is not valid UTF-8 (`LineCounterError::Decode`)
pub fn analyze_reader<R: BufRead>(mut reader: R) -> Result<StatsReport, LineCounterError> {
    let mut tally = LineTally::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let line = tally.lines_seen().saturating_add(1);
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| LineCounterError::Read { line, source })?;
        if read == 0 {
            break;
        }

        let text = std::str::from_utf8(&buf)
            .map_err(|source| LineCounterError::Decode { line, source })?;
        let text = if line == 1 {
            text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
        } else {
            text
        };
        // A bare BOM with nothing after it is an empty file
        if text.is_empty() {
            break;
        }
        tally.record(&LineRecord::from_terminated(text));
    }

    let report = tally.finish();
    debug!(
        total = report.total_lines(),
        blank = report.blank_lines(),
        "finished line analysis"
    );
    Ok(report)
}
