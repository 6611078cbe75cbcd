// src/models/line_record.rs

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty, or whitespace only
    Blank,
    NonBlank,
}

/// One logical line of input, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub content: &'a str,
    pub byte_len: usize,
    /// Length in Unicode scalar values, so `你` and `🎉` count as one each
    pub char_len: usize,
    pub kind: LineKind,
}

impl<'a> LineRecord<'a> {
    #[inline]
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        let kind = if content.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::NonBlank
        };
        Self {
            content,
            byte_len: content.len(),
            char_len: content.chars().count(),
            kind,
        }
    }

    /// Builds a record from a raw line that may still end in `\n` or `\r\n`.
    #[inline]
    #[must_use]
    pub fn from_terminated(raw: &'a str) -> Self {
        let content = raw
            .strip_suffix('\n')
            .map_or(raw, |line| line.strip_suffix('\r').unwrap_or(line));
        Self::new(content)
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}
