use std::ops::Range;

/// Byte range `[start, end)` of a source line in the rope.
///
/// Period nodes keep the span of the line that opened them, so warnings and
/// snapshot output can quote the original text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Well-formed and inside a text of `len` bytes.
    pub fn within(self, len: usize) -> bool {
        self.start <= self.end && self.end <= len
    }
}
