use serde::Serialize;

/// A byte range `[start, end)` into a single raw line.
///
/// Segments carry the span of source they stand for, so slicing the raw
/// line with consecutive spans walks the whole line without gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `s`.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on a char boundary.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        // Inverted spans saturate rather than underflow
        assert_eq!(Span::new(5, 1).len(), 0);
    }

    #[test]
    fn slice_returns_covered_text() {
        let line = "a **b** c";
        assert_eq!(Span::new(2, 7).slice(line), "**b**");
        assert_eq!(Span::new(0, 0).slice(line), "");
    }
}
