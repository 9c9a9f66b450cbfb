use std::fmt;

/// A range of bytes inside a single line of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    start: usize,
    length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Panics in debug builds if `end` starts before `start`.
    pub fn bounds(start: Self, end: Self) -> Self {
        debug_assert!(start.start <= end.end());
        Self {
            start: start.start,
            length: end.end() - start.start,
        }
    }

    /// Get a reference to the text span's start.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get a reference to the text span's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Get a reference to the text span's end.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end())
    }
}
