use core::fmt;
use std::ops::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TextSize {
    val: u32,
}

impl From<u32> for TextSize {
    #[inline]
    fn from(val: u32) -> Self {
        Self { val }
    }
}

impl From<TextSize> for usize {
    #[inline]
    fn from(size: TextSize) -> Self {
        size.val as usize
    }
}

impl Add for TextSize {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            val: self.val + rhs.val,
        }
    }
}

impl AddAssign for TextSize {
    fn add_assign(&mut self, rhs: Self) {
        self.val += rhs.val
    }
}

/// A half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl TextRange {
    pub fn new(start: TextSize, end: TextSize) -> Self {
        assert!(start <= end);
        Self { start, end }
    }

    pub fn at(start: TextSize, len: TextSize) -> Self {
        Self::new(start, start + len)
    }

    /// Covers both `self` and `other`.
    pub fn cover(self, other: TextRange) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub const fn end(self) -> TextSize {
        self.end
    }
}

impl Index<TextRange> for str {
    type Output = str;

    #[inline]
    fn index(&self, range: TextRange) -> &str {
        &self[usize::from(range.start)..usize::from(range.end)]
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.val, self.end.val)
    }
}
