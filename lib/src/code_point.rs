//! Unicode code points as seen by the font engine.

use core::fmt;

/// A Unicode code point.
///
/// Unlike `char` this accepts any `u32`, so that out-of-range values coming
/// from elsewhere can still be looked up (they resolve to the replacement
/// glyph).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CodePoint(u32);

impl CodePoint {
    pub const NULL:        CodePoint = CodePoint(0x0);
    pub const TABULATION:  CodePoint = CodePoint(0x9);
    pub const LINE_FEED:   CodePoint = CodePoint(0xa);
    pub const SPACE:       CodePoint = CodePoint(0x20);
    pub const REPLACEMENT: CodePoint = CodePoint(0xfffd);

    pub const fn new(value: u32) -> Self {
        CodePoint(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Return true if this code point is drawn on top of the previous one
    /// instead of taking its own cell.
    pub fn is_combining(self) -> bool {
        matches!(self.0,
                 0x0300..=0x036f |  // combining diacritical marks
                 0x1ab0..=0x1aff |  // ... extended
                 0x1dc0..=0x1dff |  // ... supplement
                 0x20d0..=0x20ff |  // ... for symbols
                 0xfe20..=0xfe2f)   // combining half marks
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint(c as u32)
    }
}

impl From<u32> for CodePoint {
    fn from(value: u32) -> Self {
        CodePoint(value)
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_marks() {
        assert!(CodePoint::from('\u{301}').is_combining());
        assert!(CodePoint::from('\u{36f}').is_combining());
        assert!(CodePoint::from('\u{20d7}').is_combining());
        assert!(!CodePoint::from('e').is_combining());
        assert!(!CodePoint::from('\u{2ff}').is_combining());
        assert!(!CodePoint::from('\u{370}').is_combining());
        assert!(!CodePoint::new(u32::MAX).is_combining());
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", CodePoint::from('A')), "U+0041");
        assert_eq!(format!("{:?}", CodePoint::REPLACEMENT), "U+FFFD");
    }
}
