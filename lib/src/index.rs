//! Mapping from code points to glyph indices.
//!
//! A font only has glyphs for a few hundred code points, mostly in runs of
//! consecutive values (ASCII, a slice of Latin-1, Greek letters, ...).  The
//! table stores one entry per run: its first code point and the glyph index
//! of that code point.  The glyphs of a run are consecutive too, so the run
//! ends where the glyph indices of the next entry begin.

use crate::code_point::CodePoint;

/// Index of a glyph inside one font.
pub type GlyphIndex = u8;

/// Glyph drawn for code points the font does not cover (U+FFFD).
pub const REPLACEMENT_GLYPH_INDEX: GlyphIndex = 133;

/// First code point of a run, and its glyph.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CodePointIndexPair {
    code_point:  u32,
    glyph_index: GlyphIndex,
}

impl CodePointIndexPair {
    pub const fn new(code_point: u32, glyph_index: GlyphIndex) -> Self {
        Self { code_point, glyph_index }
    }

    pub const fn code_point(&self) -> u32 {
        self.code_point
    }

    pub const fn glyph_index(&self) -> GlyphIndex {
        self.glyph_index
    }
}

/// Sorted run table, plus the glyph count bounding the last run.
#[derive(Clone, Copy, Debug)]
pub struct CodePointIndex {
    table:       &'static [CodePointIndexPair],
    glyph_count: usize,
}

impl CodePointIndex {
    pub const fn new(table: &'static [CodePointIndexPair], glyph_count: usize) -> Self {
        Self { table, glyph_count }
    }

    pub const fn table(&self) -> &'static [CodePointIndexPair] {
        self.table
    }

    /// Number of glyphs covered by the run starting at `table[i]`.
    const fn run_length(&self, i: usize) -> usize {
        let end = if i + 1 < self.table.len() {
            self.table[i + 1].glyph_index as usize
        } else {
            self.glyph_count
        };
        end.saturating_sub(self.table[i].glyph_index as usize)
    }

    /// Return the glyph for `c`, or [`REPLACEMENT_GLYPH_INDEX`].
    pub fn glyph_index(&self, c: CodePoint) -> GlyphIndex {
        let c = c.value();
        // number of runs starting at or before `c`
        let after = self.table.partition_point(|pair| pair.code_point <= c);
        if after == 0 {
            return REPLACEMENT_GLYPH_INDEX;
        }
        let run = after - 1;
        let pair = &self.table[run];
        let offset = (c - pair.code_point) as usize;
        if offset >= self.run_length(run) {
            return REPLACEMENT_GLYPH_INDEX;
        }
        (pair.glyph_index as usize + offset) as GlyphIndex
    }

    /// Check that the table can be searched and stays inside the glyph set.
    pub(crate) const fn validate(&self) {
        assert!(!self.table.is_empty(), "code point table is empty");
        let mut i = 0;
        while i < self.table.len() {
            let pair = &self.table[i];
            assert!((pair.glyph_index as usize) < self.glyph_count,
                    "code point table refers to a glyph beyond the glyph count");
            if i > 0 {
                let prev = &self.table[i - 1];
                assert!(prev.glyph_index < pair.glyph_index,
                        "glyph indices in the code point table must increase");
                // the previous run must end before this one begins
                assert!(prev.code_point as u64 + ((pair.glyph_index - prev.glyph_index) as u64)
                        <= pair.code_point as u64,
                        "code point runs overlap or are unsorted");
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // runs: 'A'..='E' -> 0..=4, 'a'..='b' -> 5..=6, '~' -> 7, U+00E9..=U+00EA -> 8..=9
    static TABLE: [CodePointIndexPair; 4] = [
        CodePointIndexPair::new(0x41, 0),
        CodePointIndexPair::new(0x61, 5),
        CodePointIndexPair::new(0x7e, 7),
        CodePointIndexPair::new(0xe9, 8),
    ];

    fn index() -> CodePointIndex {
        let index = CodePointIndex::new(&TABLE, 10);
        index.validate();
        index
    }

    fn lookup(c: u32) -> GlyphIndex {
        index().glyph_index(CodePoint::new(c))
    }

    #[test]
    fn run_members() {
        assert_eq!(lookup(0x41), 0);
        assert_eq!(lookup(0x43), 2);
        assert_eq!(lookup(0x45), 4);
        assert_eq!(lookup(0x61), 5);
        assert_eq!(lookup(0x62), 6);
        assert_eq!(lookup(0x7e), 7);
        assert_eq!(lookup(0xe9), 8);
        assert_eq!(lookup(0xea), 9);
    }

    #[test]
    fn gaps_resolve_to_replacement() {
        for c in [0x0, 0x40, 0x46, 0x60, 0x63, 0x7d, 0x7f, 0xe8, 0xeb, 0x10ffff, u32::MAX] {
            assert_eq!(lookup(c), REPLACEMENT_GLYPH_INDEX, "U+{:X}", c);
        }
    }

    #[test]
    fn empty_table() {
        let index = CodePointIndex::new(&[], 0);
        assert_eq!(index.glyph_index(CodePoint::from('A')), REPLACEMENT_GLYPH_INDEX);
    }

    #[test]
    fn single_entry_table() {
        static ONE: [CodePointIndexPair; 1] = [CodePointIndexPair::new(0x30, 0)];
        let index = CodePointIndex::new(&ONE, 10);
        assert_eq!(index.glyph_index(CodePoint::from('0')), 0);
        assert_eq!(index.glyph_index(CodePoint::from('9')), 9);
        assert_eq!(index.glyph_index(CodePoint::from(':')), REPLACEMENT_GLYPH_INDEX);
        assert_eq!(index.glyph_index(CodePoint::from('/')), REPLACEMENT_GLYPH_INDEX);
    }

    #[test]
    fn strictly_increasing_within_runs() {
        let index = index();
        for (i, pair) in TABLE.iter().enumerate() {
            let len = index.run_length(i);
            let glyphs: Vec<_> = (0..len as u32)
                .map(|off| index.glyph_index(CodePoint::new(pair.code_point() + off)))
                .collect();
            for (off, &glyph) in glyphs.iter().enumerate() {
                assert_eq!(glyph as usize, pair.glyph_index() as usize + off);
            }
            assert!(glyphs.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    #[should_panic(expected = "overlap")]
    fn overlapping_runs_are_rejected() {
        static BAD: [CodePointIndexPair; 2] = [
            CodePointIndexPair::new(0x41, 0),
            CodePointIndexPair::new(0x42, 3),
        ];
        CodePointIndex::new(&BAD, 5).validate();
    }

    #[test]
    #[should_panic(expected = "beyond the glyph count")]
    fn glyph_count_bounds_the_table() {
        CodePointIndex::new(&TABLE, 8).validate();
    }
}
