//! Compressed glyph data of one font.

use crate::index::GlyphIndex;

/// The glyph data blob together with the offset table locating every glyph.
///
/// `offsets` has one more entry than there are glyphs; glyph `i` occupies
/// `data[offsets[i]..offsets[i+1]]`.
#[derive(Clone, Copy, Debug)]
pub struct GlyphStore {
    offsets: &'static [u16],
    data:    &'static [u8],
}

impl GlyphStore {
    pub const fn new(offsets: &'static [u16], data: &'static [u8]) -> Self {
        Self { offsets, data }
    }

    pub const fn glyph_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Compressed size of a glyph in bytes.
    pub fn compressed_size(&self, index: GlyphIndex) -> usize {
        let i = index as usize;
        (self.offsets[i + 1] - self.offsets[i]) as usize
    }

    /// Compressed bytes of a glyph.
    pub fn compressed_data(&self, index: GlyphIndex) -> &'static [u8] {
        let i = index as usize;
        &self.data[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// Check the offset table against the blob.
    pub(crate) const fn validate(&self) {
        assert!(self.offsets.len() >= 2, "font has no glyphs");
        assert!(self.offsets.len() <= GlyphIndex::MAX as usize + 2,
                "more glyphs than a glyph index can address");
        let mut i = 1;
        while i < self.offsets.len() {
            assert!(self.offsets[i - 1] <= self.offsets[i], "glyph offsets must not decrease");
            i += 1;
        }
        assert!(self.offsets[self.offsets.len() - 1] as usize <= self.data.len(),
                "glyph offsets point beyond the glyph data");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static OFFSETS: [u16; 4] = [0, 3, 3, 5];
    static DATA: [u8; 5] = [0x01, 0xf0, 0x0f, 0x81, 0xff];

    #[test]
    fn glyph_ranges() {
        let store = GlyphStore::new(&OFFSETS, &DATA);
        store.validate();
        assert_eq!(store.glyph_count(), 3);
        assert_eq!(store.compressed_data(0), &[0x01, 0xf0, 0x0f]);
        assert_eq!(store.compressed_size(1), 0);
        assert!(store.compressed_data(1).is_empty());
        assert_eq!(store.compressed_data(2), &[0x81, 0xff]);
    }

    #[test]
    #[should_panic(expected = "must not decrease")]
    fn decreasing_offsets_are_rejected() {
        static BAD: [u16; 3] = [0, 3, 2];
        GlyphStore::new(&BAD, &DATA).validate();
    }

    #[test]
    #[should_panic(expected = "beyond the glyph data")]
    fn offsets_past_the_data_are_rejected() {
        static BAD: [u16; 2] = [0, 6];
        GlyphStore::new(&BAD, &DATA).validate();
    }
}
