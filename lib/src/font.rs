//! Font handling.

use crate::buffer::GlyphBuffer;
use crate::code_point::CodePoint;
use crate::color::Color;
use crate::decompress::decompress;
use crate::fonts::{LARGE_FONT, SMALL_FONT};
use crate::index::{CodePointIndex, CodePointIndexPair, GlyphIndex, REPLACEMENT_GLYPH_INDEX};
use crate::store::GlyphStore;
use crate::{MAX_GLYPH_PIXEL_COUNT, RenderError, RenderPalette, TAB_WIDTH};

/// A monospaced font with compressed, anti-aliased glyphs.
///
/// Fonts are built once from static tables; see [`LARGE_FONT`] and
/// [`crate::SMALL_FONT`].
#[derive(Debug)]
pub struct Font {
    index:  CodePointIndex,
    /// Width and height of every glyph.
    size:   (u16, u16),
    glyphs: GlyphStore,
}

impl Font {
    /// Assemble a font from its tables.
    ///
    /// Panics if the tables are inconsistent.  For fonts defined as `static`
    /// this happens at compile time.
    pub const fn new(table: &'static [CodePointIndexPair], width: u16, height: u16,
                     offsets: &'static [u16], data: &'static [u8]) -> Self {
        let glyphs = GlyphStore::new(offsets, data);
        glyphs.validate();
        let index = CodePointIndex::new(table, glyphs.glyph_count());
        index.validate();
        assert!(glyphs.glyph_count() > REPLACEMENT_GLYPH_INDEX as usize,
                "font has no replacement glyph");
        assert!(width > 0 && height > 0, "glyph size is empty");
        assert!(width as usize * height as usize <= MAX_GLYPH_PIXEL_COUNT,
                "glyph size exceeds the glyph buffer");
        Font { index, size: (width, height), glyphs }
    }

    pub const fn glyph_size(&self) -> (u16, u16) {
        self.size
    }

    pub const fn glyph_count(&self) -> usize {
        self.glyphs.glyph_count()
    }

    fn pixel_count(&self) -> usize {
        self.size.0 as usize * self.size.1 as usize
    }

    pub fn index_for_code_point(&self, c: CodePoint) -> GlyphIndex {
        self.index.glyph_index(c)
    }

    /// Return true if every character of `text` up to the NUL character has
    /// a glyph in this font.
    pub fn can_be_written(&self, text: &str) -> bool {
        text.chars()
            .take_while(|&c| c != '\0')
            .all(|c| self.index_for_code_point(c.into()) != REPLACEMENT_GLYPH_INDEX)
    }

    /// Size of the box needed to draw `text`.
    pub fn string_size(&self, text: &str) -> (u16, u16) {
        self.string_size_until(text, None)
    }

    /// Size of the box needed to draw `text` up to the NUL character, or up
    /// to the byte offset `limit`.
    ///
    /// Combining marks are drawn over the preceding glyph and take no room;
    /// one with nothing to sit on (at the start of a line or after a
    /// tabulation) gets a cell of its own.  A tabulation takes `TAB_WIDTH`
    /// cells and a line feed starts a new line.  The width is that of the
    /// widest line.
    pub fn string_size_until(&self, text: &str, limit: Option<usize>) -> (u16, u16) {
        let (charw, charh) = self.size;
        let limit = limit.unwrap_or(text.len());
        let mut width = 0u16;
        let mut line = 0u16;
        let mut height = charh;
        let mut after_glyph = false;
        for (pos, c) in text.char_indices() {
            if pos >= limit || c == '\0' {
                break;
            }
            let c = CodePoint::from(c);
            if c == CodePoint::LINE_FEED {
                width = width.max(line);
                line = 0;
                height = height.saturating_add(charh);
                after_glyph = false;
            } else if c == CodePoint::TABULATION {
                line = line.saturating_add(TAB_WIDTH.saturating_mul(charw));
                after_glyph = false;
            } else if !(c.is_combining() && after_glyph) {
                line = line.saturating_add(charw);
                after_glyph = true;
            }
        }
        (width.max(line), height)
    }

    fn fetch_grayscale_glyph_at_index(&self, index: GlyphIndex, samples: &mut [u8]) {
        log::trace!("fetching glyph {} ({} bytes)", index, self.glyphs.compressed_size(index));
        decompress(self.glyphs.compressed_data(index), samples);
    }

    /// Decode the glyph of `c` into the buffer, replacing what it held.
    pub fn set_glyph_grayscales_for_code_point(&self, c: CodePoint, buffer: &mut GlyphBuffer) {
        let index = self.index_for_code_point(c);
        buffer.set_base(self.pixel_count(), |samples| self.fetch_grayscale_glyph_at_index(index, samples));
    }

    /// Merge the glyph of the combining mark `c` into the glyph in the buffer.
    pub fn accumulate_glyph_grayscales_for_code_point(&self, c: CodePoint, buffer: &mut GlyphBuffer)
                                                      -> Result<(), RenderError> {
        let index = self.index_for_code_point(c);
        buffer.accumulate_mark(self.pixel_count(),
                               |samples| self.fetch_grayscale_glyph_at_index(index, samples))
            .map_err(|e| {
                log::warn!("cannot accumulate {:?}: {}", c, e);
                e
            })
    }

    pub fn render_palette(&self, text_color: Color, background_color: Color) -> RenderPalette {
        RenderPalette::gradient(text_color, background_color)
    }

    /// Turn the grayscales in the buffer into colors from `palette`.
    pub fn colorize_glyph_buffer(&self, palette: &RenderPalette, buffer: &mut GlyphBuffer)
                                 -> Result<(), RenderError> {
        let checked = if buffer.state().has_grayscales() && buffer.pixel_count() != self.pixel_count() {
            Err(RenderError::SizeMismatch)
        } else {
            buffer.colorize(palette)
        };
        checked.map_err(|e| {
            log::warn!("cannot colorize glyph buffer: {}", e);
            e
        })
    }
}

/// Return true if `text` can be entered and drawn with the built-in fonts.
pub fn can_be_written_with_glyphs(text: &str) -> bool {
    LARGE_FONT.can_be_written(text) && SMALL_FONT.can_be_written(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferState;
    use pretty_assertions::assert_eq;

    static FONTS: [&Font; 2] = [&LARGE_FONT, &SMALL_FONT];

    fn base_only(font: &Font, base: char) -> Vec<u8> {
        let mut buf = GlyphBuffer::new();
        font.set_glyph_grayscales_for_code_point(base.into(), &mut buf);
        buf.grayscales().unwrap().to_vec()
    }

    fn with_marks(font: &Font, base: char, marks: &[char]) -> Vec<u8> {
        let mut buf = GlyphBuffer::new();
        font.set_glyph_grayscales_for_code_point(base.into(), &mut buf);
        for &m in marks {
            font.accumulate_glyph_grayscales_for_code_point(m.into(), &mut buf).unwrap();
        }
        assert_eq!(buf.state(), BufferState::MarksAccumulated);
        buf.grayscales().unwrap().to_vec()
    }

    #[test]
    fn fonts_are_shareable() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        assert_sync(&LARGE_FONT);
        let handles: Vec<_> = (0..4).map(|i| std::thread::spawn(move || {
            FONTS[i % 2].string_size("shared")
        })).collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let (w, h) = FONTS[i % 2].glyph_size();
            assert_eq!(handle.join().unwrap(), (6 * w, h));
        }
    }

    #[test]
    fn glyph_sizes() {
        assert_eq!(LARGE_FONT.glyph_size(), (10, 18));
        assert_eq!(SMALL_FONT.glyph_size(), (7, 14));
        assert_eq!(LARGE_FONT.glyph_count(), SMALL_FONT.glyph_count());
    }

    #[test]
    fn every_covered_code_point_has_its_glyph() {
        for font in &FONTS {
            let table = font.index.table();
            let mut expected = 0usize;
            for (i, pair) in table.iter().enumerate() {
                let next = table.get(i + 1).map_or(font.glyph_count(), |p| p.glyph_index() as usize);
                assert_eq!(pair.glyph_index() as usize, expected);
                for off in 0..(next - expected) as u32 {
                    let glyph = font.index_for_code_point(CodePoint::new(pair.code_point() + off));
                    assert_eq!(glyph as usize, expected + off as usize);
                }
                expected = next;
            }
            assert_eq!(expected, font.glyph_count());
        }
    }

    #[test]
    fn known_code_points() {
        assert_eq!(LARGE_FONT.index_for_code_point(' '.into()), 0);
        assert_eq!(LARGE_FONT.index_for_code_point('A'.into()), 33);
        assert_eq!(LARGE_FONT.index_for_code_point('~'.into()), 94);
        assert_eq!(LARGE_FONT.index_for_code_point('\u{fffd}'.into()), REPLACEMENT_GLYPH_INDEX);
    }

    #[test]
    fn uncovered_code_points_use_the_replacement_glyph() {
        for &c in &[0x0, 0x1f, 0x7f, 0xa0, 0xe9, 0x309, 0x4e00, 0xfffc, 0xfffe, 0x1f600, 0x110000, u32::MAX] {
            assert_eq!(SMALL_FONT.index_for_code_point(CodePoint::new(c)), REPLACEMENT_GLYPH_INDEX,
                       "U+{:X}", c);
        }
    }

    #[test]
    fn writable_text() {
        assert!(can_be_written_with_glyphs(""));
        assert!(can_be_written_with_glyphs("Hello, World! 1+1=2"));
        assert!(can_be_written_with_glyphs("ß×÷ αβγ π→Ω"));
        assert!(can_be_written_with_glyphs("e\u{301}"));
        assert!(!can_be_written_with_glyphs("café"));
        assert!(!can_be_written_with_glyphs("tab\there"));
        assert!(!can_be_written_with_glyphs("🙂"));
        // the replacement character itself is drawable, but indistinguishable
        assert!(!can_be_written_with_glyphs("\u{fffd}"));
    }

    #[test]
    fn writable_text_ends_at_nul() {
        assert!(can_be_written_with_glyphs("ab\0"));
        assert!(can_be_written_with_glyphs("ab\0\u{1f642}"));
        assert!(!can_be_written_with_glyphs("\u{1f642}\0ab"));
        for font in &FONTS {
            assert!(font.can_be_written("x\0\t"));
            assert_eq!(font.string_size("ab\0"), font.string_size("ab"));
        }
    }

    #[test]
    fn every_glyph_decompresses_to_its_size() {
        for font in &FONTS {
            let (w, h) = font.glyph_size();
            for index in 0..font.glyph_count() {
                let mut samples = [0xffu8; MAX_GLYPH_PIXEL_COUNT];
                let n = w as usize * h as usize;
                font.fetch_grayscale_glyph_at_index(index as GlyphIndex, &mut samples[..n]);
                assert!(samples[..n].iter().all(|&s| s <= 15), "glyph {}", index);
                assert!(samples[n..].iter().all(|&s| s == 0xff), "glyph {}", index);
            }
        }
    }

    #[test]
    fn space_is_blank_and_letters_have_ink() {
        for font in &FONTS {
            assert!(base_only(font, ' ').iter().all(|&s| s == 0));
            assert!(base_only(font, 'A').iter().any(|&s| s == 15));
            assert!(base_only(font, '\u{fffd}').iter().any(|&s| s > 0));
        }
    }

    #[test]
    fn marks_never_remove_ink() {
        for font in &FONTS {
            let base = base_only(font, 'e');
            let acute_first = with_marks(font, 'e', &['\u{301}', '\u{308}']);
            let diaeresis_first = with_marks(font, 'e', &['\u{308}', '\u{301}']);
            assert_eq!(acute_first, diaeresis_first);
            for (b, m) in base.iter().zip(&acute_first) {
                assert!(m >= b);
            }
            // the marks add ink above the letter
            let ink = |samples: &[u8]| samples.iter().map(|&s| s as u32).sum::<u32>();
            assert!(ink(&acute_first) > ink(&base));
        }
    }

    #[test]
    fn string_sizes() {
        let (w, h) = LARGE_FONT.glyph_size();
        assert_eq!(LARGE_FONT.string_size(""), (0, h));
        assert_eq!(LARGE_FONT.string_size("A"), (w, h));
        assert_eq!(LARGE_FONT.string_size("Hello"), (5 * w, h));
        assert_eq!(LARGE_FONT.string_size("e\u{301}\u{308}"), (w, h));
        assert_eq!(LARGE_FONT.string_size("\u{301}"), (w, h));
        assert_eq!(LARGE_FONT.string_size("a\n\u{301}\u{301}"), (w, 2 * h));
        assert_eq!(LARGE_FONT.string_size("日本"), (2 * w, h));
    }

    #[test]
    fn string_sizes_with_control_characters() {
        let (w, h) = SMALL_FONT.glyph_size();
        assert_eq!(SMALL_FONT.string_size("ab\ncdef\ng"), (4 * w, 3 * h));
        assert_eq!(SMALL_FONT.string_size("\n"), (0, 2 * h));
        assert_eq!(SMALL_FONT.string_size("a\tb"), ((2 + TAB_WIDTH) * w, h));
        assert_eq!(SMALL_FONT.string_size("abc\0def"), (3 * w, h));
    }

    #[test]
    fn string_sizes_until_limit() {
        let (w, h) = SMALL_FONT.glyph_size();
        assert_eq!(SMALL_FONT.string_size_until("abcdef", Some(2)), (2 * w, h));
        assert_eq!(SMALL_FONT.string_size_until("abcdef", Some(0)), (0, h));
        assert_eq!(SMALL_FONT.string_size_until("abc", Some(10)), (3 * w, h));
        // 'é' is two bytes; a limit inside it still counts it
        assert_eq!(SMALL_FONT.string_size_until("aéb", Some(2)), (2 * w, h));
        assert_eq!(SMALL_FONT.string_size_until("aéb", Some(1)), (w, h));
    }

    #[test]
    fn string_size_saturates() {
        let long = "x".repeat(10_000);
        assert_eq!(LARGE_FONT.string_size(&long).0, u16::MAX);
    }

    #[test]
    fn colorize_maps_samples_through_the_palette() {
        let pal = SMALL_FONT.render_palette(Color::rgb(0, 0, 0xff), Color::WHITE);
        let mut buf = GlyphBuffer::new();
        SMALL_FONT.set_glyph_grayscales_for_code_point('@'.into(), &mut buf);
        let samples = buf.grayscales().unwrap().to_vec();
        SMALL_FONT.colorize_glyph_buffer(&pal, &mut buf).unwrap();
        let colors = buf.colors().unwrap();
        assert_eq!(colors.len(), samples.len());
        for (&s, &c) in samples.iter().zip(colors) {
            assert_eq!(c, pal[s as usize]);
        }
    }

    #[test]
    fn colorize_is_guarded() {
        let pal = LARGE_FONT.render_palette(Color::BLACK, Color::WHITE);
        let mut buf = GlyphBuffer::new();
        assert_eq!(LARGE_FONT.colorize_glyph_buffer(&pal, &mut buf), Err(RenderError::NotDecoded));
        LARGE_FONT.set_glyph_grayscales_for_code_point('x'.into(), &mut buf);
        LARGE_FONT.colorize_glyph_buffer(&pal, &mut buf).unwrap();
        assert_eq!(LARGE_FONT.colorize_glyph_buffer(&pal, &mut buf), Err(RenderError::AlreadyColorized));
        assert_eq!(LARGE_FONT.accumulate_glyph_grayscales_for_code_point('\u{300}'.into(), &mut buf),
                   Err(RenderError::AlreadyColorized));
    }

    #[test]
    fn glyphs_of_another_font_are_rejected() {
        let pal = LARGE_FONT.render_palette(Color::BLACK, Color::WHITE);
        let mut buf = GlyphBuffer::new();
        SMALL_FONT.set_glyph_grayscales_for_code_point('e'.into(), &mut buf);
        let before = buf.grayscales().unwrap().to_vec();
        assert_eq!(LARGE_FONT.accumulate_glyph_grayscales_for_code_point('\u{301}'.into(), &mut buf),
                   Err(RenderError::SizeMismatch));
        assert_eq!(buf.grayscales().unwrap(), &before[..]);
        assert_eq!(LARGE_FONT.colorize_glyph_buffer(&pal, &mut buf), Err(RenderError::SizeMismatch));
        assert_eq!(buf.state(), BufferState::BaseDecoded);
        // the matching font still accepts the buffer
        SMALL_FONT.accumulate_glyph_grayscales_for_code_point('\u{301}'.into(), &mut buf).unwrap();
        SMALL_FONT.colorize_glyph_buffer(&pal, &mut buf).unwrap();
        assert_eq!(buf.colors().unwrap().len(), 7 * 14);
    }

    #[test]
    #[should_panic(expected = "glyph size is empty")]
    fn empty_glyphs_are_rejected() {
        static TABLE: [CodePointIndexPair; 1] = [CodePointIndexPair::new(0x20, 0)];
        static OFFSETS: [u16; 135] = [0; 135];
        Font::new(&TABLE, 0, 14, &OFFSETS, &[]);
    }

    #[test]
    #[should_panic(expected = "no replacement glyph")]
    fn fonts_need_a_replacement_glyph() {
        static TABLE: [CodePointIndexPair; 1] = [CodePointIndexPair::new(0x20, 0)];
        Font::new(&TABLE, 1, 1, &[0, 2], &[0x80, 0x00]);
    }

    #[test]
    #[should_panic(expected = "exceeds the glyph buffer")]
    fn oversized_glyphs_are_rejected() {
        static TABLE: [CodePointIndexPair; 1] = [CodePointIndexPair::new(0x20, 0)];
        static OFFSETS: [u16; 135] = [0; 135];
        Font::new(&TABLE, 20, 20, &OFFSETS, &[]);
    }
}
