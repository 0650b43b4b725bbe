//! Scratch buffer for rendering one glyph.
//!
//! The same memory first holds two planes of grayscale samples (the base
//! glyph and a combining mark), then the colors the samples map to.  A color
//! takes two bytes, so the color of pixel `i` covers the samples of pixels
//! `2i` and `2i + 1`; colorizing from the last pixel to the first consumes
//! every sample before it gets overwritten.

use bytemuck::{cast_slice, cast_slice_mut};

use crate::color::Color;
use crate::{MAX_GLYPH_PIXEL_COUNT, RenderError, RenderPalette};

/// What the buffer currently holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BufferState {
    /// Nothing usable; the previous glyph (if any) was consumed.
    Idle,
    /// Grayscales of a base glyph.
    BaseDecoded,
    /// Grayscales of a base glyph with one or more combining marks merged in.
    MarksAccumulated,
    /// Colors, ready to be copied to the display.
    Colorized,
}

impl BufferState {
    pub fn has_grayscales(self) -> bool {
        matches!(self, BufferState::BaseDecoded | BufferState::MarksAccumulated)
    }
}

/// Scratch memory holding one glyph on its way to the display.
pub struct GlyphBuffer {
    cells:       [Color; MAX_GLYPH_PIXEL_COUNT],
    pixel_count: usize,
    state:       BufferState,
}

impl Default for GlyphBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [Color::BLACK; MAX_GLYPH_PIXEL_COUNT],
            pixel_count: 0,
            state: BufferState::Idle,
        }
    }

    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Number of pixels of the glyph in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Grayscale samples (0..=15) of the current glyph, row-major.
    pub fn grayscales(&self) -> Option<&[u8]> {
        if self.state.has_grayscales() {
            Some(&cast_slice::<Color, u8>(&self.cells)[..self.pixel_count])
        } else {
            None
        }
    }

    /// Colors of the current glyph, row-major.
    pub fn colors(&self) -> Option<&[Color]> {
        if self.state == BufferState::Colorized {
            Some(&self.cells[..self.pixel_count])
        } else {
            None
        }
    }

    /// Mark the glyph as consumed, making the buffer ready for the next one.
    pub fn release(&mut self) {
        self.state = BufferState::Idle;
    }

    fn grayscale_planes_mut(&mut self) -> (&mut [u8], &mut [u8]) {
        cast_slice_mut::<Color, u8>(&mut self.cells).split_at_mut(MAX_GLYPH_PIXEL_COUNT)
    }

    /// Let `fetch` fill the primary plane with `pixel_count` samples.
    pub(crate) fn set_base(&mut self, pixel_count: usize, fetch: impl FnOnce(&mut [u8])) {
        debug_assert!(pixel_count <= MAX_GLYPH_PIXEL_COUNT);
        let (primary, _) = self.grayscale_planes_mut();
        fetch(&mut primary[..pixel_count]);
        self.pixel_count = pixel_count;
        self.state = BufferState::BaseDecoded;
    }

    /// Let `fetch` fill the secondary plane with `pixel_count` samples, then
    /// merge it into the primary plane keeping the larger sample (more ink)
    /// of each pixel.  The mark must have the size of the base glyph.
    pub(crate) fn accumulate_mark(&mut self, pixel_count: usize, fetch: impl FnOnce(&mut [u8]))
                                  -> Result<(), RenderError> {
        match self.state {
            BufferState::Idle => return Err(RenderError::NoBaseGlyph),
            BufferState::Colorized => return Err(RenderError::AlreadyColorized),
            _ => {}
        }
        if pixel_count != self.pixel_count {
            return Err(RenderError::SizeMismatch);
        }
        let n = self.pixel_count;
        let (primary, secondary) = self.grayscale_planes_mut();
        fetch(&mut secondary[..n]);
        for (base, &mark) in primary[..n].iter_mut().zip(&secondary[..n]) {
            *base = (*base).max(mark);
        }
        self.state = BufferState::MarksAccumulated;
        Ok(())
    }

    /// Replace every grayscale sample by its palette color, in place.
    pub fn colorize(&mut self, palette: &RenderPalette) -> Result<(), RenderError> {
        match self.state {
            BufferState::Idle => return Err(RenderError::NotDecoded),
            BufferState::Colorized => return Err(RenderError::AlreadyColorized),
            _ => {}
        }
        for i in (0..self.pixel_count).rev() {
            let sample = cast_slice::<Color, u8>(&self.cells)[i];
            self.cells[i] = palette.color_at(sample as usize);
        }
        self.state = BufferState::Colorized;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn distinct_palette() -> RenderPalette {
        let mut colors = [Color::BLACK; 16];
        for (i, c) in colors.iter_mut().enumerate() {
            *c = Color::from_raw(0x1001 * i as u16 + 0x0f0f);
        }
        RenderPalette::new(colors)
    }

    fn pattern(samples: &mut [u8]) {
        for (i, s) in samples.iter_mut().enumerate() {
            *s = ((i * 7) % 16) as u8;
        }
    }

    #[test]
    fn starts_idle() {
        let buf = GlyphBuffer::new();
        assert_eq!(buf.state(), BufferState::Idle);
        assert!(buf.grayscales().is_none());
        assert!(buf.colors().is_none());
    }

    #[test]
    fn colorize_in_place_uses_each_sample() {
        let pal = distinct_palette();
        let mut buf = GlyphBuffer::new();
        buf.set_base(MAX_GLYPH_PIXEL_COUNT, pattern);
        let expected: Vec<Color> = buf.grayscales().unwrap().iter()
            .map(|&s| pal[s as usize]).collect();
        buf.colorize(&pal).unwrap();
        assert_eq!(buf.state(), BufferState::Colorized);
        assert_eq!(buf.colors().unwrap(), &expected[..]);
        assert!(buf.grayscales().is_none());
    }

    #[test]
    fn colorize_partial_glyph() {
        let pal = distinct_palette();
        let mut buf = GlyphBuffer::new();
        buf.set_base(98, pattern);
        buf.colorize(&pal).unwrap();
        let colors = buf.colors().unwrap();
        assert_eq!(colors.len(), 98);
        for (i, &c) in colors.iter().enumerate() {
            assert_eq!(c, pal[(i * 7) % 16]);
        }
    }

    #[test]
    fn colorize_needs_grayscales() {
        let pal = distinct_palette();
        let mut buf = GlyphBuffer::new();
        assert_eq!(buf.colorize(&pal), Err(RenderError::NotDecoded));
        buf.set_base(4, |s| s.copy_from_slice(&[0, 1, 2, 3]));
        buf.colorize(&pal).unwrap();
        assert_eq!(buf.colorize(&pal), Err(RenderError::AlreadyColorized));
        assert_eq!(buf.colors().unwrap(), &[pal[0], pal[1], pal[2], pal[3]]);
        buf.release();
        assert_eq!(buf.colorize(&pal), Err(RenderError::NotDecoded));
    }

    #[test]
    fn marks_keep_the_larger_sample() {
        let mut buf = GlyphBuffer::new();
        buf.set_base(4, |s| s.copy_from_slice(&[0, 15, 7, 3]));
        buf.accumulate_mark(4, |s| s.copy_from_slice(&[9, 2, 7, 4])).unwrap();
        assert_eq!(buf.state(), BufferState::MarksAccumulated);
        assert_eq!(buf.grayscales().unwrap(), &[9, 15, 7, 4]);
    }

    #[test]
    fn marks_need_a_base() {
        let mut buf = GlyphBuffer::new();
        assert_eq!(buf.accumulate_mark(1, |_| ()), Err(RenderError::NoBaseGlyph));
        buf.set_base(1, |s| s[0] = 1);
        buf.colorize(&distinct_palette()).unwrap();
        assert_eq!(buf.accumulate_mark(1, |_| ()), Err(RenderError::AlreadyColorized));
    }

    #[test]
    fn marks_must_match_the_base_size() {
        let mut buf = GlyphBuffer::new();
        buf.set_base(4, |s| s.copy_from_slice(&[1, 2, 3, 4]));
        assert_eq!(buf.accumulate_mark(6, |_| panic!("mark fetched")), Err(RenderError::SizeMismatch));
        assert_eq!(buf.state(), BufferState::BaseDecoded);
        assert_eq!(buf.grayscales().unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn reuse_after_release() {
        let mut buf = GlyphBuffer::new();
        buf.set_base(2, |s| s.copy_from_slice(&[1, 2]));
        buf.colorize(&distinct_palette()).unwrap();
        buf.release();
        buf.set_base(3, |s| s.copy_from_slice(&[4, 5, 6]));
        assert_eq!(buf.state(), BufferState::BaseDecoded);
        assert_eq!(buf.grayscales().unwrap(), &[4, 5, 6]);
    }
}
