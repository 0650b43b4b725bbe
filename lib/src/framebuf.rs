//! Basic framebuffer abstraction and text drawing.

use crate::buffer::GlyphBuffer;
use crate::code_point::CodePoint;
use crate::color::Color;
use crate::font::Font;
use crate::{RenderError, RenderPalette, TAB_WIDTH};

pub struct FrameBuffer<'buf> {
    buf: &'buf mut [Color],
    width: u16,
    height: u16,
    // Top-left pixel in clip rectangle
    clip1: (u16, u16),
    // Bottom-right pixel in clip rectangle (inclusive)
    clip2: (u16, u16),
}

impl<'buf> FrameBuffer<'buf> {
    pub fn new(buf: &'buf mut [Color], width: u16, height: u16) -> Self {
        assert!(buf.len() >= width as usize * height as usize, "framebuffer memory too small");
        Self { buf, width, height, clip1: (0, 0), clip2: (width - 1, height - 1) }
    }

    pub fn buf(&self) -> &[Color] {
        &self.buf
    }

    #[inline(always)]
    fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if self.clip1.0 <= x && x <= self.clip2.0 && self.clip1.1 <= y && y <= self.clip2.1 {
            self.buf[x as usize + y as usize * self.width as usize] = color;
        }
    }

    /// Return pixel width of the framebuffer.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return pixel height of the framebuffer.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Set clip rectangle with (inclusive) corners clip1 and clip2.
    pub fn set_clip(&mut self, clip1: (u16, u16), clip2: (u16, u16)) {
        self.clip1.0 = clip1.0.min(self.width - 1);
        self.clip1.1 = clip1.1.min(self.height - 1);
        self.clip2.0 = clip2.0.min(self.width - 1).max(self.clip1.0);
        self.clip2.1 = clip2.1.min(self.height - 1).max(self.clip1.1);
    }

    /// Clear the whole screen with this color.
    pub fn clear(&mut self, color: Color) {
        let x2 = self.width;
        let y2 = self.height;
        self.rect(0, 0, x2 - 1, y2 - 1, color);
    }

    /// Draw a filled rectangle with (inclusive) coordinates (x1, y1) to (x2, y2).
    pub fn rect(&mut self, mut x1: u16, mut y1: u16, mut x2: u16, mut y2: u16, color: Color) {
        x1 = x1.max(self.clip1.0);
        y1 = y1.max(self.clip1.1);
        x2 = x2.min(self.clip2.0);
        y2 = y2.min(self.clip2.1);
        if x1 > x2 || y1 > y2 {
            return;
        }
        for y in y1..=y2 {
            let row = y as usize * self.width as usize;
            self.buf[row + x1 as usize..=row + x2 as usize].iter_mut().for_each(|p| *p = color);
        }
    }

    /// Copy a colorized glyph of the given size to (px, py).
    pub fn blit_glyph(&mut self, px: u16, py: u16, size: (u16, u16),
                      glyph: &GlyphBuffer) -> Result<(), RenderError> {
        let colors = glyph.colors().ok_or(RenderError::NotColorized)?;
        debug_assert_eq!(colors.len(), size.0 as usize * size.1 as usize);
        for (i, row) in colors.chunks(size.0 as usize).enumerate() {
            let y = match py.checked_add(i as u16) {
                Some(y) if y < self.height => y,
                _ => break,
            };
            for (j, &color) in row.iter().enumerate() {
                match px.checked_add(j as u16) {
                    Some(x) if x < self.width => self.set_pixel(x, y, color),
                    _ => break,
                }
            }
        }
        Ok(())
    }

    /// Draw text with the given font at (px, py).
    ///
    /// Combining marks are merged into the glyph before them, a line feed
    /// continues at `px` one line lower and a tabulation skips `TAB_WIDTH`
    /// cells.  Drawing stops at a NUL character.  Returns the position
    /// after the last glyph.
    pub fn text(&mut self, font: &Font, px: u16, py: u16, text: &str,
                text_color: Color, background: Color) -> Result<(u16, u16), RenderError> {
        log::debug!("drawing {} bytes of text at ({}, {})", text.len(), px, py);
        let palette = font.render_palette(text_color, background);
        let (charw, charh) = font.glyph_size();
        let mut glyph = GlyphBuffer::new();
        let mut pos = (px, py);

        for c in text.chars().take_while(|&c| c != '\0').map(CodePoint::from) {
            if c.is_combining() && glyph.state().has_grayscales() {
                font.accumulate_glyph_grayscales_for_code_point(c, &mut glyph)?;
                continue;
            }
            self.flush_glyph(font, &palette, &mut glyph, &mut pos)?;
            if c == CodePoint::LINE_FEED {
                pos = (px, pos.1.saturating_add(charh));
            } else if c == CodePoint::TABULATION {
                pos.0 = pos.0.saturating_add(TAB_WIDTH.saturating_mul(charw));
            } else {
                font.set_glyph_grayscales_for_code_point(c, &mut glyph);
            }
        }
        self.flush_glyph(font, &palette, &mut glyph, &mut pos)?;
        Ok(pos)
    }

    /// Colorize and draw the pending glyph, if any, and advance past it.
    fn flush_glyph(&mut self, font: &Font, palette: &RenderPalette, glyph: &mut GlyphBuffer,
                   pos: &mut (u16, u16)) -> Result<(), RenderError> {
        if !glyph.state().has_grayscales() {
            return Ok(());
        }
        font.colorize_glyph_buffer(palette, glyph)?;
        self.blit_glyph(pos.0, pos.1, font.glyph_size(), glyph)?;
        glyph.release();
        pos.0 = pos.0.saturating_add(font.glyph_size().0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LARGE_FONT, SMALL_FONT};
    use pretty_assertions::assert_eq;

    const W: u16 = 64;
    const H: u16 = 40;

    fn with_fb<R>(f: impl FnOnce(&mut FrameBuffer) -> R) -> (R, Vec<Color>) {
        let mut mem = vec![Color::WHITE; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut mem, W, H);
        let r = f(&mut fb);
        (r, mem)
    }

    fn count_in(mem: &[Color], x1: u16, y1: u16, x2: u16, y2: u16, color: Color) -> usize {
        (y1..y2).flat_map(|y| (x1..x2).map(move |x| (x, y)))
            .filter(|&(x, y)| mem[(x + y * W) as usize] == color)
            .count()
    }

    #[test]
    fn rect_is_clipped() {
        let (_, mem) = with_fb(|fb| {
            fb.set_clip((2, 2), (5, 100));
            fb.rect(0, 0, 10, 3, Color::RED);
        });
        assert_eq!(count_in(&mem, 0, 0, W, H, Color::RED), 4 * 2);
        assert_eq!(count_in(&mem, 2, 2, 6, 4, Color::RED), 8);
    }

    #[test]
    fn blit_needs_colors() {
        let ((), _) = with_fb(|fb| {
            let mut glyph = GlyphBuffer::new();
            assert_eq!(fb.blit_glyph(0, 0, (7, 14), &glyph), Err(RenderError::NotColorized));
            SMALL_FONT.set_glyph_grayscales_for_code_point('a'.into(), &mut glyph);
            assert_eq!(fb.blit_glyph(0, 0, (7, 14), &glyph), Err(RenderError::NotColorized));
        });
    }

    #[test]
    fn text_draws_glyphs_in_cells() {
        let (pos, mem) = with_fb(|fb| fb.text(&SMALL_FONT, 1, 2, "HI", Color::BLACK, Color::WHITE));
        assert_eq!(pos, Ok((1 + 2 * 7, 2)));
        // ink only inside the two cells
        assert!(count_in(&mem, 1, 2, 8, 16, Color::WHITE) < 7 * 14);
        assert!(count_in(&mem, 8, 2, 15, 16, Color::WHITE) < 7 * 14);
        let outside = (0..H).flat_map(|y| (0..W).map(move |x| (x, y)))
            .filter(|&(x, y)| !(1..15).contains(&x) || !(2..16).contains(&y))
            .filter(|&(x, y)| mem[(x + y * W) as usize] != Color::WHITE)
            .count();
        assert_eq!(outside, 0);
    }

    #[test]
    fn text_matches_string_size() {
        for text in &["a\u{301}b", "x\ny\tz", "\u{308}q", "tab\t", ""] {
            let (w, h) = SMALL_FONT.string_size(text);
            let (pos, _) = with_fb(|fb| fb.text(&SMALL_FONT, 0, 0, text, Color::BLACK, Color::WHITE));
            let (x, y) = pos.unwrap();
            assert!(x <= w, "{:?}", text);
            assert_eq!(y + 14, h, "{:?}", text);
            if !text.contains('\n') {
                assert_eq!(x, w, "{:?}", text);
            }
        }
    }

    #[test]
    fn combining_marks_share_the_cell() {
        let (plain, plain_mem) = with_fb(|fb| fb.text(&LARGE_FONT, 0, 0, "e", Color::BLACK, Color::WHITE));
        let (marked, marked_mem) = with_fb(|fb| fb.text(&LARGE_FONT, 0, 0, "e\u{300}", Color::BLACK, Color::WHITE));
        assert_eq!(plain, marked);
        let ink = |mem: &[Color]| mem.iter().filter(|&&c| c != Color::WHITE).count();
        assert!(ink(&marked_mem) > ink(&plain_mem));
    }

    #[test]
    fn text_stops_at_nul_and_clips_at_the_edge() {
        let (pos, mem) = with_fb(|fb| fb.text(&LARGE_FONT, 60, 30, "W\0W", Color::RED, Color::BLUE));
        assert_eq!(pos, Ok((70, 30)));
        // only the 4x10 visible corner of the glyph cell is drawn
        assert_eq!(count_in(&mem, 0, 0, W, H, Color::WHITE), (W * H) as usize - 4 * 10);
    }
}
