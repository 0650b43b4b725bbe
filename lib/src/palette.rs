//! Fixed-size color palettes.

use core::ops::Index;

use crate::color::Color;

/// A palette of `N` colors.  For text the order is `[bg, .., fg]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette<const N: usize>([Color; N]);

impl<const N: usize> Palette<N> {
    pub const fn new(colors: [Color; N]) -> Self {
        Palette(colors)
    }

    /// Gradient from `background` (index 0) to `text` (index N-1), each
    /// channel interpolated linearly and rounded to nearest.
    pub fn gradient(text: Color, background: Color) -> Self {
        let mut colors = [background; N];
        if N < 2 {
            return Palette(colors);
        }
        let (tr, tg, tb) = text.channels();
        let (br, bg, bb) = background.channels();
        let steps = (N - 1) as i32;
        let lerp = |from: u8, to: u8, i: i32| {
            let delta = (to as i32 - from as i32) * i;
            // round half away from zero, so that both directions are symmetric
            let rounded = if delta >= 0 { (delta + steps / 2) / steps } else { (delta - steps / 2) / steps };
            (from as i32 + rounded) as u8
        };
        for (i, color) in colors.iter_mut().enumerate() {
            let i = i as i32;
            *color = Color::from_channels(lerp(br, tr, i), lerp(bg, tg, i), lerp(bb, tb, i));
        }
        Palette(colors)
    }

    pub fn color_at(&self, index: usize) -> Color {
        self.0[index]
    }

    pub fn colors(&self) -> &[Color; N] {
        &self.0
    }

    pub const fn len(&self) -> usize {
        N
    }
}

impl<const N: usize> Index<usize> for Palette<N> {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderPalette;
    use pretty_assertions::assert_eq;

    fn assert_monotonic(values: impl Iterator<Item=u8>, rising: bool) {
        let values: Vec<u8> = values.collect();
        for pair in values.windows(2) {
            if rising {
                assert!(pair[0] <= pair[1], "{:?}", values);
            } else {
                assert!(pair[0] >= pair[1], "{:?}", values);
            }
        }
    }

    #[test]
    fn gradient_endpoints() {
        let fg = Color::rgb(0x20, 0xc0, 0x40);
        let bg = Color::rgb(0xf0, 0x10, 0x80);
        let pal = RenderPalette::gradient(fg, bg);
        assert_eq!(pal.len(), 16);
        assert_eq!(pal[0], bg);
        assert_eq!(pal[15], fg);
    }

    #[test]
    fn gradient_is_monotonic_per_channel() {
        let fg = Color::rgb(0x20, 0xc0, 0x40);
        let bg = Color::rgb(0xf0, 0x10, 0x80);
        let pal = RenderPalette::gradient(fg, bg);
        assert_monotonic(pal.colors().iter().map(|c| c.channels().0), false);
        assert_monotonic(pal.colors().iter().map(|c| c.channels().1), true);
        assert_monotonic(pal.colors().iter().map(|c| c.channels().2), false);
    }

    #[test]
    fn black_on_white_is_gray_ramp() {
        let pal = RenderPalette::gradient(Color::BLACK, Color::WHITE);
        assert_eq!(pal[0], Color::WHITE);
        assert_eq!(pal[15], Color::BLACK);
        // 31 * 8 / 15 = 16.53 and 63 * 8 / 15 = 33.6
        assert_eq!(pal[8].channels(), (31 - 17, 63 - 34, 31 - 17));
        assert_monotonic(pal.colors().iter().map(|c| c.green()), false);
    }

    #[test]
    fn equal_colors_give_flat_palette() {
        let pal = Palette::<4>::gradient(Color::RED, Color::RED);
        assert_eq!(pal, Palette::new([Color::RED; 4]));
    }
}
