//! RGB565 colors, as stored in the framebuffer.

use core::fmt;

use bytemuck::{Pod, Zeroable};

/// A 16-bit color: 5 bits red, 6 bits green, 5 bits blue.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color(u16);

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED:   Color = Color::rgb(0xff, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    pub const BLUE:  Color = Color::rgb(0x00, 0x00, 0xff);

    /// Make a color from 8-bit channels, dropping the low bits.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// Make a color from its native channels (red and blue 0..=31, green 0..=63).
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Color((((r & 0x1f) as u16) << 11) | (((g & 0x3f) as u16) << 5) | ((b & 0x1f) as u16))
    }

    pub const fn from_raw(raw: u16) -> Self {
        Color(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Native channels (red, green, blue) at 5/6/5 bits.
    pub const fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 11) as u8, ((self.0 >> 5) & 0x3f) as u8, (self.0 & 0x1f) as u8)
    }

    pub const fn red(self) -> u8 {
        let r = (self.0 >> 11) as u8;
        (r << 3) | (r >> 2)
    }

    pub const fn green(self) -> u8 {
        let g = ((self.0 >> 5) & 0x3f) as u8;
        (g << 2) | (g >> 4)
    }

    pub const fn blue(self) -> u8 {
        let b = (self.0 & 0x1f) as u8;
        (b << 3) | (b >> 2)
    }

    /// Expand to 0RGB with 8 bits per channel.
    pub const fn to_rgb888(self) -> u32 {
        (self.red() as u32) << 16 | (self.green() as u32) << 8 | self.blue() as u32
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_channels_expand_to_full_bytes() {
        assert_eq!(Color::WHITE.raw(), 0xffff);
        assert_eq!(Color::WHITE.to_rgb888(), 0xffffff);
        assert_eq!(Color::RED.channels(), (31, 0, 0));
        assert_eq!(Color::GREEN.channels(), (0, 63, 0));
        assert_eq!(Color::BLUE.to_rgb888(), 0x0000ff);
    }

    #[test]
    fn channels_round_trip() {
        let c = Color::from_channels(12, 40, 7);
        assert_eq!(c.channels(), (12, 40, 7));
        assert_eq!(Color::from_raw(c.raw()), c);
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", Color::rgb(0xff, 0x80, 0x00)), "#ff8200");
    }
}
