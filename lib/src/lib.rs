#![cfg_attr(not(test), no_std)]

//! Anti-aliased bitmap fonts for small displays.
//!
//! Glyphs are stored compressed in flash and expanded on demand into a
//! stack-allocated [`GlyphBuffer`], where combining marks can be merged onto
//! their base glyph before the grayscale samples are turned into colors.

pub mod code_point;
pub mod color;
pub mod palette;
pub mod index;
pub mod store;
pub mod decompress;
pub mod buffer;
pub mod font;
pub mod framebuf;
mod fonts;

pub use buffer::{BufferState, GlyphBuffer};
pub use code_point::CodePoint;
pub use color::Color;
pub use font::{Font, can_be_written_with_glyphs};
pub use fonts::{LARGE_FONT, SMALL_FONT};
pub use framebuf::FrameBuffer;
pub use index::{CodePointIndexPair, GlyphIndex, REPLACEMENT_GLYPH_INDEX};
pub use palette::Palette;

/// Depth of the grayscale samples stored in the font assets.
pub const BITS_PER_PIXEL: usize = 4;

/// Largest glyph (width * height) any font may contain.
pub const MAX_GLYPH_PIXEL_COUNT: usize = 180;

/// Number of glyph cells a tabulation advances.
pub const TAB_WIDTH: u16 = 4;

/// Palette mapping every grayscale sample to a color.
pub type RenderPalette = Palette<{ 1 << BITS_PER_PIXEL }>;

/// Misuse of a [`GlyphBuffer`] outside its decode/colorize cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("glyph buffer holds no decoded glyph")]
    NotDecoded,
    #[error("glyph buffer is already colorized")]
    AlreadyColorized,
    #[error("glyph buffer has not been colorized")]
    NotColorized,
    #[error("no base glyph to put a combining mark on")]
    NoBaseGlyph,
    #[error("glyph buffer holds a glyph of another size")]
    SizeMismatch,
}
