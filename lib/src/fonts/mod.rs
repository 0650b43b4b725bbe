//! The built-in fonts.

use crate::font::Font;

mod code_points;

/// 10x18 pixel font.
pub static LARGE_FONT: Font = include!("font_large.rs");

/// 7x14 pixel font.
pub static SMALL_FONT: Font = include!("font_small.rs");
