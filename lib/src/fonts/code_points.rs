//! Code points covered by the embedded fonts.
//!
//! Generated by the font rasterizer together with the glyph data; both
//! embedded fonts share this table.  Do not edit by hand.

use crate::index::CodePointIndexPair;

/// First code point of every run of consecutive code points, with the
/// glyph index of that first code point.
pub const CODE_POINT_TABLE: [CodePointIndexPair; 23] = [
    CodePointIndexPair::new(0x0020, 0),
    CodePointIndexPair::new(0x00b0, 95),
    CodePointIndexPair::new(0x00b7, 96),
    CodePointIndexPair::new(0x00c6, 97),
    CodePointIndexPair::new(0x00d0, 98),
    CodePointIndexPair::new(0x00d7, 99),
    CodePointIndexPair::new(0x00de, 101),
    CodePointIndexPair::new(0x00e6, 103),
    CodePointIndexPair::new(0x00f0, 104),
    CodePointIndexPair::new(0x00f7, 105),
    CodePointIndexPair::new(0x00fe, 107),
    CodePointIndexPair::new(0x0300, 108),
    CodePointIndexPair::new(0x030a, 117),
    CodePointIndexPair::new(0x0327, 118),
    CodePointIndexPair::new(0x0393, 119),
    CodePointIndexPair::new(0x03a3, 121),
    CodePointIndexPair::new(0x03a9, 122),
    CodePointIndexPair::new(0x03b1, 123),
    CodePointIndexPair::new(0x03bb, 128),
    CodePointIndexPair::new(0x03c0, 129),
    CodePointIndexPair::new(0x2192, 130),
    CodePointIndexPair::new(0x2264, 131),
    CodePointIndexPair::new(0xfffd, 133),
];
