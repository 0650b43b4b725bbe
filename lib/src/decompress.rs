//! Glyph decompression.
//!
//! The rasterizer packs the 4-bit samples of a glyph two per byte (low
//! nibble first) and run-length encodes those bytes in packets:
//!
//! - `0x00..=0x7f`: literal, the next `op + 1` bytes are copied;
//! - `0x80..=0xff`: run, the next byte is repeated `(op & 0x7f) + 1` times.

use crate::BITS_PER_PIXEL;

const RUN_FLAG: u8 = 0x80;
const LEN_MASK: u8 = 0x7f;
const SAMPLE_MASK: u8 = (1 << BITS_PER_PIXEL) - 1;

/// Expand the run-length packets in `compressed` into `out`.
///
/// Returns the number of bytes the packets describe, which may differ from
/// `out.len()` for a broken asset; bytes beyond `out` are dropped.
fn expand_runs(compressed: &[u8], out: &mut [u8]) -> usize {
    let mut src = compressed.iter().copied();
    let mut written = 0;
    while let Some(op) = src.next() {
        if op & RUN_FLAG != 0 {
            let len = (op & LEN_MASK) as usize + 1;
            let value = src.next().unwrap_or(0);
            let end = (written + len).min(out.len());
            if written < end {
                out[written..end].iter_mut().for_each(|b| *b = value);
            }
            written += len;
        } else {
            for byte in src.by_ref().take(op as usize + 1) {
                if let Some(b) = out.get_mut(written) {
                    *b = byte;
                }
                written += 1;
            }
        }
    }
    written
}

/// Decompress one glyph into `samples`, one sample (0..=15) per byte.
///
/// The whole of `samples` is filled; its length is the glyph's pixel count.
pub fn decompress(compressed: &[u8], samples: &mut [u8]) {
    let count = samples.len();
    let packed_len = (count + 1) / 2;
    let written = expand_runs(compressed, &mut samples[..packed_len]);
    debug_assert_eq!(written, packed_len, "glyph data does not match the glyph size");
    if written < packed_len {
        samples[written..packed_len].iter_mut().for_each(|b| *b = 0);
    }
    // Unpack in place from the back: sample i comes from packed byte i/2,
    // which is never behind i, so it is read before being overwritten.
    for i in (0..count).rev() {
        let shift = (i & 1) * BITS_PER_PIXEL;
        samples[i] = (samples[i / 2] >> shift) & SAMPLE_MASK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_packet() {
        let mut out = [0xaa; 4];
        decompress(&[0x01, 0xf0, 0x3c], &mut out);
        assert_eq!(out, [0x0, 0xf, 0xc, 0x3]);
    }

    #[test]
    fn run_packet() {
        let mut out = [0; 6];
        decompress(&[0x82, 0x75], &mut out);
        assert_eq!(out, [5, 7, 5, 7, 5, 7]);
    }

    #[test]
    fn mixed_packets_odd_size() {
        // 7 samples = 4 packed bytes, the last one padded
        let mut out = [0; 7];
        decompress(&[0x81, 0x00, 0x01, 0x21, 0x09], &mut out);
        assert_eq!(out, [0, 0, 0, 0, 1, 2, 9]);
    }

    #[test]
    fn long_run() {
        let mut out = [0xff; 180];
        decompress(&[0xd9, 0x00], &mut out);
        assert!(out.iter().all(|&s| s == 0));
    }

    #[test]
    fn excess_output_is_dropped() {
        let mut packed = [0; 2];
        assert_eq!(expand_runs(&[0x83, 0x11, 0x00, 0x22], &mut packed), 5);
        assert_eq!(packed, [0x11, 0x11]);
    }

    #[test]
    fn truncated_literal_stops_at_the_end() {
        let mut packed = [0; 4];
        assert_eq!(expand_runs(&[0x03, 0x12, 0x34], &mut packed), 2);
        assert_eq!(packed, [0x12, 0x34, 0, 0]);
    }
}
