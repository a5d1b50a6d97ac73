//! Color utilities for channel packing.

/// Fixed-point weight of the red component (0.299 * 65536).
const LUMA_R: u32 = 19595;
/// Fixed-point weight of the green component (0.587 * 65536).
const LUMA_G: u32 = 38470;
/// Fixed-point weight of the blue component (0.114 * 65536).
const LUMA_B: u32 = 7471;

/// Calculate 8-bit luminance from 8-bit RGB values (ITU-R BT.601).
///
/// Uses 16.16 fixed-point weights with round-to-nearest, so a gray input
/// `(v, v, v)` always maps back to exactly `v`.
#[inline]
pub fn luminance8(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
    ((sum + 0x8000) >> 16) as u8
}

/// Reduce a 16-bit sample to 8 bits with rounding.
#[inline]
pub fn narrow16(value: u16) -> u8 {
    ((value as u32 * 255 + 32767) / 65535) as u8
}
