//! Feature extraction from a hex digest.
//!
//! Offsets are positions in the hex string, not byte indices: offset 2
//! reads the second digest byte. Every read is bounds-checked.

use crate::color::Color;
use crate::error::{IdenticonError, IdenticonResult};
use crate::hash::Digest;

/// Values below this threshold decode to a set bit.
pub const BIT_THRESHOLD: u8 = 150;

/// Hex offset of the center-shape color.
pub const CENTER_COLOR_OFFSET: usize = 0;

/// Hex offset of the boundary-triangle color.
pub const BOUNDARY_COLOR_OFFSET: usize = 6;

/// Hex offset of the interior effect-triangle color.
pub const INTERIOR_COLOR_OFFSET: usize = 12;

/// Hex characters consumed by one color read.
pub const COLOR_WIDTH: usize = 6;

fn hex_slice(hash: &str, offset: usize, width: usize) -> IdenticonResult<&str> {
    let slice = offset
        .checked_add(width)
        .and_then(|end| hash.get(offset..end))
        .ok_or(IdenticonError::DigestOutOfRange {
            offset,
            width,
            len: hash.len(),
        })?;
    if slice.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(slice)
    } else {
        Err(IdenticonError::InvalidHex { offset })
    }
}

/// Read the hex pair at `offset` and return 1 if it is below 150, else 0.
///
/// ```
/// use glyphid::decode::bit;
///
/// assert_eq!(bit("95", 0).unwrap(), 1); // 149
/// assert_eq!(bit("96", 0).unwrap(), 0); // 150
/// ```
pub fn bit(hash: &str, offset: usize) -> IdenticonResult<u8> {
    let pair = hex_slice(hash, offset, 2)?;
    let value = u8::from_str_radix(pair, 16).map_err(|_| IdenticonError::InvalidHex { offset })?;
    Ok(u8::from(value < BIT_THRESHOLD))
}

/// Read six hex characters at `offset` as an RGB color.
pub fn color_at(hash: &str, offset: usize) -> IdenticonResult<Color> {
    let digits = hex_slice(hash, offset, COLOR_WIDTH)?;
    Color::from_hex_digits(digits).ok_or(IdenticonError::InvalidHex { offset })
}

// =============================================================================
// Palette
// =============================================================================

/// The three fixed colors of one identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Center shape color (hex offset 0)
    pub center: Color,
    /// Boundary triangle color (hex offset 6)
    pub boundary: Color,
    /// Interior effect-triangle color (hex offset 12)
    pub interior: Color,
}

impl Palette {
    /// Slice the palette out of a digest.
    pub fn from_digest(digest: &Digest) -> IdenticonResult<Self> {
        let hex = digest.as_hex();
        Ok(Self {
            center: color_at(hex, CENTER_COLOR_OFFSET)?,
            boundary: color_at(hex, BOUNDARY_COLOR_OFFSET)?,
            interior: color_at(hex, INTERIOR_COLOR_OFFSET)?,
        })
    }
}
