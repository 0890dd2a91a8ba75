//! RGB colors sliced from digest hex.

use std::fmt;

use compact_str::{CompactString, format_compact};

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black, the color of a zeroed digest slice.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six hex digits (`"1a2b3c"`), without a leading `#`.
    pub fn from_hex_digits(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `#rrggbb` in lowercase. Fits inline, no heap allocation.
    ///
    /// This is also the `Display` form.
    pub fn to_hex(&self) -> CompactString {
        format_compact!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opaque RGBA pixel.
    #[inline]
    pub const fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let color = Color::from_hex_digits("1a2b3c").unwrap();
        assert_eq!(color, Color::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(color.to_hex(), "#1a2b3c");
        assert_eq!(color.to_string(), "#1a2b3c");
        assert_eq!(color.to_rgba(), [0x1a, 0x2b, 0x3c, 255]);
    }

    #[test]
    fn test_display_matches_hex() {
        for color in [Color::BLACK, Color::rgb(0xff, 0x0a, 0x80), Color::rgb(1, 2, 3)] {
            assert_eq!(color.to_string(), color.to_hex());
        }
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!(Color::from_hex_digits("1a2b3").is_none());
        assert!(Color::from_hex_digits("#1a2b3").is_none());
        assert!(Color::from_hex_digits("1a2b3g").is_none());
    }
}
