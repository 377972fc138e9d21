//! Color implementation with hex parsing.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a color from a string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string is not 3, 6, or 8 hex digits (with optional leading `#`).
    #[error("invalid hex color length: expected 3, 6, or 8 digits, got {0}")]
    InvalidLength(usize),

    /// The string contains a non-hexadecimal character.
    #[error("invalid hex digit in color string: {0:?}")]
    InvalidDigit(char),
}

/// RGB color with values in 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red component (0.0 to 1.0).
    pub r: f32,
    /// Green component (0.0 to 1.0).
    pub g: f32,
    /// Blue component (0.0 to 1.0).
    pub b: f32,
}

impl Color {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    /// White (1, 1, 1).
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };
    /// Yellow (1, 1, 0).
    pub const YELLOW: Self = Self { r: 1.0, g: 1.0, b: 0.0 };
    /// Gray (0.5, 0.5, 0.5).
    pub const GRAY: Self = Self { r: 0.5, g: 0.5, b: 0.5 };

    /// Create a new color from RGB values (0.0-1.0).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self { r: a[0], g: a[1], b: a[2] }
    }

    /// Convert to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from a hex integer (0xRRGGBB).
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Convert to hex integer.
    pub fn to_hex(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }

    /// Parse from a hex string like `"#E7FAFF"`.
    ///
    /// Accepts `"RGB"`, `"RRGGBB"`, or `"RRGGBBAA"` with an optional leading
    /// `#`. Alpha digits are accepted and discarded; the scene background is
    /// opaque.
    pub fn from_hex_str(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        let value = |d: &str| u32::from_str_radix(d, 16).unwrap_or(0);
        match digits.len() {
            3 => {
                let v = value(digits);
                let (r, g, b) = ((v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF);
                // Expand each nibble: 0xA -> 0xAA
                Ok(Self::from_hex((r * 17) << 16 | (g * 17) << 8 | (b * 17)))
            }
            6 => Ok(Self::from_hex(value(digits))),
            8 => Ok(Self::from_hex(value(&digits[..6]))),
            n => Err(ParseColorError::InvalidLength(n)),
        }
    }

    /// Set components.
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.r = r;
        self.g = g;
        self.b = b;
        self
    }

    /// Multiply by a scalar (intensity scaling).
    #[inline]
    pub fn scale(&self, s: f32) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }

    /// Linear interpolation to another color.
    #[inline]
    pub fn lerp(&self, other: &Color, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_roundtrip() {
        let c = Color::from_hex(0xE7FAFF);
        assert_eq!(c.to_hex(), 0xE7FAFF);
    }

    #[test]
    fn test_from_hex_str_six_digits() {
        let c = Color::from_hex_str("#E7FAFF").unwrap();
        assert_eq!(c, Color::from_hex(0xE7FAFF));
    }

    #[test]
    fn test_from_hex_str_eight_digits_drops_alpha() {
        let c = Color::from_hex_str("#E7FAFFFF").unwrap();
        assert_eq!(c, Color::from_hex(0xE7FAFF));
    }

    #[test]
    fn test_from_hex_str_short_form() {
        let c = Color::from_hex_str("fff").unwrap();
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_from_hex_str_rejects_bad_input() {
        assert_eq!(
            Color::from_hex_str("#E7FA"),
            Err(ParseColorError::InvalidLength(4))
        );
        assert_eq!(
            Color::from_hex_str("#E7FAFG"),
            Err(ParseColorError::InvalidDigit('G'))
        );
    }
}
