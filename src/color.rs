use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub type Color = palette::Srgb<u8>;

pub const BLACK: Color = Color::new(0, 0, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a 6-digit hex color, with or without a leading '#'.
    InvalidColorFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidColorFormat(text) => write!(
                f,
                "invalid color '{}': expected 6 hex digits like '#FF5733'",
                text
            ),
        }
    }
}

impl std::error::Error for ColorError {}

/// Parses `#RRGGBB` or `RRGGBB` into a color.
pub fn parse_hex_color(text: &str) -> Result<Color, ColorError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(text.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidColorFormat(text.to_string()))
    };

    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Multiplies every channel by `intensity`, clamped to [0, 1]. Truncates.
pub fn scale(color: Color, intensity: f64) -> Color {
    let factor = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };
    let apply = |c: u8| (c as f64 * factor) as u8;

    Color::new(apply(color.red), apply(color.green), apply(color.blue))
}

/// Order in which the strip expects the three channels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PixelOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl PixelOrder {
    pub fn arrange(&self, color: Color) -> [u8; 3] {
        let (r, g, b) = color.into_components();
        match self {
            PixelOrder::Rgb => [r, g, b],
            PixelOrder::Rbg => [r, b, g],
            PixelOrder::Grb => [g, r, b],
            PixelOrder::Gbr => [g, b, r],
            PixelOrder::Brg => [b, r, g],
            PixelOrder::Bgr => [b, g, r],
        }
    }
}

impl FromStr for PixelOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RGB" => Ok(PixelOrder::Rgb),
            "RBG" => Ok(PixelOrder::Rbg),
            "GRB" => Ok(PixelOrder::Grb),
            "GBR" => Ok(PixelOrder::Gbr),
            "BRG" => Ok(PixelOrder::Brg),
            "BGR" => Ok(PixelOrder::Bgr),
            _ => Err(format!("unknown pixel order '{}'", s)),
        }
    }
}

impl TryFrom<String> for PixelOrder {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
