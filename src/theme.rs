use derive_more::Deref;
use palette::{Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Unknown color '{0}': expected #RGB, #RRGGBB or a CSS color name")]
    Unknown(String),
}

/// An sRGBA fill color, parsed from hex notation or a CSS color name.
#[derive(Debug, Clone, Copy, PartialEq, Deref, DeserializeFromStr, SerializeDisplay)]
pub struct Color(Srgba<f64>);

impl Color {
    pub const TRANSPARENT: Self = Self(Srgba::new(0.0, 0.0, 0.0, 0.0));

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(Srgb::new(r, g, b))
    }

    fn from_srgb(rgb: Srgb<u8>) -> Self {
        let (r, g, b) = rgb.into_format::<f64>().into_components();
        Self(Srgba::new(r, g, b, 1.0))
    }

    pub fn opacity(&self) -> f64 {
        self.0.alpha
    }

    pub fn is_transparent(&self) -> bool {
        self.0.alpha <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if s.starts_with('#') {
            return Srgb::<u8>::from_str(s)
                .map(Self::from_srgb)
                .map_err(|_| ColorParseError::Unknown(s.to_string()));
        }
        palette::named::from_str(&s.to_ascii_lowercase())
            .map(Self::from_srgb)
            .ok_or_else(|| ColorParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transparent() {
            return f.write_str("transparent");
        }
        let (r, g, b, _) = self.0.into_format::<u8, u8>().into_components();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Colors for the chart chrome that do not belong to any segment.
#[derive(Debug, Clone)]
pub struct Theme {
    pub spoke: Color,
    pub track_inactive: Color,
    pub text: Color,
    pub placeholder_stroke: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            spoke: Color::rgb(0xb5, 0xb5, 0xb5),
            track_inactive: Color::rgb(0x12, 0x34, 0x56),
            text: Color::rgb(0x22, 0x22, 0x22),
            placeholder_stroke: Color::rgb(0xe0, 0xe0, 0xe0),
        }
    }
}
