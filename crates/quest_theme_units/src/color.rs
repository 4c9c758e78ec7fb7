use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

/// An RGBA color with components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Creates a fully opaque color from a hex value.
pub const fn rgb(hex: u32) -> Color {
    rgb_a(hex, 1.)
}

/// Creates a color from a hex value and alpha component.
pub const fn rgb_a(hex: u32, a: f32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();

    Color {
        r: (r as f32) / 255.0,
        g: (g as f32) / 255.0,
        b: (b as f32) / 255.0,
        a,
    }
}

impl Color {
    /// Renders the color in `#RRGGBB` form, or `#RRGGBBAA` when the alpha
    /// channel is not fully opaque.
    pub fn to_hex(&self) -> String {
        let channel = |value: f32| (value.clamp(0., 1.) * 255.).round() as u8;

        if self.a >= 1. {
            format!(
                "#{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                channel(self.a)
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected a color in '#RRGGBB' or '#RRGGBBAA' form, got {0:?}")]
    Malformed(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseColorError::Malformed(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(malformed)?;

        match hex.len() {
            6 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| malformed())?;
                Ok(rgb(value))
            }

            8 => {
                let value = u32::from_str_radix(hex, 16).map_err(|_| malformed())?;
                let alpha = ((value & 0xFF) as f32) / 255.0;
                Ok(rgb_a(value >> 8, alpha))
            }

            _ => Err(malformed()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(D::Error::custom)
    }
}
