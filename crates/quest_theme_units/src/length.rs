use std::fmt;

use serde::{Serialize, Serializer};

/// A length in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pixels(pub f32);

/// Constructs a `Pixels` value.
pub const fn px(value: f32) -> Pixels {
    Pixels(value)
}

impl Pixels {
    pub fn to_f32(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A length relative to the root font size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rems(pub f32);

/// Constructs a `Rems` value.
pub const fn rems(value: f32) -> Rems {
    Rems(value)
}

impl fmt::Display for Rems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rem", self.0)
    }
}

/// A length with a fixed value, either in pixels or rems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbsoluteLength {
    Pixels(Pixels),
    Rems(Rems),
}

impl fmt::Display for AbsoluteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsoluteLength::Pixels(pixels) => pixels.fmt(f),
            AbsoluteLength::Rems(rems) => rems.fmt(f),
        }
    }
}

impl From<Pixels> for AbsoluteLength {
    fn from(value: Pixels) -> Self {
        AbsoluteLength::Pixels(value)
    }
}

impl From<Rems> for AbsoluteLength {
    fn from(value: Rems) -> Self {
        AbsoluteLength::Rems(value)
    }
}

/// An absolute length, or a fraction of a reference size (a line height of
/// `1.1` renders as `110%`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefiniteLength {
    Absolute(AbsoluteLength),
    Fraction(f32),
}

impl fmt::Display for DefiniteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefiniteLength::Absolute(length) => length.fmt(f),

            DefiniteLength::Fraction(fraction) => {
                // Percentages pass through f32 twice (parse then render), so
                // snap to three decimal places to keep `110%` printing as such.
                let percent = (fraction * 100. * 1000.).round() / 1000.;
                write!(f, "{percent}%")
            }
        }
    }
}

impl From<AbsoluteLength> for DefiniteLength {
    fn from(value: AbsoluteLength) -> Self {
        DefiniteLength::Absolute(value)
    }
}

impl From<Pixels> for DefiniteLength {
    fn from(value: Pixels) -> Self {
        DefiniteLength::Absolute(value.into())
    }
}

macro_rules! serialize_as_display {
    ( $( $type:ty ),+ ) => {
        $(
            impl Serialize for $type {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.to_string())
                }
            }
        )+
    };
}

serialize_as_display!(Pixels, Rems, AbsoluteLength, DefiniteLength);
