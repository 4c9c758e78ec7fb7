use std::fmt;

use serde::{Serialize, Serializer};

/// A duration in seconds, rendered in CSS `s` notation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Seconds(pub f32);

/// Constructs a `Seconds` value.
pub const fn seconds(value: f32) -> Seconds {
    Seconds(value)
}

impl Seconds {
    pub fn to_f32(self) -> f32 {
        self.0
    }

    /// True when the duration is a usable animation length.
    pub fn is_finite_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl Serialize for Seconds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
