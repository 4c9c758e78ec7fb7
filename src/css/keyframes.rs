use std::fmt;

use thiserror::Error;

use crate::css::Declaration;

/// A named `@keyframes` sequence with percentage stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub(crate) name: String,
    pub(crate) stops: Vec<KeyframeStop>,
}

/// One keyframe at `offset` percent of the animation timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeStop {
    pub offset: f32,
    pub declarations: Vec<Declaration>,
}

impl KeyframeStop {
    pub fn new(offset: f32, declarations: Vec<Declaration>) -> Self {
        Self {
            offset,
            declarations,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum KeyframesError {
    #[error("a keyframe sequence needs at least one stop")]
    Empty,
    #[error("keyframe offset {0}% is outside the 0-100 range")]
    OutOfRange(f32),
    #[error("keyframe offsets must be strictly increasing")]
    NotIncreasing,
    #[error("a keyframe sequence must start at 0% and end at 100%")]
    Unanchored,
}

impl Keyframes {
    /// Builds a validated sequence: stops are strictly increasing in offset,
    /// anchored at 0% and 100%.
    pub fn new(
        name: impl Into<String>,
        stops: Vec<KeyframeStop>,
    ) -> Result<Self, KeyframesError> {
        let Some((first, last)) = stops.first().zip(stops.last()) else {
            return Err(KeyframesError::Empty);
        };

        if first.offset != 0. || last.offset != 100. {
            return Err(KeyframesError::Unanchored);
        }

        for stop in &stops {
            if !(0. ..=100.).contains(&stop.offset) {
                return Err(KeyframesError::OutOfRange(stop.offset));
            }
        }

        if stops.windows(2).any(|pair| pair[0].offset >= pair[1].offset) {
            return Err(KeyframesError::NotIncreasing);
        }

        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[KeyframeStop] {
        &self.stops
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {} {{", self.name)?;

        for stop in &self.stops {
            writeln!(f, "    {}% {{", stop.offset)?;

            for declaration in &stop.declarations {
                writeln!(f, "        {declaration};")?;
            }

            writeln!(f, "    }}")?;
        }

        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::Value;

    fn stop(offset: f32) -> KeyframeStop {
        KeyframeStop::new(offset, vec![Declaration::new("opacity", Value::Float(1.))])
    }

    #[test]
    fn test_valid_sequence() {
        let keyframes =
            Keyframes::new("pop", vec![stop(0.), stop(70.), stop(100.)]).unwrap();
        assert_eq!(keyframes.name(), "pop");
        assert_eq!(keyframes.stops().len(), 3);
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_eq!(Keyframes::new("pop", vec![]), Err(KeyframesError::Empty));
    }

    #[test]
    fn test_unanchored_sequence_is_rejected() {
        assert_eq!(
            Keyframes::new("pop", vec![stop(10.), stop(100.)]),
            Err(KeyframesError::Unanchored),
            "A sequence not starting at 0% should be rejected"
        );
        assert_eq!(
            Keyframes::new("pop", vec![stop(0.), stop(90.)]),
            Err(KeyframesError::Unanchored),
            "A sequence not ending at 100% should be rejected"
        );
    }

    #[test]
    fn test_non_increasing_offsets_are_rejected() {
        assert_eq!(
            Keyframes::new("pop", vec![stop(0.), stop(80.), stop(70.), stop(100.)]),
            Err(KeyframesError::NotIncreasing)
        );
    }

    #[test]
    fn test_display_renders_nested_blocks() {
        let keyframes = Keyframes::new("pop", vec![stop(0.), stop(100.)]).unwrap();
        let rendered = keyframes.to_string();

        assert!(rendered.starts_with("@keyframes pop {"));
        assert!(rendered.contains("    0% {"));
        assert!(rendered.contains("        opacity: 1;"));
        assert!(rendered.ends_with("}"));
    }
}
