use std::fmt;

use quest_theme_units::{AbsoluteLength, DefiniteLength, Pixels, Seconds};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::theme::ColorTokenKind;

/// CSS timing functions.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        })
    }
}

/// CSS border line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        })
    }
}

/// A typed declaration value.
///
/// Color references are only expressible as [`ColorTokenKind`] variables, so
/// a component rule cannot smuggle a literal color past the palette.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A palette token reference, rendered as `var(--name)`.
    Token(ColorTokenKind),
    Px(Pixels),
    Length(AbsoluteLength),
    Relative(DefiniteLength),
    Time(Seconds),
    Float(f32),
    Integer(i64),
    Keyword(&'static str),
    /// A font family stack; non-generic families are quoted.
    FontStack(SmallVec<[String; 1]>),
    /// A hard pixel-art shadow: equal x/y offset, zero blur.
    HardShadow {
        offset: Pixels,
        color: ColorTokenKind,
    },
    Border {
        width: Pixels,
        style: BorderStyle,
        color: ColorTokenKind,
    },
    Translate {
        x: Pixels,
        y: Pixels,
    },
    Scale(f32),
    Transition {
        property: &'static str,
        duration: Seconds,
        easing: Easing,
    },
    /// An animation shorthand that plays a fixed number of cycles and then
    /// holds the final keyframe (`forwards` fill).
    Animation {
        name: String,
        duration: Seconds,
        easing: Easing,
        iterations: u32,
    },
}

fn is_generic_family(family: &str) -> bool {
    matches!(
        family,
        "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" | "system-ui"
    )
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Token(token) => write!(f, "var({})", token.var_name()),
            Value::Px(pixels) => pixels.fmt(f),
            Value::Length(length) => length.fmt(f),
            Value::Relative(length) => length.fmt(f),
            Value::Time(seconds) => seconds.fmt(f),
            Value::Float(value) => value.fmt(f),
            Value::Integer(value) => value.fmt(f),
            Value::Keyword(keyword) => f.write_str(keyword),

            Value::FontStack(families) => {
                for (i, family) in families.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    if is_generic_family(family) {
                        f.write_str(family)?;
                    } else {
                        write!(f, "'{family}'")?;
                    }
                }

                Ok(())
            }

            Value::HardShadow { offset, color } => {
                write!(f, "{offset} {offset} 0px var({})", color.var_name())
            }

            Value::Border {
                width,
                style,
                color,
            } => write!(f, "{width} {style} var({})", color.var_name()),

            Value::Translate { x, y } => write!(f, "translate({x}, {y})"),
            Value::Scale(factor) => write!(f, "scale({factor})"),

            Value::Transition {
                property,
                duration,
                easing,
            } => write!(f, "{property} {duration} {easing}"),

            Value::Animation {
                name,
                duration,
                easing,
                iterations,
            } => write!(f, "{name} {duration} {easing} {iterations} forwards"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_theme_units::{px, seconds};
    use smallvec::smallvec;

    #[test]
    fn test_token_renders_as_var_reference() {
        assert_eq!(
            Value::Token(ColorTokenKind::CoralMain).to_string(),
            "var(--coral-main)"
        );
    }

    #[test]
    fn test_font_stack_quotes_non_generic_families() {
        let value = Value::FontStack(smallvec!["Space Mono".into(), "monospace".into()]);
        assert_eq!(value.to_string(), "'Space Mono', monospace");
    }

    #[test]
    fn test_hard_shadow_has_equal_offsets_and_zero_blur() {
        let value = Value::HardShadow {
            offset: px(4.),
            color: ColorTokenKind::CoralDark,
        };
        assert_eq!(value.to_string(), "4px 4px 0px var(--coral-dark)");
    }

    #[test]
    fn test_border_shorthand() {
        let value = Value::Border {
            width: px(4.),
            style: BorderStyle::Dashed,
            color: ColorTokenKind::CoralLight,
        };
        assert_eq!(value.to_string(), "4px dashed var(--coral-light)");
    }

    #[test]
    fn test_transform_values() {
        assert_eq!(
            Value::Translate { x: px(2.), y: px(2.) }.to_string(),
            "translate(2px, 2px)"
        );
        assert_eq!(Value::Scale(0.5).to_string(), "scale(0.5)");
    }

    #[test]
    fn test_transition_and_animation_shorthands() {
        let transition = Value::Transition {
            property: "all",
            duration: seconds(0.1),
            easing: Easing::Ease,
        };
        assert_eq!(transition.to_string(), "all 0.1s ease");

        let animation = Value::Animation {
            name: "achievement-unlock".into(),
            duration: seconds(0.5),
            easing: Easing::Ease,
            iterations: 1,
        };
        assert_eq!(
            animation.to_string(),
            "achievement-unlock 0.5s ease 1 forwards",
            "Unlock animation should play once and hold its final keyframe"
        );
    }

    #[test]
    fn test_easing_serde_uses_kebab_case() {
        let easing: Easing = serde_json::from_str("\"ease-in-out\"").unwrap();
        assert_eq!(easing, Easing::EaseInOut);
        assert_eq!(serde_json::to_string(&Easing::Ease).unwrap(), "\"ease\"");
    }
}
