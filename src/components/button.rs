//! Primary button styling with its hover and active state variants.

use quest_theme_units::{Pixels, Seconds, px};

use crate::{
    animation::press_shift,
    components::{Role, SelectorMap},
    css::{BorderStyle, Declaration, Easing, Rule, Value},
    theme::{BorderKind, ColorTokenKind, FontKind, ShadowKind, Theme},
};

/// Fully resolved button treatment: every state's declaration block derives
/// from this one set of tokens and offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct GranularButtonStyle {
    pub fill: ColorTokenKind,
    pub text: ColorTokenKind,
    /// Border and hard-shadow color.
    pub edge: ColorTokenKind,
    pub border_width: Pixels,
    /// Hard-shadow offset at rest.
    pub rest_offset: Pixels,
    /// Hard-shadow offset while hovered.
    pub hover_offset: Pixels,
    pub transition: Seconds,
    pub easing: Easing,
}

impl GranularButtonStyle {
    pub fn primary(theme: &Theme) -> Self {
        Self {
            fill: ColorTokenKind::CoralMain,
            text: ColorTokenKind::TextPrimary,
            edge: ColorTokenKind::CoralDark,
            border_width: BorderKind::Thick.resolve(theme),
            rest_offset: ShadowKind::Raised.resolve(theme),
            hover_offset: ShadowKind::Pressed.resolve(theme),
            transition: theme.animation.press_duration,
            easing: Easing::Ease,
        }
    }
}

pub(crate) fn rules(theme: &Theme, selectors: &SelectorMap) -> Vec<Rule> {
    let style = GranularButtonStyle::primary(theme);
    let heading = FontKind::Heading.resolve(theme);
    let selector = selectors.selector(Role::PrimaryButton);

    let hover_shift = press_shift(style.rest_offset, style.hover_offset);
    let active_shift = style.rest_offset;

    vec![
        Rule::new(selector)
            .push(
                Declaration::new("font-family", Value::FontStack(heading.family.clone()))
                    .important(),
            )
            .decl("background-color", Value::Token(style.fill))
            .decl("color", Value::Token(style.text))
            .decl(
                "border",
                Value::Border {
                    width: style.border_width,
                    style: BorderStyle::Solid,
                    color: style.edge,
                },
            )
            .decl(
                "box-shadow",
                Value::HardShadow {
                    offset: style.rest_offset,
                    color: style.edge,
                },
            )
            .decl(
                "transition",
                Value::Transition {
                    property: "all",
                    duration: style.transition,
                    easing: style.easing,
                },
            )
            .decl("cursor", Value::Keyword("pointer")),
        // Hover trades shadow for translation so the button appears to move
        // into the page.
        Rule::new(format!("{selector}:hover"))
            .decl(
                "box-shadow",
                Value::HardShadow {
                    offset: style.hover_offset,
                    color: style.edge,
                },
            )
            .decl(
                "transform",
                Value::Translate {
                    x: hover_shift,
                    y: hover_shift,
                },
            ),
        Rule::new(format!("{selector}:active"))
            .decl(
                "box-shadow",
                Value::HardShadow {
                    offset: px(0.),
                    color: style.edge,
                },
            )
            .decl(
                "transform",
                Value::Translate {
                    x: active_shift,
                    y: active_shift,
                },
            ),
    ]
}
