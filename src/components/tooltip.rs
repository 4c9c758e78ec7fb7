//! Tooltip trigger and hover-disclosed content.
//!
//! Visibility is a pure cascade toggle: content is hidden at rest and shown
//! only while the trigger matches `:hover`, so the disclosure reverts on its
//! own and can be restarted indefinitely.

use quest_theme_units::{DefiniteLength, px};

use crate::{
    components::{Role, SelectorMap},
    css::{BorderStyle, Declaration, Easing, Rule, Value},
    theme::{BorderKind, ColorTokenKind, FontKind, PaddingKind, Theme},
};

pub(crate) fn rules(theme: &Theme, selectors: &SelectorMap) -> Vec<Rule> {
    let body = FontKind::Body.resolve(theme);
    let trigger = selectors.selector(Role::TooltipTrigger);
    let content = selectors.selector(Role::TooltipContent);

    vec![
        Rule::new(trigger)
            .decl("position", Value::Keyword("relative"))
            .decl("cursor", Value::Keyword("help"))
            .decl(
                "border-bottom",
                Value::Border {
                    width: BorderKind::Hairline.resolve(theme),
                    style: BorderStyle::Dotted,
                    color: ColorTokenKind::CoralLight,
                },
            ),
        Rule::new(format!("{trigger} > {content}"))
            .decl("visibility", Value::Keyword("hidden"))
            .decl("opacity", Value::Float(0.))
            .decl("position", Value::Keyword("absolute"))
            .decl("bottom", Value::Relative(DefiniteLength::Fraction(1.25)))
            .decl("left", Value::Px(px(0.)))
            .decl("min-width", Value::Px(px(160.)))
            .decl("z-index", Value::Integer(10))
            .push(Declaration::new("font-family", Value::FontStack(body.family.clone())).important())
            .decl("color", Value::Token(ColorTokenKind::TextPrimary))
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlue))
            .decl(
                "border",
                Value::Border {
                    width: BorderKind::Hairline.resolve(theme),
                    style: BorderStyle::Solid,
                    color: ColorTokenKind::CoralMain,
                },
            )
            .decl("padding", Value::Px(PaddingKind::Md.resolve(theme)))
            .decl(
                "transition",
                Value::Transition {
                    property: "opacity",
                    duration: theme.animation.tooltip_fade,
                    easing: Easing::Ease,
                },
            ),
        Rule::new(format!("{trigger}:hover > {content}"))
            .decl("visibility", Value::Keyword("visible"))
            .decl("opacity", Value::Float(1.)),
    ]
}
