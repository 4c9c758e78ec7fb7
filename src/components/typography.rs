//! App background, headings, body text, and the dashed divider.

use crate::{
    components::{Role, SelectorMap},
    css::{BorderStyle, Declaration, Rule, Value},
    theme::{BorderKind, ColorTokenKind, FontKind, ShadowKind, TextSizeKind, Theme},
};

pub(crate) fn rules(theme: &Theme, selectors: &SelectorMap) -> Vec<Rule> {
    let heading = FontKind::Heading.resolve(theme);
    let body = FontKind::Body.resolve(theme);

    vec![
        Rule::new(selectors.selector(Role::App))
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlack))
            .decl("font-size", Value::Px(theme.fonts.base_size)),
        // Headings carry the hard 2px text shadow that sells the pixel look.
        Rule::new(selectors.selector(Role::Heading))
            .push(
                Declaration::new("font-family", Value::FontStack(heading.family.clone()))
                    .important(),
            )
            .push(Declaration::new("color", Value::Token(ColorTokenKind::CoralMain)).important())
            .decl(
                "text-shadow",
                Value::HardShadow {
                    offset: ShadowKind::Pressed.resolve(theme),
                    color: ColorTokenKind::CoralDark,
                },
            )
            .decl("letter-spacing", Value::Px(heading.letter_spacing))
            .decl("line-height", Value::Relative(heading.line_height)),
        Rule::new(selectors.selector(Role::Body))
            .push(Declaration::new("font-family", Value::FontStack(body.family.clone())).important())
            .decl("color", Value::Token(ColorTokenKind::TextPrimary))
            .decl("font-size", Value::Length(TextSizeKind::Body.resolve(body)))
            .decl("line-height", Value::Relative(body.line_height)),
        Rule::new(selectors.selector(Role::Divider))
            .decl("border", Value::Keyword("none"))
            .decl(
                "border-top",
                Value::Border {
                    width: BorderKind::Thick.resolve(theme),
                    style: BorderStyle::Dashed,
                    color: ColorTokenKind::CoralLight,
                },
            ),
    ]
}
