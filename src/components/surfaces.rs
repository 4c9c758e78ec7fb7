//! Container surfaces: metric cards, progress fill, data tables, and the
//! sidebar panel.

use crate::{
    components::{Role, SelectorMap},
    css::{BorderStyle, Declaration, Rule, Value},
    theme::{BorderKind, ColorTokenKind, FontKind, PaddingKind, ShadowKind, Theme},
};

pub(crate) fn rules(theme: &Theme, selectors: &SelectorMap) -> Vec<Rule> {
    let body = FontKind::Body.resolve(theme);

    vec![
        Rule::new(selectors.selector(Role::MetricCard))
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlue))
            .decl(
                "border",
                Value::Border {
                    width: BorderKind::Thick.resolve(theme),
                    style: BorderStyle::Solid,
                    color: ColorTokenKind::CoralMain,
                },
            )
            .decl("padding", Value::Px(PaddingKind::Lg.resolve(theme)))
            .decl("border-radius", Value::Px(theme.layout.corner_radius))
            .decl(
                "box-shadow",
                Value::HardShadow {
                    offset: ShadowKind::Lifted.resolve(theme),
                    color: ColorTokenKind::CoralDark,
                },
            )
            .decl("margin-bottom", Value::Px(PaddingKind::Lg.resolve(theme))),
        Rule::new(selectors.selector(Role::ProgressFill))
            .decl("background-color", Value::Token(ColorTokenKind::CoralMain)),
        Rule::new(selectors.selector(Role::DataTable))
            .push(Declaration::new("font-family", Value::FontStack(body.family.clone())).important())
            .decl("color", Value::Token(ColorTokenKind::TextPrimary))
            .decl(
                "border",
                Value::Border {
                    width: BorderKind::Hairline.resolve(theme),
                    style: BorderStyle::Solid,
                    color: ColorTokenKind::CoralDark,
                },
            ),
        Rule::new(selectors.selector(Role::Sidebar))
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlue))
            .decl(
                "border-right",
                Value::Border {
                    width: BorderKind::Thick.resolve(theme),
                    style: BorderStyle::Solid,
                    color: ColorTokenKind::CoralDark,
                },
            )
            .decl("padding", Value::Px(PaddingKind::Md.resolve(theme))),
    ]
}
