//! Input controls: slider, select box, multi-select, and text input.

use crate::{
    components::{Role, SelectorMap},
    css::{BorderStyle, Declaration, Rule, Value},
    theme::{BorderKind, ColorTokenKind, FontKind, PaddingKind, Theme},
};

/// Shared coral frame around a control container.
fn framed(selector: &str, theme: &Theme) -> Rule {
    Rule::new(selector)
        .decl(
            "border",
            Value::Border {
                width: BorderKind::Hairline.resolve(theme),
                style: BorderStyle::Solid,
                color: ColorTokenKind::CoralDark,
            },
        )
        .decl("padding", Value::Px(PaddingKind::Sm.resolve(theme)))
        .decl("border-radius", Value::Px(theme.layout.corner_radius))
}

pub(crate) fn rules(theme: &Theme, selectors: &SelectorMap) -> Vec<Rule> {
    let body = FontKind::Body.resolve(theme);

    vec![
        framed(selectors.selector(Role::Slider), theme),
        Rule::new(selectors.selector(Role::SliderTrack))
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlue)),
        Rule::new(selectors.selector(Role::SliderThumb))
            .decl("background-color", Value::Token(ColorTokenKind::CoralMain))
            .decl(
                "border",
                Value::Border {
                    width: BorderKind::Hairline.resolve(theme),
                    style: BorderStyle::Solid,
                    color: ColorTokenKind::CoralDark,
                },
            )
            .decl("border-radius", Value::Px(theme.layout.corner_radius)),
        framed(selectors.selector(Role::SelectBox), theme),
        framed(selectors.selector(Role::MultiSelect), theme),
        framed(selectors.selector(Role::TextInput), theme)
            .push(Declaration::new("font-family", Value::FontStack(body.family.clone())).important())
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlack))
            .decl("color", Value::Token(ColorTokenKind::TextPrimary)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(selector: &str) -> Rule {
        rules(&Theme::CROWN_QUEST, &SelectorMap::new())
            .into_iter()
            .find(|rule| rule.selector == selector)
            .unwrap_or_else(|| panic!("no rule for {selector}"))
    }

    #[test]
    fn test_framed_controls_share_the_hairline_border() {
        for selector in [".stSlider", ".stSelectbox", ".stMultiSelect"] {
            let rendered = rule_for(selector).to_string();
            assert!(
                rendered.contains("border: 2px solid var(--coral-dark)"),
                "{selector} should carry the hairline coral frame"
            );
            assert!(rendered.contains("padding: 4px"));
        }
    }

    #[test]
    fn test_slider_thumb_is_coral_on_blue_track() {
        let thumb = rule_for(".stSlider [role=\"slider\"]").to_string();
        assert!(thumb.contains("background-color: var(--coral-main)"));

        let track = rule_for(".stSlider [data-baseweb=\"slider\"]").to_string();
        assert!(track.contains("background-color: var(--pixel-blue)"));
    }

    #[test]
    fn test_text_input_uses_body_font_and_base_surface() {
        let input = rule_for(".stTextInput input").to_string();

        assert!(input.contains("font-family: 'Space Mono', monospace !important"));
        assert!(input.contains("background-color: var(--pixel-black)"));
        assert!(input.contains("color: var(--text-primary)"));
    }
}
