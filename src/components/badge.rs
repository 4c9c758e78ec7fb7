//! Achievement badges: the locked and unlocked treatments and the unlock
//! animation binding.
//!
//! The theme only declares what an unlocking badge looks like; deciding that
//! an achievement was earned, and therefore adding the unlocked class, is
//! the host's job.

use quest_theme_units::{Seconds, seconds};

use crate::{
    animation::UNLOCK_ANIMATION,
    components::{Role, SelectorMap},
    css::{BorderStyle, Declaration, Rule, Value},
    theme::{BorderKind, ColorTokenKind, FontKind, PaddingKind, ShadowKind, Theme, ThemeAnimation},
};

/// Modifier class the host adds to a badge whose achievement is unlocked.
pub const UNLOCKED_CLASS: &str = "achievement-unlocked";

/// Modifier class for a badge whose achievement is still locked.
pub const LOCKED_CLASS: &str = "achievement-locked";

pub(crate) fn rules(theme: &Theme, selectors: &SelectorMap) -> Vec<Rule> {
    let heading = FontKind::Heading.resolve(theme);
    let selector = selectors.selector(Role::AchievementBadge);

    vec![
        Rule::new(selector)
            .push(
                Declaration::new("font-family", Value::FontStack(heading.family.clone()))
                    .important(),
            )
            .decl("display", Value::Keyword("inline-block"))
            .decl("color", Value::Token(ColorTokenKind::TextPrimary))
            .decl("background-color", Value::Token(ColorTokenKind::PixelBlue))
            .decl(
                "border",
                Value::Border {
                    width: BorderKind::Thick.resolve(theme),
                    style: BorderStyle::Solid,
                    color: ColorTokenKind::CoralMain,
                },
            )
            .decl("padding", Value::Px(PaddingKind::Md.resolve(theme)))
            .decl("margin-bottom", Value::Px(PaddingKind::Sm.resolve(theme)))
            .decl("letter-spacing", Value::Px(heading.letter_spacing))
            .decl(
                "box-shadow",
                Value::HardShadow {
                    offset: ShadowKind::Raised.resolve(theme),
                    color: ColorTokenKind::CoralDark,
                },
            ),
        Rule::new(format!("{selector}.{LOCKED_CLASS}"))
            .decl("color", Value::Token(ColorTokenKind::TextSecondary))
            .decl("border-color", Value::Token(ColorTokenKind::CoralDark))
            .decl("box-shadow", Value::Keyword("none")),
        // One scale/opacity cycle per trigger, then hold the final keyframe.
        Rule::new(format!("{selector}.{UNLOCKED_CLASS}")).decl(
            "animation",
            Value::Animation {
                name: UNLOCK_ANIMATION.into(),
                duration: theme.animation.unlock_duration,
                easing: theme.animation.unlock_easing,
                iterations: 1,
            },
        ),
    ]
}

/// Delay declaration for the badge at `index` in an unlock list, so a batch
/// of badges pops in one after another.
pub fn stagger(index: usize, animation: &ThemeAnimation) -> Declaration {
    let delay: Seconds = seconds(index as f32 * animation.stagger_delay.to_f32());
    Declaration::new("animation-delay", Value::Time(delay))
}
