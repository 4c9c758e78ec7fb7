#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use quest_theme_units::{AbsoluteLength, Color, Pixels};

use crate::theme::{Theme, ThemeFont, ThemeVariant};

/// Named palette tokens emitted as CSS custom properties.
///
/// Component rules reference colors exclusively through these tokens, so the
/// `:root` block stays the single source of truth for the visual identity.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn var_name(&self) -> &'static str)]
#[func(pub fn resolve(&self, variant: &ThemeVariant) -> Color)]
pub enum ColorTokenKind {
    /// Main accent used for headings, buttons, and progress fills.
    #[assoc(var_name = "--coral-main")]
    #[assoc(resolve = variant.palette.accent.main)]
    CoralMain,
    /// Darker accent for borders and hard shadows.
    #[assoc(var_name = "--coral-dark")]
    #[assoc(resolve = variant.palette.accent.dark)]
    CoralDark,
    /// Lighter accent for dividers and low-emphasis edges.
    #[assoc(var_name = "--coral-light")]
    #[assoc(resolve = variant.palette.accent.light)]
    CoralLight,
    /// Base app background.
    #[assoc(var_name = "--pixel-black")]
    #[assoc(resolve = variant.palette.surface.base)]
    PixelBlack,
    /// Panel and card background.
    #[assoc(var_name = "--pixel-blue")]
    #[assoc(resolve = variant.palette.surface.panel)]
    PixelBlue,
    /// Primary body text.
    #[assoc(var_name = "--text-primary")]
    #[assoc(resolve = variant.palette.text.primary)]
    TextPrimary,
    /// Secondary, de-emphasized text.
    #[assoc(var_name = "--text-secondary")]
    #[assoc(resolve = variant.palette.text.secondary)]
    TextSecondary,
}

impl ColorTokenKind {
    pub const ALL: [ColorTokenKind; 7] = [
        ColorTokenKind::CoralMain,
        ColorTokenKind::CoralDark,
        ColorTokenKind::CoralLight,
        ColorTokenKind::PixelBlack,
        ColorTokenKind::PixelBlue,
        ColorTokenKind::TextPrimary,
        ColorTokenKind::TextSecondary,
    ];
}

/// Semantic text roles bound to one of the theme's two typefaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Heading,
    Body,
}

impl FontKind {
    pub fn resolve<'a>(&self, theme: &'a Theme) -> &'a ThemeFont {
        match self {
            FontKind::Heading => &theme.fonts.heading,
            FontKind::Body => &theme.fonts.body,
        }
    }
}

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, font: &ThemeFont) -> AbsoluteLength)]
pub enum TextSizeKind {
    /// Extra large heading text.
    #[assoc(resolve = font.sizes.heading_xl)]
    Xl,
    /// Large heading text.
    #[assoc(resolve = font.sizes.heading_lg)]
    Lg,
    /// Medium heading text.
    #[assoc(resolve = font.sizes.heading_md)]
    Md,
    /// Small heading text.
    #[assoc(resolve = font.sizes.heading_sm)]
    Sm,
    /// Standard body text.
    #[assoc(resolve = font.sizes.body)]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = font.sizes.caption)]
    Caption,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum PaddingKind {
    #[assoc(resolve = theme.layout.padding.xl)]
    Xl,
    #[assoc(resolve = theme.layout.padding.lg)]
    Lg,
    #[assoc(resolve = theme.layout.padding.md)]
    Md,
    #[assoc(resolve = theme.layout.padding.sm)]
    Sm,
}

/// Hard shadow offsets that resolve to theme-defined values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum ShadowKind {
    /// Shadow of a pressed or hovered element.
    #[assoc(resolve = theme.layout.shadow.pressed)]
    Pressed,
    /// Resting shadow of interactive elements.
    #[assoc(resolve = theme.layout.shadow.raised)]
    Raised,
    /// Shadow of prominent containers such as metric cards.
    #[assoc(resolve = theme.layout.shadow.lifted)]
    Lifted,
}

/// Border width variants that resolve to theme-defined values.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> Pixels)]
pub enum BorderKind {
    #[assoc(resolve = theme.layout.border.hairline)]
    Hairline,
    #[assoc(resolve = theme.layout.border.thick)]
    Thick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeVariantKind;

    #[test]
    fn test_color_token_var_names_are_unique() {
        for (i, a) in ColorTokenKind::ALL.iter().enumerate() {
            for b in &ColorTokenKind::ALL[i + 1..] {
                assert_ne!(a.var_name(), b.var_name(), "Token var names should be unique");
            }
        }
    }

    #[test]
    fn test_color_tokens_resolve_in_builtin_theme() {
        let theme = Theme::CROWN_QUEST;
        let variant = theme.variants.active(ThemeVariantKind::Dark);

        for token in ColorTokenKind::ALL {
            let color = token.resolve(variant);
            assert!(color.a > 0., "Every built-in token should be visible");
        }
    }

    #[test]
    fn test_font_kinds_resolve() {
        let theme = &Theme::CROWN_QUEST;

        assert_eq!(
            FontKind::Heading.resolve(theme).family[0],
            "VT323",
            "Headings should use the pixel typeface"
        );
        assert_eq!(FontKind::Body.resolve(theme).family[0], "Space Mono");
    }

    #[test]
    fn test_text_size_ordering() {
        let theme = Theme::CROWN_QUEST;
        let font = &theme.fonts.heading;

        // All built-in sizes happen to be expressed in rems except the XL
        // banner size, so compare the rem-denominated ones.
        let (lg, md, sm) = match (
            TextSizeKind::Lg.resolve(font),
            TextSizeKind::Md.resolve(font),
            TextSizeKind::Sm.resolve(font),
        ) {
            (
                AbsoluteLength::Rems(lg),
                AbsoluteLength::Rems(md),
                AbsoluteLength::Rems(sm),
            ) => (lg, md, sm),
            other => panic!("expected rem sizes, got {other:?}"),
        };

        assert!(sm <= md, "Sm should be <= Md");
        assert!(md <= lg, "Md should be <= Lg");
    }

    #[test]
    fn test_padding_kind_ordering() {
        let theme = &Theme::CROWN_QUEST;

        let sm = PaddingKind::Sm.resolve(theme);
        let md = PaddingKind::Md.resolve(theme);
        let lg = PaddingKind::Lg.resolve(theme);
        let xl = PaddingKind::Xl.resolve(theme);

        assert!(sm <= md, "Sm should be <= Md");
        assert!(md <= lg, "Md should be <= Lg");
        assert!(lg <= xl, "Lg should be <= Xl");
    }

    #[test]
    fn test_shadow_kind_ordering() {
        let theme = &Theme::CROWN_QUEST;

        let pressed = ShadowKind::Pressed.resolve(theme);
        let raised = ShadowKind::Raised.resolve(theme);
        let lifted = ShadowKind::Lifted.resolve(theme);

        assert!(pressed <= raised, "Pressed should be <= Raised");
        assert!(raised <= lifted, "Raised should be <= Lifted");
    }

    #[test]
    fn test_border_kind_ordering() {
        let theme = &Theme::CROWN_QUEST;

        assert!(
            BorderKind::Hairline.resolve(theme) <= BorderKind::Thick.resolve(theme),
            "Hairline should be <= Thick"
        );
    }
}
