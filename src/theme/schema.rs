use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use quest_theme_units::{
    AbsoluteLength, Color, DefiniteLength, Pixels, Seconds,
    deserializers::{
        de_abs_length, de_def_length, de_non_empty_list, de_pixels, de_seconds,
        de_string_or_non_empty_list,
    },
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::css::Easing;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: String,
    pub fonts: ThemeFonts,
    pub layout: ThemeLayout,
    pub animation: ThemeAnimation,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/crown_quest.json", CROWN_QUEST]);

    pub(crate) fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFonts {
    /// Root font size the host should resolve `rem` lengths against.
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    /// Remote stylesheet supplying the typeface files, emitted as an
    /// `@import` ahead of all rules.
    pub import_url: Option<String>,
    pub heading: ThemeFont,
    pub body: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[String; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    #[serde(deserialize_with = "de_pixels")]
    pub letter_spacing: Pixels,
    pub sizes: ThemeTextSizes,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_xl: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_lg: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_md: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub heading_sm: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub border: ThemeBorders,
    pub shadow: ThemeShadows,
    pub padding: ThemePadding,
    #[serde(deserialize_with = "de_pixels")]
    pub corner_radius: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBorders {
    #[serde(deserialize_with = "de_pixels")]
    pub hairline: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub thick: Pixels,
}

/// Hard pixel-art shadow offsets. Shadows render with a zero blur radius,
/// offset equally on both axes.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeShadows {
    #[serde(deserialize_with = "de_pixels")]
    pub pressed: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub raised: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lifted: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAnimation {
    /// Length of one achievement unlock cycle.
    #[serde(deserialize_with = "de_seconds")]
    pub unlock_duration: Seconds,
    pub unlock_easing: Easing,
    /// Delay step between consecutive badges in an unlock list.
    #[serde(deserialize_with = "de_seconds")]
    pub stagger_delay: Seconds,
    /// Button press/hover transition length.
    #[serde(deserialize_with = "de_seconds")]
    pub press_duration: Seconds,
    /// Tooltip disclosure fade length.
    #[serde(deserialize_with = "de_seconds")]
    pub tooltip_fade: Seconds,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_non_empty_list")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant of the requested kind, falling back to the first
    /// declared variant when no match exists.
    pub fn active(&self, kind: ThemeVariantKind) -> &ThemeVariant {
        self.variants
            .iter()
            .find(|variant| variant.kind == kind)
            .unwrap_or(&self.variants[0])
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub palette: ThemePalette,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePalette {
    pub accent: AccentColors,
    pub surface: SurfaceColors,
    pub text: TextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccentColors {
    pub main: Color,
    pub dark: Color,
    pub light: Color,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SurfaceColors {
    pub base: Color,
    pub panel: Color,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
}

impl TextColors {
    pub fn all(&self) -> (Color, Color) {
        (self.primary, self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_theme_units::px;

    #[test]
    fn test_builtin_theme_parses() {
        let theme: &Theme = &Theme::CROWN_QUEST;
        assert!(!theme.name.is_empty(), "Theme should have a name");
    }

    #[test]
    fn test_builtin_theme_has_variants() {
        let theme = &Theme::CROWN_QUEST;

        assert!(
            !theme.variants.variants.is_empty(),
            "Theme should have at least one variant"
        );

        let active = theme.variants.active(ThemeVariantKind::Dark);
        assert_eq!(active.kind, ThemeVariantKind::Dark);
    }

    #[test]
    fn test_active_falls_back_to_first_variant() {
        let theme = &Theme::CROWN_QUEST;

        // The built-in theme only declares a dark variant.
        let active = theme.variants.active(ThemeVariantKind::Light);
        assert_eq!(
            active.kind,
            ThemeVariantKind::Dark,
            "Missing variant kinds should fall back to the first declared variant"
        );
    }

    #[test]
    fn test_variant_has_visible_text_colors() {
        let theme = &Theme::CROWN_QUEST;
        let active = theme.variants.active(ThemeVariantKind::Dark);

        let (primary, secondary) = active.palette.text.all();
        assert!(primary.a > 0.0, "Primary text color should be visible");
        assert!(secondary.a > 0.0, "Secondary text color should be visible");
    }

    #[test]
    fn test_padding_ordering() {
        let theme = Theme::CROWN_QUEST;
        let padding = &theme.layout.padding;

        assert!(padding.sm <= padding.md, "Sm should be <= Md");
        assert!(padding.md <= padding.lg, "Md should be <= Lg");
        assert!(padding.lg <= padding.xl, "Lg should be <= Xl");
    }

    #[test]
    fn test_shadow_ordering() {
        let theme = Theme::CROWN_QUEST;
        let shadow = &theme.layout.shadow;

        assert!(shadow.pressed <= shadow.raised, "Pressed should be <= Raised");
        assert!(shadow.raised <= shadow.lifted, "Raised should be <= Lifted");
    }

    #[test]
    fn test_borders_are_positive() {
        let theme = Theme::CROWN_QUEST;
        let border = &theme.layout.border;

        assert!(border.hairline > px(0.), "Hairline border should be positive");
        assert!(border.thick >= border.hairline, "Thick should be >= hairline");
    }

    #[test]
    fn test_animation_durations_are_finite() {
        let theme = Theme::CROWN_QUEST;
        let animation = &theme.animation;

        assert!(animation.unlock_duration.is_finite_positive());
        assert!(animation.stagger_delay.is_finite_positive());
        assert!(animation.press_duration.is_finite_positive());
        assert!(animation.tooltip_fade.is_finite_positive());
    }

    #[test]
    fn test_rejects_empty_variant_list() {
        let mut value: serde_json::Value =
            serde_json::from_str(include_str!("../../themes/crown_quest.json")).unwrap();
        value["variants"] = serde_json::json!([]);

        let result = Theme::from_string(value.to_string());
        assert!(result.is_err(), "An empty variant list should be rejected");
    }

    #[test]
    fn test_theme_as_ref() {
        let theme = Theme::CROWN_QUEST;
        let theme_ref: &Theme = theme.as_ref();
        assert!(!theme_ref.name.is_empty(), "Theme ref should have a name");
    }
}
