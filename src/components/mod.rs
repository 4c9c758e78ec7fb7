//! Per-role style builders and the stylesheet composer.
//!
//! Each module supplies the fixed declaration block for one group of
//! semantic roles; none of them depends on runtime data values. Hover and
//! active treatments are emitted as state-conditional selector variants that
//! the host's rendering engine evaluates.

mod typography;

mod button;
pub use button::*;

mod controls;

mod surfaces;

mod badge;
pub use badge::*;

mod tooltip;

use enum_assoc::Assoc;
use indexmap::IndexMap;

use crate::{
    animation,
    css::Stylesheet,
    theme::{ColorTokenKind, Theme, ThemeVariantKind},
};

/// Semantic UI roles the theme binds declarations to, independent of their
/// visual treatment.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn default_selector(&self) -> &'static str)]
pub enum Role {
    /// Whole-app background surface.
    #[assoc(default_selector = ".stApp")]
    App,
    #[assoc(default_selector = "h1, h2, h3")]
    Heading,
    #[assoc(default_selector = "p, li, .stMarkdown")]
    Body,
    #[assoc(default_selector = ".stButton > button")]
    PrimaryButton,
    #[assoc(default_selector = ".stSlider")]
    Slider,
    #[assoc(default_selector = ".stSlider [data-baseweb=\"slider\"]")]
    SliderTrack,
    #[assoc(default_selector = ".stSlider [role=\"slider\"]")]
    SliderThumb,
    #[assoc(default_selector = ".stSelectbox")]
    SelectBox,
    #[assoc(default_selector = ".stMultiSelect")]
    MultiSelect,
    #[assoc(default_selector = ".stTextInput input")]
    TextInput,
    #[assoc(default_selector = ".metric-container")]
    MetricCard,
    #[assoc(default_selector = ".stProgress > div > div")]
    ProgressFill,
    #[assoc(default_selector = "hr")]
    Divider,
    #[assoc(default_selector = ".dataframe")]
    DataTable,
    #[assoc(default_selector = "[data-testid=\"stSidebar\"]")]
    Sidebar,
    #[assoc(default_selector = ".achievement-badge")]
    AchievementBadge,
    #[assoc(default_selector = ".tooltip")]
    TooltipTrigger,
    #[assoc(default_selector = ".tooltip-content")]
    TooltipContent,
}

impl Role {
    pub const ALL: [Role; 18] = [
        Role::App,
        Role::Heading,
        Role::Body,
        Role::PrimaryButton,
        Role::Slider,
        Role::SliderTrack,
        Role::SliderThumb,
        Role::SelectBox,
        Role::MultiSelect,
        Role::TextInput,
        Role::MetricCard,
        Role::ProgressFill,
        Role::Divider,
        Role::DataTable,
        Role::Sidebar,
        Role::AchievementBadge,
        Role::TooltipTrigger,
        Role::TooltipContent,
    ];
}

/// Maps roles onto the host's component tree.
///
/// Defaults are the class names of the dashboard this theme was written for;
/// hosts with a different widget tree override per role.
#[derive(Debug, Clone, Default)]
pub struct SelectorMap {
    overrides: IndexMap<Role, String>,
}

impl SelectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, role: Role, selector: impl Into<String>) {
        self.overrides.insert(role, selector.into());
    }

    pub fn selector(&self, role: Role) -> &str {
        self.overrides
            .get(&role)
            .map(String::as_str)
            .unwrap_or_else(|| role.default_selector())
    }
}

/// Composes the full stylesheet for a theme: font import, `:root` token
/// block from the requested variant's palette, every role's declaration
/// block, and the unlock keyframes.
pub fn compose(theme: &Theme, kind: ThemeVariantKind, selectors: &SelectorMap) -> Stylesheet {
    let variant = theme.variants.active(kind);
    let mut sheet = Stylesheet::new();

    if let Some(url) = &theme.fonts.import_url {
        sheet.push_import(url);
    }

    for token in ColorTokenKind::ALL {
        sheet.push_token(token, token.resolve(variant));
    }

    for rule in typography::rules(theme, selectors) {
        sheet.push_rule(rule);
    }

    for rule in button::rules(theme, selectors) {
        sheet.push_rule(rule);
    }

    for rule in controls::rules(theme, selectors) {
        sheet.push_rule(rule);
    }

    for rule in surfaces::rules(theme, selectors) {
        sheet.push_rule(rule);
    }

    for rule in badge::rules(theme, selectors) {
        sheet.push_rule(rule);
    }

    for rule in tooltip::rules(theme, selectors) {
        sheet.push_rule(rule);
    }

    sheet.push_keyframes(animation::unlock_keyframes());
    sheet
}
