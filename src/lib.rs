//! A retro pixel theme layer for a sustainability dashboard.
//!
//! The crate maps semantic UI roles (headings, buttons, metric cards,
//! achievement badges, tooltips) onto a fixed palette and two typefaces,
//! and renders the result as a deterministic stylesheet for an external
//! host to apply to its own component tree. The theme owns declarations
//! only; hover disclosure and the unlock animation are played by the host.

pub mod animation;

pub mod components;

pub mod css;

pub mod theme;

mod assets;
pub use assets::*;

pub use components::{Role, SelectorMap, compose};
pub use theme::{Theme, ThemeVariantKind};
