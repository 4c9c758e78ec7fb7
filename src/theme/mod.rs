//! Theme system providing colors, typography, and layout dimensions.
//!
//! Themes support multiple variants (e.g., dark and light modes) with a
//! consistent set of semantic color tokens referenced by every component
//! style rule.

mod schema;
pub use schema::*;

mod kinds;
pub use kinds::*;
