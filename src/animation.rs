//! The achievement unlock animation.
//!
//! This module owns only the keyframe definition; the host plays it once per
//! newly unlocked achievement and the `forwards` fill in the badge rule keeps
//! the element at its final state afterwards.

use quest_theme_units::{Pixels, px};

use crate::css::{Declaration, KeyframeStop, Keyframes, Value};

/// Name of the unlock `@keyframes` sequence referenced by the unlocked badge
/// rule.
pub const UNLOCK_ANIMATION: &str = "achievement-unlock";

/// Builds the unlock sequence: the badge pops in from half size, overshoots
/// to 1.2x at 70% of the timeline, then settles at full size and opacity.
pub fn unlock_keyframes() -> Keyframes {
    let stop = |offset: f32, scale: f32, opacity: f32| {
        KeyframeStop::new(
            offset,
            vec![
                Declaration::new("transform", Value::Scale(scale)),
                Declaration::new("opacity", Value::Float(opacity)),
            ],
        )
    };

    // Offsets are fixed and strictly increasing, so skip Keyframes::new.
    Keyframes {
        name: UNLOCK_ANIMATION.into(),
        stops: vec![stop(0., 0.5, 0.), stop(70., 1.2, 1.), stop(100., 1., 1.)],
    }
}

/// Horizontal translation used by hovered and pressed buttons, mirroring the
/// shrinking hard shadow so the element appears to move into the page.
pub fn press_shift(rest_shadow: Pixels, active_shadow: Pixels) -> Pixels {
    px(rest_shadow.to_f32() - active_shadow.to_f32())
}
