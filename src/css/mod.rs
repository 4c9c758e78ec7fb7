//! Declarative CSS model: typed values, rules, keyframes, and the
//! deterministic stylesheet emitter.

mod value;
pub use value::*;

mod rule;
pub use rule::*;

mod keyframes;
pub use keyframes::*;

mod stylesheet;
pub use stylesheet::*;
