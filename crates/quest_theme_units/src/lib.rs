//! CSS value vocabulary shared by the theme schema and the stylesheet
//! emitter: colors, lengths, durations, and the lenient deserializers
//! that accept the forms theme JSON files are written in.

mod color;
pub use color::*;

mod length;
pub use length::*;

mod time;
pub use time::*;

pub mod deserializers;
