//! Generic helpers for repeating calls, clamping numbers, building text,
//! printing messages and working with small vectors.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

pub use toolbelt_math as math;
pub use toolbelt_text as text;
pub use toolbelt_utils as utils;

pub use toolbelt_math::{Vector2, Vector3, Vector4};
pub use toolbelt_text::testing;
