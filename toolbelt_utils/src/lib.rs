//! General utilities.

mod func;

pub use func::{repeat, repeat_indexed, repeat_with_argument};
