//! Math utilities.

#[macro_use]
mod macros;

pub mod num;
pub mod vector;

pub use num::{WithinDistance, clamp, clamp_above, clamp_below, within_distance};
pub use vector::{
    ComponentIndexError, EuclideanVector, Vector2, Vector3, Vector4, angle_between, cross,
    distance, dot, magnitude, normalise,
};
