//! Numbers and numerics.

use num_traits::ToPrimitive;

/// Returns `lower` if `value` is below it, `upper` if `value` is above it and
/// `value` otherwise.
///
/// The result is unspecified when `lower > upper`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value < lower {
        lower
    } else if value > upper {
        upper
    } else {
        value
    }
}

/// Returns `threshold` if `value` is below it, and `value` otherwise.
#[inline]
pub fn clamp_above<T: PartialOrd>(value: T, threshold: T) -> T {
    if value < threshold { threshold } else { value }
}

/// Returns `threshold` if `value` is above it, and `value` otherwise.
#[inline]
pub fn clamp_below<T: PartialOrd>(value: T, threshold: T) -> T {
    if value > threshold { threshold } else { value }
}

/// Numbers that can be checked for lying within a given distance of each
/// other.
pub trait WithinDistance: Copy {
    /// Whether the absolute difference between `self` and `other` is at most
    /// `distance`.
    fn within_distance(self, other: Self, distance: Self) -> bool;
}

/// Whether the absolute difference between `a` and `b` is at most `distance`.
///
/// Integers are compared exactly, without risk of overflow, and a negative
/// `distance` is never satisfied. Floats use the floating point absolute
/// value, so a NaN anywhere gives `false`.
#[inline]
pub fn within_distance<T: WithinDistance>(a: T, b: T, distance: T) -> bool {
    a.within_distance(b, distance)
}

macro_rules! impl_within_distance_for_int {
    ($($t:ty),+) => {
        $(
            impl WithinDistance for $t {
                #[inline]
                fn within_distance(self, other: Self, distance: Self) -> bool {
                    // `abs_diff` is unsigned, so signed distances are widened
                    // before comparing
                    match (self.abs_diff(other).to_u128(), distance.to_u128()) {
                        (Some(difference), Some(distance)) => difference <= distance,
                        _ => false,
                    }
                }
            }
        )+
    };
}

macro_rules! impl_within_distance_for_float {
    ($($t:ty),+) => {
        $(
            impl WithinDistance for $t {
                #[inline]
                fn within_distance(self, other: Self, distance: Self) -> bool {
                    (self - other).abs() <= distance
                }
            }
        )+
    };
}

impl_within_distance_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_within_distance_for_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamping_value_in_range_leaves_it_unchanged() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
    }

    #[test]
    fn clamping_value_outside_range_gives_nearest_bound() {
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(12, 0, 10), 10);
        assert_eq!(clamp(1.5, -1.0, 1.0), 1.0);
        assert_eq!(clamp("m", "a", "f"), "f");
    }

    #[test]
    fn one_sided_clamps_work() {
        assert_eq!(clamp_above(-2, 0), 0);
        assert_eq!(clamp_above(3, 0), 3);
        assert_eq!(clamp_below(7, 5), 5);
        assert_eq!(clamp_below(-7, 5), -7);
        assert_eq!(clamp_above(0.25_f32, 0.5), 0.5);
        assert_eq!(clamp_below(0.75_f64, 0.5), 0.5);
    }

    #[test]
    fn integer_within_distance_is_inclusive() {
        assert!(within_distance(10, 13, 3));
        assert!(!within_distance(10, 14, 3));
        assert!(within_distance(7_u8, 7, 0));
    }

    #[test]
    fn unsigned_within_distance_works_in_both_directions() {
        assert!(within_distance(2_u32, 9, 7));
        assert!(within_distance(9_u32, 2, 7));
        assert!(!within_distance(0_usize, usize::MAX, usize::MAX - 1));
    }

    #[test]
    fn signed_within_distance_does_not_overflow() {
        assert!(within_distance(i32::MIN, -1, i32::MAX));
        assert!(!within_distance(i32::MIN, i32::MAX, i32::MAX));
        assert!(!within_distance(i64::MIN, 0, i64::MAX));
        assert_eq!(
            within_distance(i8::MIN, i8::MAX, i8::MAX),
            within_distance(i8::MAX, i8::MIN, i8::MAX)
        );
    }

    #[test]
    fn negative_integer_distance_is_never_satisfied() {
        assert!(!within_distance(4, 4, -1));
    }

    #[test]
    fn float_within_distance_does_not_truncate() {
        assert!(within_distance(0.3_f32, 0.5, 0.25));
        assert!(!within_distance(0.3_f64, 0.5, 0.1));
        assert!(within_distance(-0.5_f64, 0.25, 0.75));
    }

    #[test]
    fn float_within_distance_with_nan_gives_false() {
        assert!(!within_distance(f32::NAN, 1.0, f32::INFINITY));
        assert!(!within_distance(1.0, 1.0, f64::NAN));
    }

    proptest! {
        #[test]
        fn clamped_value_lies_in_range(value: i64, a: i64, b: i64) {
            let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
            let clamped = clamp(value, lower, upper);
            prop_assert!(lower <= clamped && clamped <= upper);
            if lower <= value && value <= upper {
                prop_assert_eq!(clamped, value);
            }
        }
    }

    proptest! {
        #[test]
        fn clamped_float_lies_in_range(value in -1e6_f64..1e6, a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
            let clamped = clamp(value, lower, upper);
            prop_assert!(lower <= clamped && clamped <= upper);
        }
    }

    proptest! {
        #[test]
        fn integer_within_distance_is_symmetric(a: i32, b: i32, distance: i32) {
            prop_assert_eq!(within_distance(a, b, distance), within_distance(b, a, distance));
        }
    }

    proptest! {
        #[test]
        fn float_within_distance_is_symmetric(a: f32, b: f32, distance: f32) {
            prop_assert_eq!(within_distance(a, b, distance), within_distance(b, a, distance));
        }
    }
}
