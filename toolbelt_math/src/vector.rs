//! Vectors.
//!
//! Each vector wraps a [`glam`] vector. The positional (`x`, `y`, `z`, `w`),
//! color (`r`, `g`, `b`, `a`) and measurement (`width`, `height`, `depth`,
//! `fourth`) accessors are different names for the same fields, as is
//! indexing with `[]`.

mod swizzle;

use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Component indices for use with vector indexing.
pub mod component {
    /// Index of the x-component.
    pub const X: usize = 0;
    /// Index of the y-component.
    pub const Y: usize = 1;
    /// Index of the z-component.
    pub const Z: usize = 2;
    /// Index of the w-component.
    pub const W: usize = 3;

    /// Index of the red component, the same as [`X`].
    pub const R: usize = X;
    /// Index of the green component, the same as [`Y`].
    pub const G: usize = Y;
    /// Index of the blue component, the same as [`Z`].
    pub const B: usize = Z;
    /// Index of the alpha component, the same as [`W`].
    pub const A: usize = W;

    /// Index of the width, the same as [`X`].
    pub const WIDTH: usize = X;
    /// Index of the height, the same as [`Y`].
    pub const HEIGHT: usize = Y;
    /// Index of the depth, the same as [`Z`].
    pub const DEPTH: usize = Z;
    /// Index of the fourth measurement, the same as [`W`].
    pub const FOURTH: usize = W;
}

/// A 2-dimensional vector.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: glam::Vec2,
}

/// A 3-dimensional vector.
///
/// The components are stored contiguously without padding, so a slice of
/// vectors can be viewed as a slice of floats.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: glam::Vec3,
}

/// A 4-dimensional vector.
///
/// The components may be stored in a 128-bit SIMD register, which gives the
/// vector an alignment of 16 bytes.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

/// Error returned when accessing a vector component with an index that is
/// not smaller than the number of components.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("Component index {index} is out of bounds for a vector with {dimension} components")]
pub struct ComponentIndexError {
    pub index: usize,
    pub dimension: usize,
}

/// Operations shared by vectors in Euclidean space.
pub trait EuclideanVector: Copy {
    /// Computes the dot product of this vector with another.
    fn dot(&self, other: &Self) -> f32;

    /// Computes the square of the magnitude of the vector.
    fn magnitude_squared(&self) -> f32;

    /// Computes the magnitude (Euclidean length) of the vector.
    fn magnitude(&self) -> f32;

    /// Computes the vector divided by its magnitude.
    ///
    /// The zero vector has no direction, so normalising it gives NaN
    /// components.
    fn normalised(&self) -> Self;

    /// Computes the Euclidean distance between this vector and another.
    fn distance_to(&self, other: &Self) -> f32;
}

/// Computes the magnitude (Euclidean length) of the given vector.
#[inline]
pub fn magnitude<V: EuclideanVector>(vector: &V) -> f32 {
    vector.magnitude()
}

/// Computes the given vector divided by its magnitude. Normalising the zero
/// vector gives NaN components.
#[inline]
pub fn normalise<V: EuclideanVector>(vector: &V) -> V {
    vector.normalised()
}

/// Computes the dot product of the two given vectors.
#[inline]
pub fn dot<V: EuclideanVector>(a: &V, b: &V) -> f32 {
    a.dot(b)
}

/// Computes the Euclidean distance between the two given vectors.
#[inline]
pub fn distance<V: EuclideanVector>(a: &V, b: &V) -> f32 {
    a.distance_to(b)
}

/// Computes the cross product of the two given vectors.
#[inline]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Computes the angle in radians of the direction from `b` to `a`, measured
/// clockwise from the x-axis.
#[inline]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f32 {
    a.angle_between(b)
}

impl ComponentIndexError {
    const fn new(index: usize, dimension: usize) -> Self {
        Self { index, dimension }
    }
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::wrap(glam::Vec2::new(x, y))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec2::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec2::Y)
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::from_xy_z(self, z)
    }

    /// Computes the angle in radians of the direction from `other` to this
    /// vector, measured clockwise from the x-axis.
    #[inline]
    pub fn angle_between(&self, other: &Self) -> f32 {
        let difference = self.inner - other.inner;
        -difference.y.atan2(difference.x)
    }
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::wrap(glam::Vec3::new(x, y, z))
    }

    /// Creates a vector from a 2D vector holding the x- and y-components
    /// followed by the z-component.
    #[inline]
    pub const fn from_xy_z(xy: &Vector2, z: f32) -> Self {
        Self::new(xy.inner.x, xy.inner.y, z)
    }

    /// Creates a vector from the x-component followed by a 2D vector holding
    /// the y- and z-components.
    #[inline]
    pub const fn from_x_yz(x: f32, yz: &Vector2) -> Self {
        Self::new(x, yz.inner.x, yz.inner.y)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec3::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec3::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec3::Z)
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::from_xyz_w(self, w)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(other.inner))
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a vector from a 2D vector holding the x- and y-components
    /// followed by the z- and w-components.
    #[inline]
    pub const fn from_xy_z_w(xy: &Vector2, z: f32, w: f32) -> Self {
        Self::new(xy.inner.x, xy.inner.y, z, w)
    }

    /// Creates a vector from the x-component, a 2D vector holding the y- and
    /// z-components and the w-component.
    #[inline]
    pub const fn from_x_yz_w(x: f32, yz: &Vector2, w: f32) -> Self {
        Self::new(x, yz.inner.x, yz.inner.y, w)
    }

    /// Creates a vector from the x- and y-components followed by a 2D vector
    /// holding the z- and w-components.
    #[inline]
    pub const fn from_x_y_zw(x: f32, y: f32, zw: &Vector2) -> Self {
        Self::new(x, y, zw.inner.x, zw.inner.y)
    }

    /// Creates a vector from two 2D vectors holding the x- and y-components
    /// and the z- and w-components.
    #[inline]
    pub const fn from_xy_zw(xy: &Vector2, zw: &Vector2) -> Self {
        Self::new(xy.inner.x, xy.inner.y, zw.inner.x, zw.inner.y)
    }

    /// Creates a vector from a 3D vector holding the x-, y- and z-components
    /// followed by the w-component.
    #[inline]
    pub const fn from_xyz_w(xyz: &Vector3, w: f32) -> Self {
        Self::new(xyz.inner.x, xyz.inner.y, xyz.inner.z, w)
    }

    /// Creates a vector from the x-component followed by a 3D vector holding
    /// the y-, z- and w-components.
    #[inline]
    pub const fn from_x_yzw(x: f32, yzw: &Vector3) -> Self {
        Self::new(x, yzw.inner.x, yzw.inner.y, yzw.inner.z)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::wrap(glam::Vec4::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::wrap(glam::Vec4::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::wrap(glam::Vec4::Z)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::wrap(glam::Vec4::W)
    }
}

impl_component_views!(Vector2 {
    x => x, x_mut, "x-component";
    y => y, y_mut, "y-component";
    x => r, r_mut, "red component";
    y => g, g_mut, "green component";
    x => width, width_mut, "width";
    y => height, height_mut, "height";
});

impl_component_views!(Vector3 {
    x => x, x_mut, "x-component";
    y => y, y_mut, "y-component";
    z => z, z_mut, "z-component";
    x => r, r_mut, "red component";
    y => g, g_mut, "green component";
    z => b, b_mut, "blue component";
    x => width, width_mut, "width";
    y => height, height_mut, "height";
    z => depth, depth_mut, "depth";
});

impl_component_views!(Vector4 {
    x => x, x_mut, "x-component";
    y => y, y_mut, "y-component";
    z => z, z_mut, "z-component";
    w => w, w_mut, "w-component";
    x => r, r_mut, "red component";
    y => g, g_mut, "green component";
    z => b, b_mut, "blue component";
    w => a, a_mut, "alpha component";
    x => width, width_mut, "width";
    y => height, height_mut, "height";
    z => depth, depth_mut, "depth";
    w => fourth, fourth_mut, "fourth measurement";
});

macro_rules! impl_vector {
    ($name:ident, $glam:ident, $dim:literal, [$($component:ident),+]) => {
        impl $name {
            /// The number of components in the vector.
            pub const DIMENSION: usize = $dim;

            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::wrap(glam::$glam::ZERO)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: f32) -> Self {
                Self::wrap(glam::$glam::splat(value))
            }

            /// Creates a new vector with the given array of components.
            #[inline]
            pub const fn from_array(components: [f32; $dim]) -> Self {
                Self::wrap(glam::$glam::from_array(components))
            }

            /// The array of components.
            #[inline]
            pub fn components(&self) -> &[f32; $dim] {
                self.inner.as_ref()
            }

            /// Returns the component at the given index.
            ///
            /// # Errors
            /// Returns a [`ComponentIndexError`] if the index is not smaller
            /// than the number of components.
            #[inline]
            pub fn get(&self, index: usize) -> Result<f32, ComponentIndexError> {
                self.components()
                    .get(index)
                    .copied()
                    .ok_or(ComponentIndexError::new(index, $dim))
            }

            /// Returns a mutable reference to the component at the given
            /// index.
            ///
            /// # Errors
            /// Returns a [`ComponentIndexError`] if the index is not smaller
            /// than the number of components.
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, ComponentIndexError> {
                self.components_mut()
                    .get_mut(index)
                    .ok_or(ComponentIndexError::new(index, $dim))
            }

            /// Sets all components to zero.
            #[inline]
            pub fn clear(&mut self) {
                self.inner = glam::$glam::ZERO;
            }

            /// Negates all components in place.
            #[inline]
            pub fn invert(&mut self) {
                self.inner = -self.inner;
            }

            /// Divides the vector by its magnitude in place. Normalising the
            /// zero vector gives NaN components.
            #[inline]
            pub fn normalise_in_place(&mut self) {
                self.inner = self.inner.normalize();
            }

            /// Returns a vector with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
                Self::from_array(self.components().map(f))
            }

            /// Reinterprets a slice of vectors as a flat slice of their
            /// components.
            #[inline]
            pub fn slice_as_floats(vectors: &[Self]) -> &[f32] {
                bytemuck::cast_slice(vectors)
            }

            #[inline]
            fn components_mut(&mut self) -> &mut [f32; $dim] {
                self.inner.as_mut()
            }

            #[inline]
            pub(crate) const fn wrap(inner: glam::$glam) -> Self {
                Self { inner }
            }
        }

        impl EuclideanVector for $name {
            #[inline]
            fn dot(&self, other: &Self) -> f32 {
                self.inner.dot(other.inner)
            }

            #[inline]
            fn magnitude_squared(&self) -> f32 {
                self.inner.length_squared()
            }

            #[inline]
            fn magnitude(&self) -> f32 {
                self.inner.length()
            }

            #[inline]
            fn normalised(&self) -> Self {
                Self::wrap(self.inner.normalize())
            }

            #[inline]
            fn distance_to(&self, other: &Self) -> f32 {
                self.inner.distance(other.inner)
            }
        }

        impl From<[f32; $dim]> for $name {
            #[inline]
            fn from(components: [f32; $dim]) -> Self {
                Self::from_array(components)
            }
        }

        impl From<$name> for [f32; $dim] {
            #[inline]
            fn from(vector: $name) -> Self {
                vector.inner.to_array()
            }
        }

        impl_binop!(Add, add, $name, $name, $name, |a, b| {
            $name::wrap(a.inner + b.inner)
        });

        impl_binop!(Sub, sub, $name, $name, $name, |a, b| {
            $name::wrap(a.inner - b.inner)
        });

        impl_binop!(Add, add, $name, f32, $name, |a, b| {
            $name::wrap(a.inner + *b)
        });

        impl_binop!(Sub, sub, $name, f32, $name, |a, b| {
            $name::wrap(a.inner - *b)
        });

        impl_binop!(Mul, mul, $name, f32, $name, |a, b| {
            $name::wrap(a.inner * *b)
        });

        impl_binop!(Mul, mul, f32, $name, $name, |a, b| {
            $name::wrap(*a * b.inner)
        });

        impl_binop!(Div, div, $name, f32, $name, |a, b| {
            $name::wrap(a.inner / *b)
        });

        impl_binop_assign!(AddAssign, add_assign, $name, $name, |a, b| {
            a.inner += b.inner;
        });

        impl_binop_assign!(SubAssign, sub_assign, $name, $name, |a, b| {
            a.inner -= b.inner;
        });

        impl_binop_assign!(AddAssign, add_assign, $name, f32, |a, b| {
            a.inner += *b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $name, f32, |a, b| {
            a.inner -= *b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $name, f32, |a, b| {
            a.inner *= *b;
        });

        impl_binop_assign!(DivAssign, div_assign, $name, f32, |a, b| {
            a.inner /= *b;
        });

        impl_unary_op!(Neg, neg, $name, $name, |val| { $name::wrap(-val.inner) });

        impl Index<usize> for $name {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match self.components().get(index) {
                    Some(component) => component,
                    None => panic!("{}", ComponentIndexError::new(index, $dim)),
                }
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match self.components_mut().get_mut(index) {
                    Some(component) => component,
                    None => panic!("{}", ComponentIndexError::new(index, $dim)),
                }
            }
        }

        impl_abs_diff_eq!($name, |a, b, epsilon| {
            a.inner.abs_diff_eq(b.inner, epsilon)
        });

        impl_relative_eq!($name, |a, b, epsilon, max_relative| {
            a.components()
                .iter()
                .zip(b.components())
                .all(|(x, y)| ::approx::RelativeEq::relative_eq(x, y, epsilon, max_relative))
        });

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[ ")?;
                for (idx, component) in self.components().iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{component}")?;
                }
                write!(f, "]")
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($component), &self.inner.$component))+
                    .finish()
            }
        }
    };
}

impl_vector!(Vector2, Vec2, 2, [x, y]);
impl_vector!(Vector3, Vec3, 3, [x, y, z]);
impl_vector!(Vector4, Vec4, 4, [x, y, z, w]);
