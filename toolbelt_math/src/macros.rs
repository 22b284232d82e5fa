//! Utility macros.

/// Implements a binary operator for every combination of owned and borrowed
/// operands. The body receives both operands by reference.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

/// Implements a unary operator for both an owned and a borrowed operand.
macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

/// Implements a compound assignment operator for both an owned and a
/// borrowed right hand side.
macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}

/// Implements named accessors for the components of a glam-backed vector
/// type. Several names may refer to the same field, in which case they read
/// and write the same storage.
macro_rules! impl_component_views {
    ($t:ty { $($field:ident => $view:ident, $view_mut:ident, $label:literal);+ $(;)? }) => {
        impl $t {
            $(
                #[doc = concat!("The ", $label, ".")]
                #[inline]
                pub fn $view(&self) -> f32 {
                    self.inner.$field
                }

                #[doc = concat!("A mutable reference to the ", $label, ".")]
                #[inline]
                pub fn $view_mut(&mut self) -> &mut f32 {
                    &mut self.inner.$field
                }
            )+
        }
    };
}

/// Implements swizzle accessors returning a new vector of the target type,
/// forwarding to the swizzle of the same name on the wrapped glam vector.
/// The glam swizzle traits must be in scope where this is invoked.
macro_rules! impl_swizzles {
    ($source:ty => $target:ident { $($swizzle:ident),+ $(,)? }) => {
        impl $source {
            $(
                #[doc = concat!(
                    "Creates a new [`", stringify!($target), "`] from the `",
                    stringify!($swizzle), "` components of this vector."
                )]
                #[inline]
                pub fn $swizzle(&self) -> $target {
                    $target::wrap(self.inner.$swizzle())
                }
            )+
        }
    };
}
