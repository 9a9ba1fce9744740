//! Scalar functors applied by expression nodes.
//!
//! Named functors are zero-sized, so an expression such as
//! `sqrt(abs(x))` carries no state besides its operand. Closures enter the
//! algebra through [`Func`] and [`Func2`].

use num_traits::{One, Zero};
use strided_traits::{Promote, Promoted, RealScalar, Scalar, Truthy};

/// A unary scalar function captured by value.
pub trait UnaryFn<T> {
    type Output: Copy;

    fn call(&self, x: T) -> Self::Output;
}

/// A binary scalar function captured by value.
pub trait BinaryFn<A, B> {
    type Output: Copy;

    fn call(&self, a: A, b: B) -> Self::Output;
}

/// Adapter turning a closure into a [`UnaryFn`].
#[derive(Debug, Clone, Copy)]
pub struct Func<F>(pub F);

impl<T, R: Copy, F: Fn(T) -> R> UnaryFn<T> for Func<F> {
    type Output = R;

    #[inline(always)]
    fn call(&self, x: T) -> R {
        (self.0)(x)
    }
}

/// Adapter turning a two-argument closure into a [`BinaryFn`].
#[derive(Debug, Clone, Copy)]
pub struct Func2<F>(pub F);

impl<A, B, R: Copy, F: Fn(A, B) -> R> BinaryFn<A, B> for Func2<F> {
    type Output = R;

    #[inline(always)]
    fn call(&self, a: A, b: B) -> R {
        (self.0)(a, b)
    }
}

// ============================================================================
// Elementwise catalog
// ============================================================================

macro_rules! same_type_functor {
    ($(#[$doc:meta] $name:ident => |$x:ident| $body:expr;)*) => {
        $(
            #[$doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<T: Scalar> UnaryFn<T> for $name {
                type Output = T;

                #[inline(always)]
                fn call(&self, $x: T) -> T {
                    $body
                }
            }
        )*
    };
}

same_type_functor! {
    /// `x * x`
    Sqr => |x| x * x;
    /// Principal square root.
    Sqrt => |x| x.sqrt();
    /// Natural logarithm.
    Log => |x| x.ln();
    /// Base-2 logarithm.
    Log2 => |x| x.log2();
    /// Base-10 logarithm.
    Log10 => |x| x.log10();
    /// Hyperbolic tangent.
    Tanh => |x| x.tanh();
    /// `2^x`.
    Pow2 => |x| x.pow2();
    /// Nearest integer, ties away from zero.
    Round => |x| x.round_half_away();
    /// Complex conjugate.
    Conj => |x| x.conj();
}

/// Modulus; complex input gives a real result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Abs;

impl<T: Scalar> UnaryFn<T> for Abs {
    type Output = T::Real;

    #[inline(always)]
    fn call(&self, x: T) -> T::Real {
        x.abs()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Real;

impl<T: Scalar> UnaryFn<T> for Real {
    type Output = T::Real;

    #[inline(always)]
    fn call(&self, x: T) -> T::Real {
        x.re()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Imag;

impl<T: Scalar> UnaryFn<T> for Imag {
    type Output = T::Real;

    #[inline(always)]
    fn call(&self, x: T) -> T::Real {
        x.im()
    }
}

/// `1` when finite, `0` otherwise (complex: both parts finite).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsFinite;

impl<T: Scalar> UnaryFn<T> for IsFinite {
    type Output = T::Real;

    #[inline(always)]
    fn call(&self, x: T) -> T::Real {
        if x.is_finite() {
            T::Real::one()
        } else {
            T::Real::zero()
        }
    }
}

/// `-1` when the sign bit is set, `+1` otherwise. Never `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sign;

impl<T: RealScalar> UnaryFn<T> for Sign {
    type Output = T;

    #[inline(always)]
    fn call(&self, x: T) -> T {
        if x.is_sign_negative() {
            -T::one()
        } else {
            T::one()
        }
    }
}

/// Three-way sign: `-1`, `0` or `+1`; NaN stays NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sign3;

impl<T: RealScalar> UnaryFn<T> for Sign3 {
    type Output = T;

    #[inline(always)]
    fn call(&self, x: T) -> T {
        if x > T::zero() {
            T::one()
        } else if x < T::zero() {
            -T::one()
        } else {
            x
        }
    }
}

/// `x != 0` as a boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonZero;

impl<T: Truthy> UnaryFn<T> for NonZero {
    type Output = bool;

    #[inline(always)]
    fn call(&self, x: T) -> bool {
        x.is_truthy()
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! promoted_binary {
    ($($name:ident => $op:tt;)*) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl<A: Promote<B>, B: Scalar> BinaryFn<A, B> for $name {
                type Output = Promoted<A, B>;

                #[inline(always)]
                fn call(&self, a: A, b: B) -> Promoted<A, B> {
                    a.promote_lhs() $op <A as Promote<B>>::promote_rhs(b)
                }
            }
        )*
    };
}

promoted_binary! {
    AddOp => +;
    SubOp => -;
    MulOp => *;
    DivOp => /;
}
