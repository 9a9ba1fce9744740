//! Element types accepted by the containers and kernels.
//!
//! Four element types are supported: `f32`, `f64`, `Complex32` and
//! `Complex64`. Each carries an [`ElementKind`] tag that the LAPACK adapters
//! use to pick the right kernel and the promotion rules use to pick the
//! widest operand type.

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tag identifying one of the four supported element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Single,
    Double,
    ComplexSingle,
    ComplexDouble,
}

impl ElementKind {
    #[inline]
    pub fn is_complex(self) -> bool {
        matches!(self, ElementKind::ComplexSingle | ElementKind::ComplexDouble)
    }

    #[inline]
    pub fn is_double(self) -> bool {
        matches!(self, ElementKind::Double | ElementKind::ComplexDouble)
    }

    /// LAPACK routine prefix for this element type (`s`, `d`, `c` or `z`).
    pub fn lapack_prefix(self) -> char {
        match self {
            ElementKind::Single => 's',
            ElementKind::Double => 'd',
            ElementKind::ComplexSingle => 'c',
            ElementKind::ComplexDouble => 'z',
        }
    }
}

/// A supported element type.
///
/// The math helpers mirror the elementwise function catalog: every method
/// here is well defined for both real and complex elements.
pub trait Scalar:
    Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Zero
    + One
{
    /// The real type underlying this element (`Self` for real types).
    type Real: RealScalar;

    const KIND: ElementKind;

    fn from_real(re: Self::Real) -> Self;

    /// Builds an element from real and imaginary parts; real types drop `im`.
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;

    #[inline]
    fn from_f64(x: f64) -> Self {
        Self::from_real(<Self::Real as RealScalar>::from_f64_lossy(x))
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        Self::from_f64(n as f64)
    }

    fn re(self) -> Self::Real;
    fn im(self) -> Self::Real;
    fn conj(self) -> Self;

    /// Modulus.
    fn abs(self) -> Self::Real;

    /// `|re| + |im|`, the pivot measure used by LU factorization.
    fn abs1(self) -> Self::Real;

    fn sqrt(self) -> Self;
    fn ln(self) -> Self;
    fn exp(self) -> Self;
    fn tanh(self) -> Self;

    /// `2^x`. For complex `a+ib` this is `2^a (cos(b ln2) + i sin(b ln2))`.
    fn pow2(self) -> Self;

    /// Rounds half away from zero: `floor(x+0.5)` for positive values and
    /// `ceil(x-0.5)` for negative ones, per part for complex values.
    fn round_half_away(self) -> Self;

    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;

    #[inline]
    fn log2(self) -> Self {
        self.ln() / Self::from_real(<Self::Real as RealScalar>::ln2())
    }

    #[inline]
    fn log10(self) -> Self {
        self.ln() / Self::from_real(<Self::Real as RealScalar>::ln10())
    }
}

/// Real element types (`f32`, `f64`).
pub trait RealScalar: Scalar<Real = Self> + PartialOrd {
    fn from_f64_lossy(x: f64) -> Self;
    fn to_f64_lossy(self) -> f64;

    fn epsilon() -> Self;
    fn min_positive() -> Self;
    fn max_value() -> Self;
    fn infinity() -> Self;
    fn nan() -> Self;
    fn ln2() -> Self;
    fn ln10() -> Self;

    /// Distance from `|self|` to the next larger representable value.
    /// NaN and infinities map to NaN.
    fn eps_of(self) -> Self;

    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn powf(self, p: Self) -> Self;
    fn exp2(self) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn is_sign_negative(self) -> bool;

    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_real {
    ($t:ident, $bits:ty, $mant:expr, $exp_mask:expr) => {
        impl Scalar for $t {
            type Real = $t;
            const KIND: ElementKind = impl_real!(@kind $t);

            #[inline]
            fn from_real(re: $t) -> Self {
                re
            }
            #[inline]
            fn from_parts(re: $t, _im: $t) -> Self {
                re
            }
            #[inline]
            fn re(self) -> $t {
                self
            }
            #[inline]
            fn im(self) -> $t {
                0.0
            }
            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn abs(self) -> $t {
                $t::abs(self)
            }
            #[inline]
            fn abs1(self) -> $t {
                $t::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }
            #[inline]
            fn ln(self) -> Self {
                $t::ln(self)
            }
            #[inline]
            fn exp(self) -> Self {
                $t::exp(self)
            }
            #[inline]
            fn tanh(self) -> Self {
                $t::tanh(self)
            }
            #[inline]
            fn pow2(self) -> Self {
                $t::exp2(self)
            }
            #[inline]
            fn round_half_away(self) -> Self {
                if self > 0.0 {
                    $t::floor(self + 0.5)
                } else if self < 0.0 {
                    $t::ceil(self - 0.5)
                } else {
                    self
                }
            }
            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }
            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
            #[inline]
            fn log2(self) -> Self {
                $t::log2(self)
            }
            #[inline]
            fn log10(self) -> Self {
                $t::log10(self)
            }
        }

        impl RealScalar for $t {
            #[inline]
            fn from_f64_lossy(x: f64) -> Self {
                x as $t
            }
            #[inline]
            fn to_f64_lossy(self) -> f64 {
                self as f64
            }
            #[inline]
            fn epsilon() -> Self {
                $t::EPSILON
            }
            #[inline]
            fn min_positive() -> Self {
                $t::MIN_POSITIVE
            }
            #[inline]
            fn max_value() -> Self {
                $t::MAX
            }
            #[inline]
            fn infinity() -> Self {
                $t::INFINITY
            }
            #[inline]
            fn nan() -> Self {
                $t::NAN
            }
            #[inline]
            fn ln2() -> Self {
                std::$t::consts::LN_2
            }
            #[inline]
            fn ln10() -> Self {
                std::$t::consts::LN_10
            }

            fn eps_of(self) -> Self {
                if !$t::is_finite(self) {
                    return $t::NAN;
                }
                let biased = ($t::abs(self).to_bits() & $exp_mask) >> $mant;
                if biased > $mant {
                    $t::from_bits((biased - $mant) << $mant)
                } else if biased > 0 {
                    $t::from_bits((1 as $bits) << (biased - 1))
                } else {
                    // subnormal: spacing is the smallest subnormal
                    $t::from_bits(1)
                }
            }

            #[inline]
            fn floor(self) -> Self {
                $t::floor(self)
            }
            #[inline]
            fn ceil(self) -> Self {
                $t::ceil(self)
            }
            #[inline]
            fn powf(self, p: Self) -> Self {
                $t::powf(self, p)
            }
            #[inline]
            fn exp2(self) -> Self {
                $t::exp2(self)
            }
            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }
            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }
            #[inline]
            fn hypot(self, other: Self) -> Self {
                $t::hypot(self, other)
            }
            #[inline]
            fn is_sign_negative(self) -> bool {
                $t::is_sign_negative(self)
            }
        }
    };
    (@kind f32) => {
        ElementKind::Single
    };
    (@kind f64) => {
        ElementKind::Double
    };
}

impl_real!(f32, u32, 23, 0x7f80_0000);
impl_real!(f64, u64, 52, 0x7ff0_0000_0000_0000);

macro_rules! impl_complex {
    ($t:ident, $kind:expr) => {
        impl Scalar for Complex<$t> {
            type Real = $t;
            const KIND: ElementKind = $kind;

            #[inline]
            fn from_real(re: $t) -> Self {
                Complex::new(re, 0.0)
            }
            #[inline]
            fn from_parts(re: $t, im: $t) -> Self {
                Complex::new(re, im)
            }
            #[inline]
            fn re(self) -> $t {
                self.re
            }
            #[inline]
            fn im(self) -> $t {
                self.im
            }
            #[inline]
            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }
            #[inline]
            fn abs(self) -> $t {
                self.re.hypot(self.im)
            }
            #[inline]
            fn abs1(self) -> $t {
                self.re.abs() + self.im.abs()
            }
            #[inline]
            fn sqrt(self) -> Self {
                Complex::<$t>::sqrt(self)
            }
            #[inline]
            fn ln(self) -> Self {
                Complex::<$t>::ln(self)
            }
            #[inline]
            fn exp(self) -> Self {
                Complex::<$t>::exp(self)
            }
            #[inline]
            fn tanh(self) -> Self {
                Complex::<$t>::tanh(self)
            }
            fn pow2(self) -> Self {
                let theta = self.im * std::$t::consts::LN_2;
                let scale = self.re.exp2();
                Complex::new(scale * theta.cos(), scale * theta.sin())
            }
            #[inline]
            fn round_half_away(self) -> Self {
                Complex::new(
                    Scalar::round_half_away(self.re),
                    Scalar::round_half_away(self.im),
                )
            }
            #[inline]
            fn is_finite(self) -> bool {
                self.re.is_finite() && self.im.is_finite()
            }
            #[inline]
            fn is_nan(self) -> bool {
                self.re.is_nan() || self.im.is_nan()
            }
        }
    };
}

impl_complex!(f32, ElementKind::ComplexSingle);
impl_complex!(f64, ElementKind::ComplexDouble);

/// Elements that can be read as a truth value: nonzero numbers and `true`.
pub trait Truthy: Copy {
    fn is_truthy(self) -> bool;
}

impl<T: Scalar> Truthy for T {
    #[inline]
    fn is_truthy(self) -> bool {
        !self.is_zero()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(self) -> bool {
        self
    }
}
