//! Shared traits for the strided-linalg crates.
//!
//! This crate holds the pieces every other crate agrees on: the supported
//! element types ([`Scalar`], [`RealScalar`]), mixed-type promotion
//! ([`Promote`]), storage order tags ([`Layout`], [`Order`], [`Axis`]) and
//! the floating point helpers [`eps`], [`realmin`] and [`realmax`].

pub mod layout;
pub mod promote;
pub mod scalar;
pub mod trace;

pub use layout::{Axis, Layout, Order};
pub use promote::{Promote, Promoted, Widen};
pub use scalar::{ElementKind, RealScalar, Scalar, Truthy};

/// Spacing between `x` and the next representable value above `|x|`.
///
/// `eps(1.0)` equals machine epsilon; NaN and infinities give NaN; zero and
/// subnormals give the smallest subnormal.
#[inline]
pub fn eps<T: RealScalar>(x: T) -> T {
    x.eps_of()
}

/// Machine epsilon of `T`, i.e. `eps(1)`.
#[inline]
pub fn eps_one<T: RealScalar>() -> T {
    T::epsilon()
}

/// Smallest positive normalized value of `T`.
#[inline]
pub fn realmin<T: RealScalar>() -> T {
    T::min_positive()
}

/// Largest finite value of `T`.
#[inline]
pub fn realmax<T: RealScalar>() -> T {
    T::max_value()
}
