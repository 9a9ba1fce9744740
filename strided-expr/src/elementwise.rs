//! Elementwise function catalog.
//!
//! Every function here returns a lazy node; nothing is evaluated until the
//! result is assigned, materialised or reduced.

use crate::expr::{Expr, MatrixExpr};
use crate::functor::{
    Abs, AddOp, Conj, DivOp, Func, Imag, IsFinite, Log, Log10, Log2, MulOp, NonZero, Pow2, Real,
    Round, Sign, Sign3, Sqr, Sqrt, SubOp, Tanh,
};
use crate::node::{Map, MatrixDiagonal, ScalarLeft, Trans, ZipWith};
use strided_traits::{Promote, RealScalar, Scalar, Truthy};
use strided_view::Result;

macro_rules! catalog {
    ($($(#[$doc:meta])* $fn_name:ident => $functor:ident where $bound:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $fn_name<E: Expr>(x: E) -> Map<E, $functor>
            where
                E::Elem: $bound,
            {
                Map::new(x, $functor)
            }
        )*
    };
}

catalog! {
    /// `|x|`; complex elements give their modulus.
    abs => Abs where Scalar;
    /// `x * x`
    sqr => Sqr where Scalar;
    sqrt => Sqrt where Scalar;
    /// Natural logarithm.
    log => Log where Scalar;
    log2 => Log2 where Scalar;
    log10 => Log10 where Scalar;
    tanh => Tanh where Scalar;
    /// `2^x`; complex `a+ib` maps to `2^a (cos(b ln2) + i sin(b ln2))`.
    pow2 => Pow2 where Scalar;
    /// Nearest integer with ties away from zero, per part for complex.
    round => Round where Scalar;
    /// `+1` unless the sign bit is set, so `sign(0.0) == 1` and
    /// `sign(-0.0) == -1`. See [`sign3`] for the three-way variant.
    sign => Sign where RealScalar;
    /// `-1`, `0` or `+1` by comparison with zero.
    sign3 => Sign3 where RealScalar;
    /// `1` for finite elements, `0` otherwise.
    is_finite => IsFinite where Scalar;
    conj => Conj where Scalar;
    real => Real where Scalar;
    imag => Imag where Scalar;
    /// `x != 0` per element.
    hold => NonZero where Truthy;
}

/// `pred(x)` per element.
#[inline]
pub fn hold_with<E, P>(x: E, pred: P) -> Map<E, Func<P>>
where
    E: Expr,
    P: Fn(E::Elem) -> bool,
{
    Map::new(x, Func(pred))
}

/// `f(x)` per element for an arbitrary closure.
#[inline]
pub fn map<E, F, R>(x: E, f: F) -> Map<E, Func<F>>
where
    E: Expr,
    F: Fn(E::Elem) -> R,
    R: Copy,
{
    Map::new(x, Func(f))
}

/// Lazy transpose.
#[inline]
pub fn trans<E: MatrixExpr>(m: E) -> Trans<E> {
    Trans::new(m)
}

/// The diagonal of `m` shifted by `k` (above the main one for `k > 0`).
#[inline]
pub fn matrix_diagonal<E: MatrixExpr>(m: E, k: isize) -> MatrixDiagonal<E> {
    MatrixDiagonal::new(m, k)
}

// ============================================================================
// Container by container
// ============================================================================

macro_rules! zip_op {
    ($($(#[$doc:meta])* $fn_name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $fn_name<A, B>(a: A, b: B) -> Result<ZipWith<A, B, $op>>
            where
                A: Expr,
                B: Expr,
                A::Elem: Promote<B::Elem>,
                B::Elem: Scalar,
            {
                ZipWith::new(a, b, $op)
            }
        )*
    };
}

zip_op! {
    /// `a + b`; shapes must match.
    add => AddOp;
    /// `a - b`; shapes must match.
    sub => SubOp;
    /// Elementwise product; shapes must match.
    mul_elem => MulOp;
    /// Elementwise quotient; shapes must match.
    div_elem => DivOp;
}

// ============================================================================
// Scalar by container
// ============================================================================

macro_rules! scalar_op {
    ($($(#[$doc:meta])* $fn_name:ident => $op:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $fn_name<S, E>(s: S, x: E) -> ScalarLeft<S, E, $op>
            where
                S: Promote<E::Elem>,
                E: Expr,
                E::Elem: Scalar,
            {
                ScalarLeft::new(s, x, $op)
            }
        )*
    };
}

scalar_op! {
    /// `s + x` per element.
    scalar_add => AddOp;
    /// `s - x` per element.
    scalar_sub => SubOp;
    /// `s * x` per element.
    scalar_mul => MulOp;
    /// `s / x` per element.
    scalar_div => DivOp;
}
