//! Reductions and predicates over expressions.
//!
//! Everything here drives evaluation: elements are read exactly once, in
//! logical row-major order, and nothing is materialised besides the result.

use crate::expr::{Expr, MatrixExpr, VectorExpr};
use num_traits::Zero;
use strided_traits::{Axis, Promote, Promoted, RealScalar, Scalar, Truthy};
use strided_view::{Result, StridedError, Vector};

/// Fold every element of `x` into an accumulator.
pub fn reduce<E, U, F>(x: E, init: U, mut f: F) -> U
where
    E: Expr,
    F: FnMut(U, E::Elem) -> U,
{
    let mut acc = init;
    for k in 0..x.dims().len() {
        acc = f(acc, x.at_flat(k));
    }
    acc
}

// ============================================================================
// Predicates
// ============================================================================

/// `true` iff `pred` holds for every element; stops at the first failure.
pub fn all<E, P>(x: E, mut pred: P) -> bool
where
    E: Expr,
    P: FnMut(E::Elem) -> bool,
{
    (0..x.dims().len()).all(|k| pred(x.at_flat(k)))
}

/// `true` iff `pred` holds for some element; stops at the first success.
pub fn any<E, P>(x: E, mut pred: P) -> bool
where
    E: Expr,
    P: FnMut(E::Elem) -> bool,
{
    (0..x.dims().len()).any(|k| pred(x.at_flat(k)))
}

/// Every element is non-zero.
pub fn all_nonzero<E>(x: E) -> bool
where
    E: Expr,
    E::Elem: Truthy,
{
    all(x, |e| e.is_truthy())
}

/// Some element is non-zero.
pub fn any_nonzero<E>(x: E) -> bool
where
    E: Expr,
    E::Elem: Truthy,
{
    any(x, |e| e.is_truthy())
}

/// The elements of `v` satisfying `pred`, in order.
pub fn find<E, P>(v: E, mut pred: P) -> Vector<E::Elem>
where
    E: VectorExpr,
    P: FnMut(E::Elem) -> bool,
{
    (0..v.size()).map(|i| v.at(i)).filter(|&x| pred(x)).collect()
}

pub fn find_nonzero<E>(v: E) -> Vector<E::Elem>
where
    E: VectorExpr,
    E::Elem: Truthy,
{
    find(v, |e| e.is_truthy())
}

/// The indices `i` with `pred(v(i))`, ascending.
pub fn which<E, P>(v: E, mut pred: P) -> Vector<usize>
where
    E: VectorExpr,
    P: FnMut(E::Elem) -> bool,
{
    (0..v.size()).filter(|&i| pred(v.at(i))).collect()
}

pub fn which_nonzero<E>(v: E) -> Vector<usize>
where
    E: VectorExpr,
    E::Elem: Truthy,
{
    which(v, |e| e.is_truthy())
}

// ============================================================================
// Sums and products
// ============================================================================

/// Sum of all elements; zero for an empty operand.
pub fn sum<E>(x: E) -> E::Elem
where
    E: Expr,
    E::Elem: Scalar,
{
    reduce(x, E::Elem::zero(), |acc, v| acc + v)
}

/// Sum along `axis`: [`Axis::Rows`] gives one total per column,
/// [`Axis::Columns`] one per row.
pub fn sum_along<E>(m: E, axis: Axis) -> Vector<E::Elem>
where
    E: MatrixExpr,
    E::Elem: Scalar,
{
    let (rows, cols) = (m.nrows(), m.ncols());
    match axis {
        Axis::Rows => Vector::from_fn(cols, |c| {
            (0..rows).fold(E::Elem::zero(), |acc, r| acc + m.at(r, c))
        }),
        Axis::Columns => Vector::from_fn(rows, |r| {
            (0..cols).fold(E::Elem::zero(), |acc, c| acc + m.at(r, c))
        }),
    }
}

/// Sum of `m(i, i)` for `i < min(R, C)`.
pub fn trace<E>(m: E) -> E::Elem
where
    E: MatrixExpr,
    E::Elem: Scalar,
{
    let n = m.nrows().min(m.ncols());
    (0..n).fold(E::Elem::zero(), |acc, i| acc + m.at(i, i))
}

/// `sum(u(i) * v(i))` under the promoted element type, without conjugation.
pub fn dot<A, B>(u: A, v: B) -> Result<Promoted<A::Elem, B::Elem>>
where
    A: VectorExpr,
    B: VectorExpr,
    A::Elem: Promote<B::Elem>,
    B::Elem: Scalar,
{
    if u.size() != v.size() {
        return Err(StridedError::ShapeMismatch(vec![u.size()], vec![v.size()]));
    }
    let zero = Promoted::<A::Elem, B::Elem>::zero();
    Ok((0..u.size()).fold(zero, |acc, i| {
        acc + u.at(i).promote_lhs() * <A::Elem as Promote<B::Elem>>::promote_rhs(v.at(i))
    }))
}

/// `sum_along(a .* b, axis)` for two matrices of equal shape.
pub fn dot_along<A, B>(a: A, b: B, axis: Axis) -> Result<Vector<Promoted<A::Elem, B::Elem>>>
where
    A: MatrixExpr,
    B: MatrixExpr,
    A::Elem: Promote<B::Elem>,
    B::Elem: Scalar,
{
    let product = crate::elementwise::mul_elem(a, b)?;
    Ok(sum_along(product, axis))
}

// ============================================================================
// Extremes
// ============================================================================

/// Pick the extreme of `x` under `better`, skipping NaN unless every
/// element is NaN.
fn extreme<E, F>(x: E, what: &'static str, better: F) -> Result<E::Elem>
where
    E: Expr,
    E::Elem: RealScalar,
    F: Fn(E::Elem, E::Elem) -> bool,
{
    let n = x.dims().len();
    if n == 0 {
        return Err(StridedError::Empty(what));
    }
    let mut best = x.at_flat(0);
    for k in 1..n {
        let v = x.at_flat(k);
        if best.is_nan() || better(v, best) {
            best = v;
        }
    }
    Ok(best)
}

/// Largest element; NaN elements are ignored.
pub fn max<E>(x: E) -> Result<E::Elem>
where
    E: Expr,
    E::Elem: RealScalar,
{
    extreme(x, "max", |a, b| a > b)
}

/// Smallest element; NaN elements are ignored.
pub fn min<E>(x: E) -> Result<E::Elem>
where
    E: Expr,
    E::Elem: RealScalar,
{
    extreme(x, "min", |a, b| a < b)
}

fn extreme_along<E, F>(m: E, axis: Axis, what: &'static str, better: F) -> Result<Vector<E::Elem>>
where
    E: MatrixExpr,
    E::Elem: RealScalar,
    F: Fn(E::Elem, E::Elem) -> bool,
{
    let (rows, cols) = (m.nrows(), m.ncols());
    let (outer, inner) = match axis {
        Axis::Rows => (cols, rows),
        Axis::Columns => (rows, cols),
    };
    if inner == 0 && outer > 0 {
        return Err(StridedError::Empty(what));
    }
    let at = |o: usize, i: usize| match axis {
        Axis::Rows => m.at(i, o),
        Axis::Columns => m.at(o, i),
    };
    Ok(Vector::from_fn(outer, |o| {
        let mut best = at(o, 0);
        for i in 1..inner {
            let v = at(o, i);
            if best.is_nan() || better(v, best) {
                best = v;
            }
        }
        best
    }))
}

/// Per-column ([`Axis::Rows`]) or per-row ([`Axis::Columns`]) maximum.
pub fn max_along<E>(m: E, axis: Axis) -> Result<Vector<E::Elem>>
where
    E: MatrixExpr,
    E::Elem: RealScalar,
{
    extreme_along(m, axis, "max_along", |a, b| a > b)
}

/// Per-column ([`Axis::Rows`]) or per-row ([`Axis::Columns`]) minimum.
pub fn min_along<E>(m: E, axis: Axis) -> Result<Vector<E::Elem>>
where
    E: MatrixExpr,
    E::Elem: RealScalar,
{
    extreme_along(m, axis, "min_along", |a, b| a < b)
}

// ============================================================================
// Norms
// ============================================================================

/// Maximum absolute column sum.
pub fn norm_1<E>(m: E) -> <E::Elem as Scalar>::Real
where
    E: MatrixExpr,
    E::Elem: Scalar,
{
    let (rows, cols) = (m.nrows(), m.ncols());
    (0..cols).fold(Zero::zero(), |best: <E::Elem as Scalar>::Real, c| {
        let s = (0..rows).fold(Zero::zero(), |acc: <E::Elem as Scalar>::Real, r| {
            acc + m.at(r, c).abs()
        });
        best.max_of(s)
    })
}

/// Maximum absolute row sum.
pub fn norm_inf<E>(m: E) -> <E::Elem as Scalar>::Real
where
    E: MatrixExpr,
    E::Elem: Scalar,
{
    norm_1(crate::node::Trans::new(m))
}

pub fn norm_frobenius<E>(x: E) -> <E::Elem as Scalar>::Real
where
    E: Expr,
    E::Elem: Scalar,
{
    reduce(x, <E::Elem as Scalar>::Real::zero(), |acc, v| {
        let a = v.abs();
        acc + a * a
    })
    .sqrt()
}
